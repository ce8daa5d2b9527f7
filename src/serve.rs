//! HTTP adapter: serves the route list from the shared rendering core.
//!
//! Each request takes an immutable content snapshot through the
//! modification-time cache and renders with the same pure functions the
//! static emitter uses, so both modes produce identical HTML. Both slash
//! forms of every route are registered; the canonical route (not the raw
//! request path) drives nav highlighting so the forms cannot diverge.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::content::ContentCache;
use crate::error::Result;
use crate::render::{ConfirmationQuery, PageKey, render_page};

/// Options for the dev server.
#[derive(Debug, Clone)]
pub struct ServeOptions {
    /// Path to the content document.
    pub content: PathBuf,
    /// Bind address, e.g. `127.0.0.1:5173`.
    pub bind: String,
}

/// Shared state: the content cache. Render state is per-request.
#[derive(Debug)]
pub struct AppState {
    /// Mtime-keyed read-through cache over the content file.
    pub cache: ContentCache,
}

/// Builds the site router with both slash forms for every route.
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    let mut app = Router::new();
    for key in PageKey::ALL {
        let route = key.route();
        app = app.route(route, get(move |state, query| page(key, state, query)));
        if key != PageKey::Home {
            let slashed = format!("{route}/");
            app = app.route(&slashed, get(move |state, query| page(key, state, query)));
        }
    }
    app.fallback(not_found).with_state(state)
}

/// Runs the dev server until the process is stopped.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve(options: ServeOptions) -> Result<()> {
    let state = Arc::new(AppState {
        cache: ContentCache::new(options.content),
    });
    let app = router(state);

    let listener = TcpListener::bind(&options.bind).await?;
    info!(addr = %listener.local_addr()?, "serving site");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Renders one page, loading a fresh snapshot through the cache.
///
/// A load failure is terminal for this request only: it is logged and
/// answered with a 500; the server stays up and a later request may
/// succeed once the content file is fixed.
///
/// The query string is parsed leniently from its raw form; a malformed or
/// duplicated parameter is dropped at sanitation, never answered with 400.
async fn page(
    key: PageKey,
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> Response {
    let query = ConfirmationQuery::from_raw_query(raw.as_deref());
    match state.cache.snapshot() {
        Ok(content) => Html(render_page(&content, key, key.route(), &query)).into_response(),
        Err(e) => {
            error!(route = key.route(), error = %e, "content load failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

// ============================================================================
// Tests
// ============================================================================
