//! Router-level tests for the HTTP adapter, driven through
//! `tower::ServiceExt::oneshot` without binding a socket.

mod common;

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use sitewright::content::ContentCache;
use sitewright::serve::{AppState, router};

fn test_app(dir: &tempfile::TempDir) -> Router {
    let content = common::write_sample_content(dir);
    router(Arc::new(AppState {
        cache: ContentCache::new(content),
    }))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn all_routes_respond_ok() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);
    for route in [
        "/", "/services", "/pricing", "/faq", "/about", "/contact", "/privacy", "/terms",
        "/refund", "/confirmation",
    ] {
        let (status, body) = get(app.clone(), route).await;
        assert_eq!(status, StatusCode::OK, "route {route}");
        assert!(body.starts_with("<!DOCTYPE html>"), "route {route}");
    }
}

#[tokio::test]
async fn trailing_slash_form_matches_bare_form() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);
    for route in ["/services", "/pricing", "/faq", "/confirmation"] {
        let (_, bare) = get(app.clone(), route).await;
        let (_, slashed) = get(app.clone(), &format!("{route}/")).await;
        assert_eq!(bare, slashed, "route {route}");
    }
}

#[tokio::test]
async fn current_nav_item_is_marked_per_route() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let (_, body) = get(app.clone(), "/services").await;
    assert!(body.contains("<a href=\"/services/\" aria-current=\"page\">Services</a>"));
    assert_eq!(body.matches("aria-current").count(), 1);

    // Confirmation is not in the nav, so nothing is current.
    let (_, body) = get(app, "/confirmation").await;
    assert_eq!(body.matches("aria-current").count(), 0);
}

#[tokio::test]
async fn page_titles_follow_suffix_rule() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let (_, home) = get(app.clone(), "/").await;
    assert!(home.contains("<title>Acme Email Setup</title>"));

    let (_, pricing) = get(app, "/pricing").await;
    assert!(pricing.contains("<title>Pricing | Acme Email Setup</title>"));
}

#[tokio::test]
async fn robots_directives_per_route() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let (_, confirmation) = get(app.clone(), "/confirmation").await;
    assert!(confirmation.contains("content=\"noindex, nofollow\""));

    for route in ["/", "/services", "/privacy"] {
        let (_, body) = get(app.clone(), route).await;
        assert!(body.contains("content=\"index, follow\""), "route {route}");
    }
}

#[tokio::test]
async fn confirmation_query_is_sanitized_for_display() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let (_, body) = get(
        app.clone(),
        "/confirmation?session_id=abc123!!!&client_email=notanemail",
    )
    .await;
    assert!(body.contains(">abc123<"), "symbols stripped from reference");
    assert!(!body.contains("abc123!!!"));
    assert!(
        !body.contains("client-email-notice"),
        "notice suppressed without @"
    );

    let (_, body) = get(app, "/confirmation?client_email=a@b.com").await;
    assert!(body.contains("client-email-notice"));
    assert!(body.contains("a@b.com"));
}

#[tokio::test]
async fn confirmation_duplicate_query_param_still_renders() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let (status, body) = get(app.clone(), "/confirmation?session_id=a&session_id=b").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(">a<"), "first occurrence wins");

    // Garbage query strings degrade to the empty query, never an error.
    let (status, body) = get(app, "/confirmation?%%%&==&session_id").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<!DOCTYPE html>"));
}

#[tokio::test]
async fn contact_page_masks_unset_optional_fields() {
    let dir = tempfile::tempdir().unwrap();
    let (_, body) = get(test_app(&dir), "/contact").await;
    assert!(body.contains("Not provided"));
    assert!(!body.contains("{{PHONE}}"));
    assert!(body.contains("mailto:hello@acme.test"));
}
