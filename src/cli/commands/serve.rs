//! `serve` command handler.

use crate::cli::args::ServeArgs;
use crate::error::SiteError;
use crate::serve::{ServeOptions, serve};

/// Execute `serve`: run the dev server until interrupted.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn run(args: ServeArgs) -> Result<(), SiteError> {
    serve(ServeOptions {
        content: args.content,
        bind: args.bind,
    })
    .await
}
