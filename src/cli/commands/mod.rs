//! CLI command dispatch and handlers.
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod build;
pub mod check;
pub mod completions;
pub mod serve;

use crate::cli::args::{Cli, Commands};
use crate::error::SiteError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli) -> Result<(), SiteError> {
    match cli.command {
        Commands::Build(args) => build::run(&args),
        Commands::Serve(args) => serve::run(args).await,
        Commands::Check(args) => check::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
    }
}
