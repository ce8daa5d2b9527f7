//! `build` command handler.

use crate::build::{BuildOptions, build_site};
use crate::cli::args::BuildArgs;
use crate::error::SiteError;

/// Execute `build`: render all routes to static files.
///
/// # Errors
///
/// Returns an error if the content document fails to load or output
/// cannot be written; the process exits non-zero with the diagnostic on
/// stderr.
pub fn run(args: &BuildArgs) -> Result<(), SiteError> {
    eprintln!("Building site...");
    eprintln!("  content: {}", args.content.display());
    eprintln!("  output:  {}", args.output.display());

    let options = BuildOptions {
        content: args.content.clone(),
        output: args.output.clone(),
        assets: args.assets.is_dir().then(|| args.assets.clone()),
    };

    let summary = build_site(&options)?;

    eprintln!("Wrote {} pages", summary.pages);
    if summary.assets_copied {
        eprintln!("Copied assets from {}", args.assets.display());
    }

    Ok(())
}
