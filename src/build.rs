//! Static site emitter.
//!
//! Renders every route to `<output>/<route>/index.html` (the root page to
//! `<output>/index.html`) from a single content snapshot, and copies the
//! assets directory when one exists. A content load failure aborts the
//! whole build; partial output from an earlier run is overwritten, never
//! cleaned.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::content;
use crate::error::Result;
use crate::render::{ConfirmationQuery, PageKey, render_page};

/// Options for a static build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Path to the content document.
    pub content: PathBuf,
    /// Output directory root.
    pub output: PathBuf,
    /// Assets directory to copy into `<output>/assets`, if present.
    pub assets: Option<PathBuf>,
}

/// Summary of a completed build.
#[derive(Debug)]
pub struct BuildSummary {
    /// Number of pages written.
    pub pages: usize,
    /// Whether an assets directory was copied.
    pub assets_copied: bool,
}

/// Output file for a route, mirroring the route list as directories.
#[must_use]
pub fn output_path(output_root: &Path, key: PageKey) -> PathBuf {
    match key {
        PageKey::Home => output_root.join("index.html"),
        _ => output_root
            .join(key.route().trim_start_matches('/'))
            .join("index.html"),
    }
}

/// Renders all routes to static files.
///
/// # Errors
///
/// Returns an error if the content document fails to load or any output
/// file cannot be written. No retries; the process exit code signals the
/// failure.
pub fn build_site(options: &BuildOptions) -> Result<BuildSummary> {
    let snapshot = content::load_document(&options.content)?;
    let query = ConfirmationQuery::default();

    for key in PageKey::ALL {
        let html = render_page(&snapshot, key, key.route(), &query);
        let path = output_path(&options.output, key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, html)?;
        debug!(route = key.route(), path = %path.display(), "page written");
    }

    let assets_copied = match &options.assets {
        Some(assets) if assets.is_dir() => {
            copy_dir(assets, &options.output.join("assets"))?;
            true
        }
        _ => false,
    };

    info!(
        pages = PageKey::ALL.len(),
        output = %options.output.display(),
        assets_copied,
        "build complete"
    );

    Ok(BuildSummary {
        pages: PageKey::ALL.len(),
        assets_copied,
    })
}

/// Recursively copies a directory tree.
fn copy_dir(from: &Path, to: &Path) -> std::io::Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &str = r#"{
        "meta": {"brand_name": "Acme", "title_suffix": "Acme Email"},
        "nav": [
            {"href": "/", "label": "Home"},
            {"href": "/pricing", "label": "Pricing"}
        ],
        "home": {"hero_headline": "Hello from {{BRAND_NAME}}"}
    }"#;

    fn options(dir: &tempfile::TempDir) -> BuildOptions {
        let content = dir.path().join("site.json");
        fs::write(&content, CONTENT).unwrap();
        BuildOptions {
            content,
            output: dir.path().join("dist"),
            assets: None,
        }
    }

    #[test]
    fn build_writes_one_file_per_route() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(&dir);
        let summary = build_site(&opts).unwrap();
        assert_eq!(summary.pages, 10);

        assert!(opts.output.join("index.html").is_file());
        for route in ["services", "pricing", "faq", "about", "contact", "privacy", "terms", "refund", "confirmation"] {
            assert!(
                opts.output.join(route).join("index.html").is_file(),
                "missing output for /{route}"
            );
        }
    }

    #[test]
    fn build_resolves_placeholders_in_output() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(&dir);
        build_site(&opts).unwrap();
        let home = fs::read_to_string(opts.output.join("index.html")).unwrap();
        assert!(home.contains("Hello from Acme"));
        assert!(!home.contains("{{BRAND_NAME}}"));
    }

    #[test]
    fn confirmation_output_is_noindex_others_indexable() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(&dir);
        build_site(&opts).unwrap();

        let confirmation =
            fs::read_to_string(opts.output.join("confirmation").join("index.html")).unwrap();
        assert!(confirmation.contains("noindex, nofollow"));

        let pricing = fs::read_to_string(opts.output.join("pricing").join("index.html")).unwrap();
        assert!(pricing.contains("\"index, follow\""));
    }

    #[test]
    fn build_fails_loudly_on_missing_content() {
        let dir = tempfile::tempdir().unwrap();
        let opts = BuildOptions {
            content: dir.path().join("absent.json"),
            output: dir.path().join("dist"),
            assets: None,
        };
        assert!(build_site(&opts).is_err());
    }

    #[test]
    fn assets_directory_is_copied_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = options(&dir);
        let assets = dir.path().join("assets");
        fs::create_dir_all(assets.join("img")).unwrap();
        fs::write(assets.join("site.css"), "body{}").unwrap();
        fs::write(assets.join("img").join("logo.svg"), "<svg/>").unwrap();
        opts.assets = Some(assets);

        let summary = build_site(&opts).unwrap();
        assert!(summary.assets_copied);
        assert!(opts.output.join("assets").join("site.css").is_file());
        assert!(opts.output.join("assets").join("img").join("logo.svg").is_file());
    }

    #[test]
    fn output_path_mirrors_route_list() {
        let root = Path::new("dist");
        assert_eq!(output_path(root, PageKey::Home), Path::new("dist/index.html"));
        assert_eq!(
            output_path(root, PageKey::Faq),
            Path::new("dist/faq/index.html")
        );
    }
}
