//! `check` command handler: validate content documents without rendering.

use std::path::Path;

use serde_json::json;

use crate::cli::args::{CheckArgs, OutputFormat};
use crate::content::{loader, placeholder};
use crate::error::{ContentError, SiteError};

/// Outcome of checking a single content document.
#[derive(Debug)]
struct FileReport {
    path: String,
    error: Option<String>,
    /// Unrecognized `{{...}}` markers surviving resolution.
    warnings: Vec<String>,
}

/// Execute `check`.
///
/// Loads each document through the full pipeline (parse, required keys,
/// placeholder resolution, typed deserialization) and reports leftover
/// unrecognized tokens as warnings.
///
/// # Errors
///
/// Returns an error if any file fails to load, or — with `--strict` — if
/// any file produces warnings.
pub fn run(args: &CheckArgs) -> Result<(), SiteError> {
    let reports: Vec<FileReport> = args.files.iter().map(|path| check_file(path)).collect();

    let error_count = reports.iter().filter(|r| r.error.is_some()).count();
    let warning_count: usize = reports.iter().map(|r| r.warnings.len()).sum();

    match args.format {
        OutputFormat::Human => print_human(&reports),
        OutputFormat::Json => print_json(&reports, error_count, warning_count),
    }

    if let Some(failed) = reports.iter().find(|r| r.error.is_some()) {
        return Err(ContentError::Malformed {
            path: failed.path.clone().into(),
            message: failed.error.clone().unwrap_or_default(),
        }
        .into());
    }

    if args.strict && warning_count > 0 {
        let failed = reports
            .iter()
            .find(|r| !r.warnings.is_empty())
            .expect("warning_count > 0 implies a report with warnings");
        return Err(ContentError::Malformed {
            path: failed.path.clone().into(),
            message: format!("unrecognized tokens: {}", failed.warnings.join(", ")),
        }
        .into());
    }

    Ok(())
}

fn check_file(path: &Path) -> FileReport {
    let display = path.display().to_string();

    let raw = match loader::read_raw(path) {
        Ok(raw) => raw,
        Err(e) => {
            return FileReport {
                path: display,
                error: Some(e.to_string()),
                warnings: Vec::new(),
            };
        }
    };

    let resolved = placeholder::resolve_document(raw);
    let warnings = placeholder::unresolved_tokens(&resolved);

    let error = loader::from_resolved(path, resolved)
        .err()
        .map(|e| e.to_string());

    FileReport {
        path: display,
        error,
        warnings,
    }
}

fn print_human(reports: &[FileReport]) {
    for report in reports {
        match &report.error {
            Some(error) => println!("{}: ERROR: {error}", report.path),
            None if report.warnings.is_empty() => println!("{}: ok", report.path),
            None => {
                println!("{}: ok ({} warnings)", report.path, report.warnings.len());
                for token in &report.warnings {
                    println!("  warning: unrecognized token {token}");
                }
            }
        }
    }
}

fn print_json(reports: &[FileReport], error_count: usize, warning_count: usize) {
    let files: Vec<_> = reports
        .iter()
        .map(|report| {
            json!({
                "path": report.path,
                "status": if report.error.is_some() { "error" } else { "ok" },
                "error": report.error,
                "warnings": report.warnings,
            })
        })
        .collect();

    let output = json!({
        "files": files,
        "summary": {
            "checked": reports.len(),
            "errors": error_count,
            "warnings": warning_count,
        }
    });

    println!("{output}");
}

// ============================================================================
// Tests
// ============================================================================
