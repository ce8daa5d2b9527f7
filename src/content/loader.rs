//! Content document loading pipeline.
//!
//! 1. Read the UTF-8 JSON file
//! 2. Parse to a raw tree
//! 3. Require the `meta` and `nav` top-level keys
//! 4. Resolve brand placeholders (see [`crate::content::placeholder`])
//! 5. Deserialize to the typed [`SiteContent`] schema
//! 6. Freeze with `Arc`
//!
//! Each load produces an independent immutable snapshot; nothing here is
//! mutated after step 6. Serve mode layers a modification-time keyed
//! read-through cache on top so unchanged files are parsed once.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

use serde_json::Value;
use tracing::{debug, info};

use crate::content::placeholder;
use crate::content::schema::SiteContent;
use crate::error::ContentError;

// ============================================================================
// Loading
// ============================================================================

/// Reads and parses the raw content document, checking required keys.
///
/// No placeholder resolution happens here; `check` uses this to inspect
/// the document as written.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, not valid JSON,
/// not an object at the root, or lacks `meta` or `nav`.
pub fn read_raw(path: &Path) -> Result<Value, ContentError> {
    let raw = fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ContentError::MissingFile {
                path: path.to_path_buf(),
            }
        } else {
            ContentError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let value: Value = serde_json::from_str(&raw).map_err(|e| ContentError::Malformed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let Some(object) = value.as_object() else {
        return Err(ContentError::NotAnObject {
            path: path.to_path_buf(),
        });
    };

    for key in ["meta", "nav"] {
        if !object.contains_key(key) {
            return Err(ContentError::MissingKey {
                key,
                path: path.to_path_buf(),
            });
        }
    }

    Ok(value)
}

/// Deserializes a placeholder-resolved raw tree into the typed schema.
///
/// # Errors
///
/// Returns an error if the tree does not match the document schema.
pub fn from_resolved(path: &Path, resolved: Value) -> Result<SiteContent, ContentError> {
    serde_json::from_value(resolved).map_err(|e| ContentError::Malformed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Runs the full pipeline: read, check, resolve, deserialize, freeze.
///
/// # Errors
///
/// Returns an error on any load or parse failure; there are no retries.
pub fn load_document(path: &Path) -> Result<Arc<SiteContent>, ContentError> {
    let raw = read_raw(path)?;
    let resolved = placeholder::resolve_document(raw);
    let content = from_resolved(path, resolved)?;
    debug!(path = %path.display(), nav_items = content.nav.len(), "content document loaded");
    Ok(Arc::new(content))
}

// ============================================================================
// Read-Through Cache
// ============================================================================

/// Modification-time keyed cache over [`load_document`].
///
/// Serve mode shares one of these across requests. A snapshot is reused
/// while the content file's mtime is unchanged and reloaded the moment it
/// differs, so staleness is bounded by content change. Build and check
/// mode bypass the cache entirely.
#[derive(Debug)]
pub struct ContentCache {
    path: PathBuf,
    slot: Mutex<Option<(SystemTime, Arc<SiteContent>)>>,
}

impl ContentCache {
    /// Creates an empty cache for the given content file.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            slot: Mutex::new(None),
        }
    }

    /// Path of the underlying content file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the current snapshot, reloading if the file changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be statted or loaded. The cache
    /// keeps its previous entry on failure; a later call may still succeed.
    ///
    /// # Panics
    ///
    /// Panics if the cache mutex is poisoned.
    pub fn snapshot(&self) -> Result<Arc<SiteContent>, ContentError> {
        let mtime = fs::metadata(&self.path)
            .and_then(|m| m.modified())
            .map_err(|source| {
                if source.kind() == std::io::ErrorKind::NotFound {
                    ContentError::MissingFile {
                        path: self.path.clone(),
                    }
                } else {
                    ContentError::Unreadable {
                        path: self.path.clone(),
                        source,
                    }
                }
            })?;

        let mut slot = self.slot.lock().expect("content cache mutex poisoned");
        if let Some((cached_mtime, content)) = slot.as_ref() {
            if *cached_mtime == mtime {
                return Ok(Arc::clone(content));
            }
            info!(path = %self.path.display(), "content file changed, reloading");
        }

        let content = load_document(&self.path)?;
        *slot = Some((mtime, Arc::clone(&content)));
        Ok(content)
    }
}

// ============================================================================
// Tests
// ============================================================================
