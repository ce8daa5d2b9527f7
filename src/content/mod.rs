//! Content store: document schema, loading pipeline, and placeholder
//! resolution for the single JSON content document.

pub mod loader;
pub mod placeholder;
pub mod schema;

pub use loader::{ContentCache, load_document};
pub use schema::SiteContent;
