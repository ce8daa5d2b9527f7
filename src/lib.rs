//! sitewright — static marketing site generator and dev server.
//!
//! One JSON content document in; brand placeholders resolved; a fixed
//! route list rendered either to static files (`build`) or per request
//! (`serve`). The rendering core is pure and shared by both adapters.

pub mod build;
pub mod cli;
pub mod content;
pub mod error;
pub mod nav;
pub mod observability;
pub mod render;
pub mod serve;
