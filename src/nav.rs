//! Navigation state resolution.
//!
//! Given the ordered nav item list and the current request path, computes
//! display hrefs and marks the item matching the current page. Matching is
//! exact string equality on normalized paths; there is no prefix or
//! partial-segment matching, so at most one item is current per render
//! provided the nav list contains no duplicate normalized hrefs (a
//! precondition on the content document, not enforced here).

use crate::content::schema::NavItem;

// ============================================================================
// Path Normalization
// ============================================================================

/// Normalizes a request path or nav href for comparison.
///
/// Strips an `index.html` suffix, then a `.html` suffix, then a single
/// trailing slash. The root always normalizes to `/`, never the empty
/// string. Normalization is idempotent.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let stripped = path.strip_suffix("index.html").unwrap_or(path);
    let stripped = stripped.strip_suffix(".html").unwrap_or(stripped);
    let stripped = stripped.strip_suffix('/').unwrap_or(stripped);
    if stripped.is_empty() {
        "/".to_string()
    } else {
        stripped.to_string()
    }
}

/// Display form of a nav href: the root stays `/`; every other href
/// carries exactly one trailing slash regardless of how it was stored.
#[must_use]
pub fn display_href(href: &str) -> String {
    if href == "/" {
        return "/".to_string();
    }
    let base = href.strip_suffix('/').unwrap_or(href);
    format!("{base}/")
}

// ============================================================================
// Nav Resolution
// ============================================================================

/// A nav item augmented with render-time state. Derived per request,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNavItem {
    /// Display href (trailing-slash form).
    pub href: String,
    /// Visible label.
    pub label: String,
    /// True iff this item's normalized href equals the normalized
    /// current path.
    pub is_current: bool,
}

/// Resolves the nav list against the current request path.
#[must_use]
pub fn resolve_nav(nav: &[NavItem], current_path: &str) -> Vec<ResolvedNavItem> {
    let current = normalize_path(current_path);
    nav.iter()
        .map(|item| ResolvedNavItem {
            href: display_href(&item.href),
            label: item.label.clone(),
            is_current: normalize_path(&item.href) == current,
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
