//! Page rendering: the page key table and full-document HTML assembly.
//!
//! Each render is a pure function of (page key, resolved content snapshot,
//! request path, confirmation query). The per-page title, description, and
//! robots directive live in one static table here; nothing else in the
//! crate repeats them.

pub mod html;
pub mod pages;

use crate::content::schema::{Meta, SiteContent};
use crate::nav;

// ============================================================================
// Page Keys
// ============================================================================

/// Identifier selecting which content subtree and template apply to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKey {
    /// Home page (`/`).
    Home,
    /// Services page.
    Services,
    /// Pricing page.
    Pricing,
    /// FAQ page.
    Faq,
    /// About page.
    About,
    /// Contact page.
    Contact,
    /// Privacy policy.
    Privacy,
    /// Terms of service.
    Terms,
    /// Refund policy.
    Refund,
    /// Post-payment confirmation page.
    Confirmation,
}

impl PageKey {
    /// Every page, in route-list order.
    pub const ALL: [Self; 10] = [
        Self::Home,
        Self::Services,
        Self::Pricing,
        Self::Faq,
        Self::About,
        Self::Contact,
        Self::Privacy,
        Self::Terms,
        Self::Refund,
        Self::Confirmation,
    ];

    /// Canonical route path (no trailing slash except the root).
    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Services => "/services",
            Self::Pricing => "/pricing",
            Self::Faq => "/faq",
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::Privacy => "/privacy",
            Self::Terms => "/terms",
            Self::Refund => "/refund",
            Self::Confirmation => "/confirmation",
        }
    }

    /// Page-specific title segment. Empty only for the home page, whose
    /// full title is the bare title suffix.
    #[must_use]
    pub const fn title_segment(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Services => "Services",
            Self::Pricing => "Pricing",
            Self::Faq => "FAQ",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::Privacy => "Privacy Policy",
            Self::Terms => "Terms of Service",
            Self::Refund => "Refund Policy",
            Self::Confirmation => "Payment Received — Next Steps",
        }
    }

    /// Robots directive. Only the confirmation page is non-indexable.
    #[must_use]
    pub const fn robots(self) -> &'static str {
        match self {
            Self::Confirmation => "noindex, nofollow",
            _ => "index, follow",
        }
    }

    /// Fixed per-page meta description. The home page uses the content
    /// document's SEO description; legal pages interpolate the brand name.
    #[must_use]
    pub fn description(self, meta: &Meta) -> String {
        match self {
            Self::Home => meta.seo_description.clone(),
            Self::Services => {
                "48-hour email authentication setup: SPF, DKIM, DMARC configuration with objective verification."
                    .to_string()
            }
            Self::Pricing => {
                "Simple flat pricing: $199 one-time for complete email authentication setup."
                    .to_string()
            }
            Self::Faq => {
                "Frequently asked questions about email authentication setup and bulk-sender compliance."
                    .to_string()
            }
            Self::About => {
                "Learn about our focused, proof-based email authentication setup service."
                    .to_string()
            }
            Self::Contact => {
                "Contact us for email authentication setup questions or support.".to_string()
            }
            Self::Privacy => format!("Privacy Policy for {}.", meta.brand_name()),
            Self::Terms => format!("Terms of Service for {}.", meta.brand_name()),
            Self::Refund => format!("Refund Policy for {}.", meta.brand_name()),
            Self::Confirmation => {
                "Payment confirmed. Next steps for your 48-hour email authentication setup."
                    .to_string()
            }
        }
    }

    /// Full page title: `"{segment} | {suffix}"`, or the bare suffix for
    /// the home page.
    #[must_use]
    pub fn full_title(self, meta: &Meta) -> String {
        let segment = self.title_segment();
        if segment.is_empty() {
            meta.title_suffix().to_string()
        } else {
            format!("{segment} | {}", meta.title_suffix())
        }
    }

    /// Looks up the page for a request path, accepting any normalized form.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let normalized = nav::normalize_path(path);
        Self::ALL.into_iter().find(|key| key.route() == normalized)
    }
}

// ============================================================================
// Confirmation Query
// ============================================================================

/// Query parameters accepted by the confirmation route. Display-sanitized,
/// never trusted for business logic, never stored.
#[derive(Debug, Clone, Default)]
pub struct ConfirmationQuery {
    /// Stripe checkout session id (first priority for the reference line).
    pub session_id: Option<String>,
    /// Generic reference (second priority).
    pub reference: Option<String>,
    /// Alternate checkout session id (third priority).
    pub checkout_session_id: Option<String>,
    /// Informational email for the "we'll send updates" notice.
    pub client_email: Option<String>,
}

impl ConfirmationQuery {
    /// Parses a raw query string leniently. Unknown keys are ignored, the
    /// first occurrence of a duplicated key wins, and anything that fails
    /// to parse yields the empty query. A bad query string never fails the
    /// request; sanitation happens at display time.
    #[must_use]
    pub fn from_raw_query(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        let Ok(pairs) = serde_urlencoded::from_str::<Vec<(String, String)>>(raw) else {
            return Self::default();
        };

        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "session_id" => &mut query.session_id,
                "reference" => &mut query.reference,
                "checkout_session_id" => &mut query.checkout_session_id,
                "client_email" => &mut query.client_email,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// Display reference: first present of `session_id` / `reference` /
    /// `checkout_session_id`, truncated to 64 characters, then restricted
    /// to `[A-Za-z0-9_-]`. `None` when nothing survives sanitation.
    #[must_use]
    pub fn sanitized_reference(&self) -> Option<String> {
        let raw = self
            .session_id
            .as_deref()
            .or(self.reference.as_deref())
            .or(self.checkout_session_id.as_deref())?;
        let safe: String = raw
            .chars()
            .take(64)
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
            .collect();
        if safe.is_empty() { None } else { Some(safe) }
    }

    /// Email for the informational notice: shown only if it contains `@`
    /// and is under 100 characters. No further validation.
    #[must_use]
    pub fn display_email(&self) -> Option<&str> {
        let email = self.client_email.as_deref()?;
        (email.contains('@') && email.len() < 100).then_some(email)
    }
}

// ============================================================================
// Document Assembly
// ============================================================================

/// Renders a complete HTML document for one page.
#[must_use]
pub fn render_page(
    content: &SiteContent,
    key: PageKey,
    request_path: &str,
    query: &ConfirmationQuery,
) -> String {
    let meta = &content.meta;
    let resolved_nav = nav::resolve_nav(&content.nav, request_path);

    let nav_items: String = resolved_nav
        .iter()
        .map(|item| {
            let current = if item.is_current {
                " aria-current=\"page\""
            } else {
                ""
            };
            format!(
                "<li><a href=\"{}\"{current}>{}</a></li>",
                html::escape(&item.href),
                html::escape(&item.label)
            )
        })
        .collect();

    let mut sections = Vec::new();
    sections.push("<!DOCTYPE html>".to_string());
    sections.push("<html lang=\"en\">".to_string());
    sections.push("<head>".to_string());
    sections.push("<meta charset=\"utf-8\">".to_string());
    sections.push(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">".to_string(),
    );
    sections.push(format!("<title>{}</title>", html::escape(&key.full_title(meta))));
    sections.push(format!(
        "<meta name=\"description\" content=\"{}\">",
        html::escape(&key.description(meta))
    ));
    sections.push(format!("<meta name=\"robots\" content=\"{}\">", key.robots()));
    sections.push("</head>".to_string());
    sections.push("<body>".to_string());
    sections.push("<header class=\"site-header\">".to_string());
    sections.push(format!(
        "<a class=\"brand\" href=\"/\">{}</a>",
        html::escape(meta.brand_name())
    ));
    sections.push(format!(
        "<nav class=\"main-nav\"><ul class=\"nav-list\">{nav_items}</ul></nav>"
    ));
    sections.push("</header>".to_string());
    sections.push("<main>".to_string());
    sections.push(pages::body(content, key, query));
    sections.push("</main>".to_string());
    sections.push(pages::footer(meta));
    sections.push("</body>".to_string());
    sections.push("</html>".to_string());
    sections.join("\n")
}

// ============================================================================
// Tests
// ============================================================================
