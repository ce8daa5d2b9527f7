//! Typed content document schema.
//!
//! The single JSON content document deserializes into these structs after
//! placeholder resolution. Page subtrees and their fields are optional:
//! a missing section simply renders empty. `meta` and `nav` are required
//! at the top level; the loader rejects documents without them.

use serde::{Deserialize, Serialize};

use crate::content::placeholder;

// ============================================================================
// Document Root
// ============================================================================

/// The complete content document: site metadata, navigation, and one
/// subtree per page. Immutable once loaded; treated as a snapshot for the
/// duration of a single render.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteContent {
    /// Site-wide metadata and token replacement values.
    pub meta: Meta,
    /// Ordered navigation bar entries.
    pub nav: Vec<NavItem>,
    /// Home page content.
    #[serde(default)]
    pub home: HomeContent,
    /// Services page content.
    #[serde(default)]
    pub services: PageContent,
    /// Pricing page content.
    #[serde(default)]
    pub pricing: PricingContent,
    /// FAQ page content (also surfaced on the home page).
    #[serde(default)]
    pub faq: FaqContent,
    /// About page content.
    #[serde(default)]
    pub about: ProseContent,
    /// Contact page content.
    #[serde(default)]
    pub contact: ContactContent,
    /// Privacy policy sections.
    #[serde(default)]
    pub privacy: PageContent,
    /// Terms of service sections.
    #[serde(default)]
    pub terms: PageContent,
    /// Refund policy sections.
    #[serde(default)]
    pub refund: PageContent,
}

// ============================================================================
// Metadata
// ============================================================================

/// Site-wide metadata record.
///
/// Every field is optional in the file. The accessors apply the documented
/// defaults so callers never see an absent or empty value where a default
/// exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    /// Brand name shown in the header, footer, and copy.
    #[serde(default)]
    pub brand_name: String,
    /// Primary domain, used in copy only.
    #[serde(default)]
    pub domain: String,
    /// Contact email address.
    #[serde(default)]
    pub contact_email: String,
    /// Physical location line for the footer.
    #[serde(default)]
    pub location: String,
    /// Stripe payment link URL for purchase CTAs.
    #[serde(default)]
    pub stripe_payment_link_url: String,
    /// Intake form URL shown after payment.
    #[serde(default)]
    pub intake_form_url: String,
    /// Suffix appended to every page title.
    #[serde(default)]
    pub title_suffix: String,
    /// SEO description for the home page.
    #[serde(default)]
    pub seo_description: String,
}

impl Meta {
    /// Brand name, falling back to the token table's default.
    #[must_use]
    pub fn brand_name(&self) -> &str {
        non_empty_or(&self.brand_name, placeholder::BRAND_NAME.default)
    }

    /// Contact email, falling back to the token table's default.
    #[must_use]
    pub fn contact_email(&self) -> &str {
        non_empty_or(&self.contact_email, placeholder::CONTACT_EMAIL.default)
    }

    /// Footer location line, falling back to the token table's default.
    #[must_use]
    pub fn location(&self) -> &str {
        non_empty_or(&self.location, placeholder::LOCATION.default)
    }

    /// Payment link, falling back to the token table's default.
    #[must_use]
    pub fn stripe_payment_link_url(&self) -> &str {
        non_empty_or(
            &self.stripe_payment_link_url,
            placeholder::STRIPE_PAYMENT_LINK_URL.default,
        )
    }

    /// Intake form link, falling back to the token table's default.
    #[must_use]
    pub fn intake_form_url(&self) -> &str {
        non_empty_or(&self.intake_form_url, placeholder::INTAKE_FORM_URL.default)
    }

    /// Title suffix, falling back to the brand name.
    #[must_use]
    pub fn title_suffix(&self) -> &str {
        non_empty_or(&self.title_suffix, self.brand_name())
    }
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}

// ============================================================================
// Navigation
// ============================================================================

/// One navigation bar entry as stored in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Link target, with or without a trailing slash.
    pub href: String,
    /// Visible label.
    pub label: String,
}

// ============================================================================
// Page Subtrees
// ============================================================================

/// A titled content section: optional paragraphs followed by optional
/// bullets. Shared by the home, services, and legal page shapes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Section {
    /// Section heading.
    #[serde(default)]
    pub title: String,
    /// Paragraph copy, in order.
    #[serde(default)]
    pub paragraphs: Vec<String>,
    /// Bullet list items, in order.
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// Home page content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HomeContent {
    /// Hero headline.
    #[serde(default)]
    pub hero_headline: String,
    /// Hero subheadline.
    #[serde(default)]
    pub hero_subheadline: String,
    /// Primary call-to-action label.
    #[serde(default)]
    pub primary_cta_label: String,
    /// Primary call-to-action target.
    #[serde(default)]
    pub primary_cta_href: String,
    /// Content sections below the hero.
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Generic headlined page made of sections (services, legal pages).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageContent {
    /// Page headline.
    #[serde(default)]
    pub headline: String,
    /// Content sections, in order.
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Pricing page content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingContent {
    /// Page headline.
    #[serde(default)]
    pub headline: String,
    /// Pricing tiers, in order.
    #[serde(default)]
    pub tiers: Vec<PricingTier>,
    /// Fine-print bullet items.
    #[serde(default)]
    pub fine_print: Vec<String>,
}

/// One pricing tier card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingTier {
    /// Tier name.
    #[serde(default)]
    pub name: String,
    /// Displayed price string.
    #[serde(default)]
    pub price: String,
    /// Audience line.
    #[serde(default)]
    pub who_its_for: String,
    /// Included feature lines.
    #[serde(default)]
    pub includes: Vec<String>,
    /// Call-to-action label.
    #[serde(default)]
    pub cta_label: String,
    /// Call-to-action target.
    #[serde(default)]
    pub cta_href: String,
}

/// FAQ page content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaqContent {
    /// Page headline.
    #[serde(default)]
    pub headline: String,
    /// Question/answer pairs, in order.
    #[serde(default)]
    pub items: Vec<FaqItem>,
}

/// One FAQ accordion entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaqItem {
    /// Question text.
    #[serde(default)]
    pub q: String,
    /// Answer text.
    #[serde(default)]
    pub a: String,
}

/// About page content: headline, paragraphs, bullets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProseContent {
    /// Page headline.
    #[serde(default)]
    pub headline: String,
    /// Paragraph copy, in order.
    #[serde(default)]
    pub paragraphs: Vec<String>,
    /// Bullet list items.
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// Contact page content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactContent {
    /// Page headline.
    #[serde(default)]
    pub headline: String,
    /// Intro paragraphs.
    #[serde(default)]
    pub paragraphs: Vec<String>,
    /// Labelled contact detail rows.
    #[serde(default)]
    pub contact_blocks: Vec<ContactBlock>,
}

/// One labelled contact detail (e.g. Email / Hours / Phone).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactBlock {
    /// Row label.
    #[serde(default)]
    pub label: String,
    /// Row value. May still be a literal `{{...}}` wrapper when the site
    /// owner never provided the optional field; the renderer shows
    /// "Not provided" for those.
    #[serde(default)]
    pub value: String,
}

// ============================================================================
// Tests
// ============================================================================
