//! Shared integration-test harness: canonical content fixture and a helper
//! for spawning the `sitewright` binary.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Output;

/// A canonical content document exercising placeholders, nav, and every
/// page subtree the renderer reads.
pub const SAMPLE_CONTENT: &str = r#"{
  "meta": {
    "brand_name": "Acme",
    "domain": "acme.test",
    "contact_email": "hello@acme.test",
    "location": "Boston, MA",
    "stripe_payment_link_url": "https://pay.test/acme",
    "intake_form_url": "https://forms.test/intake",
    "title_suffix": "Acme Email Setup",
    "seo_description": "Acme configures email authentication."
  },
  "nav": [
    { "href": "/", "label": "Home" },
    { "href": "/services", "label": "Services" },
    { "href": "/pricing", "label": "Pricing" },
    { "href": "/faq", "label": "FAQ" }
  ],
  "home": {
    "hero_headline": "Welcome to {{BRAND_NAME}}",
    "hero_subheadline": "Serving {{DOMAIN}} from {{LOCATION}}.",
    "primary_cta_label": "Buy now",
    "primary_cta_href": "{{STRIPE_PAYMENT_LINK_URL}}",
    "sections": [
      { "title": "What you get", "bullets": ["SPF", "DKIM", "DMARC"] }
    ]
  },
  "services": {
    "headline": "Services",
    "sections": [
      { "title": "Setup", "paragraphs": ["We configure records."] }
    ]
  },
  "pricing": {
    "headline": "Pricing",
    "tiers": [
      {
        "name": "Complete",
        "price": "$199",
        "who_its_for": "One domain.",
        "includes": ["Everything"],
        "cta_label": "Start",
        "cta_href": "{{STRIPE_PAYMENT_LINK_URL}}"
      }
    ],
    "fine_print": ["No subscription."]
  },
  "faq": {
    "headline": "FAQ",
    "items": [
      { "q": "How fast?", "a": "48 hours." }
    ]
  },
  "about": {
    "headline": "About {{BRAND_NAME}}",
    "paragraphs": ["Small and focused."]
  },
  "contact": {
    "headline": "Contact",
    "paragraphs": ["Email is fastest."],
    "contact_blocks": [
      { "label": "Email", "value": "{{CONTACT_EMAIL}}" },
      { "label": "Phone", "value": "{{PHONE}}" }
    ]
  },
  "privacy": {
    "headline": "Privacy Policy",
    "sections": [{ "title": "Data", "paragraphs": ["We keep little."] }]
  },
  "terms": {
    "headline": "Terms of Service",
    "sections": [{ "title": "Scope", "paragraphs": ["One domain."] }]
  },
  "refund": {
    "headline": "Refund Policy",
    "sections": [{ "title": "Window", "paragraphs": ["Before DNS changes."] }]
  }
}"#;

/// Writes the canonical fixture into `dir` and returns its path.
pub fn write_sample_content(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("site_copy.json");
    std::fs::write(&path, SAMPLE_CONTENT).expect("failed to write fixture");
    path
}

/// Runs the `sitewright` binary with the given arguments and waits for it.
pub fn spawn_command(args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_sitewright");
    std::process::Command::new(bin)
        .args(args)
        .output()
        .expect("failed to spawn sitewright")
}
