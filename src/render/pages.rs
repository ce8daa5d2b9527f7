//! Per-page body markup.
//!
//! One builder per template: home, services, pricing, FAQ, about, contact,
//! legal (shared by the three policy pages), and confirmation. All content
//! text passes through [`html::escape`]; hrefs coming from the content
//! document are escaped as attribute values.

use chrono::Datelike;

use crate::content::schema::{Meta, Section, SiteContent};
use crate::render::html;
use crate::render::{ConfirmationQuery, PageKey};

/// Renders the body markup for the given page.
#[must_use]
pub fn body(content: &SiteContent, key: PageKey, query: &ConfirmationQuery) -> String {
    match key {
        PageKey::Home => home(content),
        PageKey::Services => services(content),
        PageKey::Pricing => pricing(content),
        PageKey::Faq => faq(content),
        PageKey::About => about(content),
        PageKey::Contact => contact(content),
        PageKey::Privacy => legal(&content.privacy.headline, &content.privacy.sections),
        PageKey::Terms => legal(&content.terms.headline, &content.terms.sections),
        PageKey::Refund => legal(&content.refund.headline, &content.refund.sections),
        PageKey::Confirmation => confirmation(&content.meta, query),
    }
}

/// Renders the shared site footer: brand block, legitimate-sender notice,
/// and the copyright line for the current year.
#[must_use]
pub fn footer(meta: &Meta) -> String {
    let year = chrono::Utc::now().year();
    let email = html::escape(meta.contact_email());
    format!(
        concat!(
            "<footer class=\"site-footer\">\n",
            "<div class=\"footer-brand\">\n",
            "<h3>{brand}</h3>\n",
            "<p>Located in {location}</p>\n",
            "<p><a href=\"mailto:{email}\">{email}</a></p>\n",
            "</div>\n",
            "<p class=\"footer-notice\"><strong>Notice:</strong> We do not support spam ",
            "or illicit email practices. We only work with legitimate senders.</p>\n",
            "<p class=\"footer-copyright\">© {year} {brand}. All rights reserved.</p>\n",
            "</footer>"
        ),
        brand = html::escape(meta.brand_name()),
        location = html::escape(meta.location()),
        email = email,
        year = year,
    )
}

// ============================================================================
// Page Bodies
// ============================================================================

fn home(content: &SiteContent) -> String {
    let home = &content.home;
    let mut out = Vec::new();

    out.push("<section class=\"hero\">".to_string());
    out.push(format!("<h1>{}</h1>", html::escape(&home.hero_headline)));
    out.push(format!(
        "<p class=\"hero-subtitle\">{}</p>",
        html::escape(&home.hero_subheadline)
    ));
    if !home.primary_cta_label.is_empty() {
        out.push(format!(
            "<a class=\"cta-primary\" href=\"{}\">{}</a>",
            html::escape(&home.primary_cta_href),
            html::escape(&home.primary_cta_label)
        ));
    }
    out.push("</section>".to_string());

    out.push("<div class=\"home-sections\">".to_string());
    for section in &home.sections {
        out.push(content_section(section));
    }
    out.push("</div>".to_string());

    // The home page surfaces the FAQ list below its own sections.
    if !content.faq.items.is_empty() {
        out.push("<div class=\"home-faq-list\">".to_string());
        out.push(faq_items(content, "home-faq"));
        out.push("</div>".to_string());
    }

    out.join("\n")
}

fn services(content: &SiteContent) -> String {
    let services = &content.services;
    let mut out = Vec::new();
    out.push(format!(
        "<h1 class=\"page-headline\">{}</h1>",
        html::escape(&services.headline)
    ));
    out.push("<div class=\"services-sections\">".to_string());
    for section in &services.sections {
        out.push(content_section(section));
    }
    out.push("</div>".to_string());
    out.join("\n")
}

fn pricing(content: &SiteContent) -> String {
    let pricing = &content.pricing;
    let mut out = Vec::new();
    out.push(format!(
        "<h1 class=\"page-headline\">{}</h1>",
        html::escape(&pricing.headline)
    ));

    out.push("<div class=\"pricing-tiers\">".to_string());
    for tier in &pricing.tiers {
        let includes: String = tier
            .includes
            .iter()
            .map(|item| format!("<li>{}</li>", html::escape(item)))
            .collect();
        out.push(format!(
            concat!(
                "<div class=\"pricing-card\">\n",
                "<h3>{name}</h3>\n",
                "<div class=\"pricing-price\">{price}</div>\n",
                "<p class=\"pricing-who\">{who}</p>\n",
                "<ul class=\"pricing-features\">{includes}</ul>\n",
                "<div class=\"pricing-cta\">\n",
                "<a href=\"{href}\" class=\"btn btn-primary\">{label}</a>\n",
                "<p class=\"stripe-note\">Charged securely via Stripe. ",
                "Your card details never touch this site.</p>\n",
                "</div>\n",
                "</div>"
            ),
            name = html::escape(&tier.name),
            price = html::escape(&tier.price),
            who = html::escape(&tier.who_its_for),
            includes = includes,
            href = html::escape(&tier.cta_href),
            label = html::escape(&tier.cta_label),
        ));
    }
    out.push("</div>".to_string());

    if !pricing.fine_print.is_empty() {
        out.push(format!(
            "<div class=\"fine-print\">{}</div>",
            html::bullet_list(&pricing.fine_print)
        ));
    }
    out.join("\n")
}

fn faq(content: &SiteContent) -> String {
    let mut out = Vec::new();
    out.push(format!(
        "<h1 class=\"page-headline\">{}</h1>",
        html::escape(&content.faq.headline)
    ));
    out.push("<div class=\"faq-list\">".to_string());
    out.push(faq_items(content, "faq"));
    out.push("</div>".to_string());
    out.join("\n")
}

fn about(content: &SiteContent) -> String {
    let about = &content.about;
    format!(
        "<h1 class=\"page-headline\">{}</h1>\n<div class=\"about-content\">{}{}</div>",
        html::escape(&about.headline),
        html::paragraphs(&about.paragraphs),
        html::bullet_list(&about.bullets),
    )
}

fn contact(content: &SiteContent) -> String {
    let contact = &content.contact;
    let mut out = Vec::new();
    out.push(format!(
        "<h1 class=\"page-headline\">{}</h1>",
        html::escape(&contact.headline)
    ));
    out.push(format!(
        "<div class=\"contact-intro\">{}</div>",
        html::paragraphs(&contact.paragraphs)
    ));

    out.push("<div class=\"contact-info\">".to_string());
    for block in &contact.contact_blocks {
        // Optional fields the site owner never filled in arrive as a bare
        // unresolved token; show a marker instead of raw braces.
        let value_html = if crate::content::placeholder::is_unresolved_token(&block.value) {
            "<em>Not provided</em>".to_string()
        } else if block.label.eq_ignore_ascii_case("email") && block.value.contains('@') {
            let escaped = html::escape(&block.value);
            format!("<a href=\"mailto:{escaped}\">{escaped}</a>")
        } else {
            html::escape(&block.value)
        };
        out.push(format!(
            concat!(
                "<div class=\"contact-block\">",
                "<span class=\"contact-block-label\">{label}</span>",
                "<span class=\"contact-block-value\">{value}</span>",
                "</div>"
            ),
            label = html::escape(&block.label),
            value = value_html,
        ));
    }
    out.push("</div>".to_string());
    out.join("\n")
}

fn legal(headline: &str, sections: &[Section]) -> String {
    let mut out = Vec::new();
    out.push(format!("<h1 class=\"page-headline\">{}</h1>", html::escape(headline)));
    out.push("<div class=\"legal-content\">".to_string());
    for section in sections {
        out.push(format!(
            "<section><h2>{}</h2>{}</section>",
            html::escape(&section.title),
            html::paragraphs(&section.paragraphs)
        ));
    }
    out.push("</div>".to_string());
    out.join("\n")
}

fn confirmation(meta: &Meta, query: &ConfirmationQuery) -> String {
    let intake = html::escape(meta.intake_form_url());
    let email = html::escape(meta.contact_email());
    let mut out = Vec::new();

    out.push("<h1 class=\"page-headline\">Payment received</h1>".to_string());
    out.push(
        "<p>Thank you. Complete the intake form below and your 48-hour setup window begins.</p>"
            .to_string(),
    );
    out.push(format!(
        "<a id=\"intake-form-cta\" class=\"cta-primary\" href=\"{intake}\">Complete the intake form</a>"
    ));

    if let Some(reference) = query.sanitized_reference() {
        out.push(format!(
            "<p id=\"reference-info\">Reference: <span id=\"reference-text\">{}</span></p>",
            html::escape(&reference)
        ));
    }
    if let Some(client_email) = query.display_email() {
        out.push(format!(
            "<p id=\"client-email-notice\">We'll send updates to: {}</p>",
            html::escape(client_email)
        ));
    }

    out.push(format!(
        "<p>Questions? Email <a id=\"support-email-link\" href=\"mailto:{email}\">{email}</a>.</p>"
    ));
    out.push(format!(
        "<a id=\"intake-form-cta-bottom\" class=\"cta-secondary\" href=\"{intake}\">Open the intake form</a>"
    ));
    out.join("\n")
}

// ============================================================================
// Shared Fragments
// ============================================================================

fn content_section(section: &Section) -> String {
    format!(
        "<div class=\"content-section\"><h2>{}</h2>{}{}</div>",
        html::escape(&section.title),
        html::paragraphs(&section.paragraphs),
        html::bullet_list(&section.bullets),
    )
}

fn faq_items(content: &SiteContent, id_prefix: &str) -> String {
    content
        .faq
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            format!(
                concat!(
                    "<details class=\"faq-item\" id=\"{prefix}-{index}\">",
                    "<summary class=\"faq-question\"><span>{q}</span>",
                    "<span class=\"faq-icon\" aria-hidden=\"true\">+</span></summary>",
                    "<div class=\"faq-answer\"><p>{a}</p></div>",
                    "</details>"
                ),
                prefix = id_prefix,
                index = index,
                q = html::escape(&item.q),
                a = html::escape(&item.a),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Tests
// ============================================================================
