//! Brand placeholder resolution.
//!
//! The content document embeds `{{NAME}}`-delimited tokens in its copy so
//! one document serves any brand. This module owns the single authoritative
//! token table and the recursive resolver that rewrites every string leaf
//! of the document, at any nesting depth, exactly once per render snapshot.

use serde_json::Value;

// ============================================================================
// Token Table
// ============================================================================

/// One recognized placeholder token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The literal marker as it appears in content text, braces included.
    pub marker: &'static str,
    /// The `meta` field that supplies the replacement value.
    pub meta_key: &'static str,
    /// Replacement used when the `meta` field is absent or empty.
    pub default: &'static str,
}

/// Brand name token.
pub const BRAND_NAME: Token = Token {
    marker: "{{BRAND_NAME}}",
    meta_key: "brand_name",
    default: "Our Company",
};

/// Primary domain token.
pub const DOMAIN: Token = Token {
    marker: "{{DOMAIN}}",
    meta_key: "domain",
    default: "",
};

/// Contact email token.
pub const CONTACT_EMAIL: Token = Token {
    marker: "{{CONTACT_EMAIL}}",
    meta_key: "contact_email",
    default: "contact@example.com",
};

/// Location token.
pub const LOCATION: Token = Token {
    marker: "{{LOCATION}}",
    meta_key: "location",
    default: "Boston, MA",
};

/// Stripe payment link token.
pub const STRIPE_PAYMENT_LINK_URL: Token = Token {
    marker: "{{STRIPE_PAYMENT_LINK_URL}}",
    meta_key: "stripe_payment_link_url",
    default: "#",
};

/// Intake form link token.
pub const INTAKE_FORM_URL: Token = Token {
    marker: "{{INTAKE_FORM_URL}}",
    meta_key: "intake_form_url",
    default: "#",
};

/// The six recognized tokens. Order is irrelevant; replacement of one token
/// never produces another token's marker. The `Meta` accessors read their
/// fallback values from these same consts, so each default is stated once.
pub const TOKENS: [Token; 6] = [
    BRAND_NAME,
    DOMAIN,
    CONTACT_EMAIL,
    LOCATION,
    STRIPE_PAYMENT_LINK_URL,
    INTAKE_FORM_URL,
];

// ============================================================================
// Resolver
// ============================================================================

/// Replacement values for the six tokens, extracted from a `meta` record.
///
/// Holding owned strings here lets the resolver borrow the raw document's
/// `meta` subtree and then rewrite that same subtree in place.
#[derive(Debug, Clone)]
pub struct Replacements {
    values: [String; TOKENS.len()],
}

impl Replacements {
    /// Builds the replacement set from a raw `meta` JSON object.
    ///
    /// A field that is missing, non-string, or an empty string falls back
    /// to the token's documented default.
    #[must_use]
    pub fn from_meta(meta: &Value) -> Self {
        let values = TOKENS.map(|token| {
            meta.get(token.meta_key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .unwrap_or(token.default)
                .to_string()
        });
        Self { values }
    }

    /// Replaces all occurrences of every token in `text`.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (token, value) in TOKENS.iter().zip(&self.values) {
            if out.contains(token.marker) {
                out = out.replace(token.marker, value);
            }
        }
        out
    }
}

/// Resolves placeholders in an entire content document.
///
/// The document's own `meta` record supplies the replacements; the `meta`
/// subtree itself is rewritten along with everything else. Every string
/// leaf is processed — object values and array elements alike — while
/// numbers, booleans, and null pass through untouched. Unrecognized
/// `{{...}}` patterns are left verbatim; they are not an error.
#[must_use]
pub fn resolve_document(mut document: Value) -> Value {
    let replacements = document
        .get("meta")
        .map_or_else(|| Replacements::from_meta(&Value::Null), Replacements::from_meta);
    resolve_value(&mut document, &replacements);
    document
}

/// Recursively rewrites every string leaf under `value`.
pub fn resolve_value(value: &mut Value, replacements: &Replacements) {
    match value {
        Value::String(s) => {
            let resolved = replacements.apply(s);
            if resolved != *s {
                *s = resolved;
            }
        }
        Value::Array(items) => {
            for item in items {
                resolve_value(item, replacements);
            }
        }
        Value::Object(map) => {
            for item in map.values_mut() {
                resolve_value(item, replacements);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

/// True if `text` is exactly one unresolved placeholder, braces and all.
///
/// The contact page uses this to show "Not provided" for optional fields
/// the site owner never filled in, instead of leaking raw braces.
#[must_use]
pub fn is_unresolved_token(text: &str) -> bool {
    text.starts_with("{{") && text.ends_with("}}") && text.len() > 4
}

/// Collects every `{{...}}` marker remaining anywhere in a resolved document.
///
/// Used by `check` to warn about tokens the resolver does not recognize.
#[must_use]
pub fn unresolved_tokens(value: &Value) -> Vec<String> {
    let mut found = Vec::new();
    collect_tokens(value, &mut found);
    found.sort();
    found.dedup();
    found
}

fn collect_tokens(value: &Value, found: &mut Vec<String>) {
    match value {
        Value::String(s) => {
            let mut rest = s.as_str();
            while let Some(start) = rest.find("{{") {
                let Some(len) = rest[start + 2..].find("}}") else {
                    break;
                };
                found.push(rest[start..start + 2 + len + 2].to_string());
                rest = &rest[start + 2 + len + 2..];
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_tokens(item, found);
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                collect_tokens(item, found);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_meta_uses_defaults() {
        let replacements = Replacements::from_meta(&json!({}));
        assert_eq!(
            replacements.apply("Contact {{BRAND_NAME}} at {{CONTACT_EMAIL}}"),
            "Contact Our Company at contact@example.com"
        );
    }

    #[test]
    fn empty_string_meta_value_falls_back_to_default() {
        let replacements = Replacements::from_meta(&json!({"brand_name": ""}));
        assert_eq!(replacements.apply("{{BRAND_NAME}}"), "Our Company");
    }

    #[test]
    fn replacement_is_global_within_a_string() {
        let replacements = Replacements::from_meta(&json!({"brand_name": "Acme"}));
        assert_eq!(
            replacements.apply("{{BRAND_NAME}} and {{BRAND_NAME}} again"),
            "Acme and Acme again"
        );
    }

    #[test]
    fn domain_default_is_empty() {
        let replacements = Replacements::from_meta(&json!({}));
        assert_eq!(replacements.apply("at {{DOMAIN}}."), "at .");
    }

    #[test]
    fn payment_and_intake_links_default_to_hash() {
        let replacements = Replacements::from_meta(&json!({}));
        assert_eq!(replacements.apply("{{STRIPE_PAYMENT_LINK_URL}}"), "#");
        assert_eq!(replacements.apply("{{INTAKE_FORM_URL}}"), "#");
    }

    #[test]
    fn location_default() {
        let replacements = Replacements::from_meta(&json!({}));
        assert_eq!(replacements.apply("{{LOCATION}}"), "Boston, MA");
    }

    #[test]
    fn unknown_tokens_left_verbatim() {
        let replacements = Replacements::from_meta(&json!({}));
        assert_eq!(replacements.apply("{{PHONE}}"), "{{PHONE}}");
    }

    #[test]
    fn traversal_reaches_nested_strings() {
        let doc = json!({
            "meta": {"brand_name": "Acme"},
            "home": {
                "hero_headline": "Welcome to {{BRAND_NAME}}",
                "sections": [
                    {"title": "Why {{BRAND_NAME}}", "bullets": ["{{BRAND_NAME}} delivers"]}
                ]
            }
        });
        let resolved = resolve_document(doc);
        assert_eq!(resolved["home"]["hero_headline"], "Welcome to Acme");
        assert_eq!(resolved["home"]["sections"][0]["title"], "Why Acme");
        assert_eq!(resolved["home"]["sections"][0]["bullets"][0], "Acme delivers");
    }

    #[test]
    fn meta_subtree_is_resolved_too() {
        let doc = json!({
            "meta": {
                "brand_name": "Acme",
                "seo_description": "{{BRAND_NAME}} does email."
            }
        });
        let resolved = resolve_document(doc);
        assert_eq!(resolved["meta"]["seo_description"], "Acme does email.");
    }

    #[test]
    fn non_string_leaves_pass_through() {
        let doc = json!({
            "meta": {},
            "pricing": {"amount": 199, "active": true, "note": null}
        });
        let resolved = resolve_document(doc);
        assert_eq!(resolved["pricing"]["amount"], 199);
        assert_eq!(resolved["pricing"]["active"], true);
        assert_eq!(resolved["pricing"]["note"], Value::Null);
    }

    #[test]
    fn document_without_meta_still_resolves_with_defaults() {
        let doc = json!({"home": {"hero_headline": "Hi from {{BRAND_NAME}}"}});
        let resolved = resolve_document(doc);
        assert_eq!(resolved["home"]["hero_headline"], "Hi from Our Company");
    }

    #[test]
    fn resolving_twice_is_idempotent_without_token_syntax_in_meta() {
        let doc = json!({
            "meta": {"brand_name": "Acme"},
            "about": {"paragraphs": ["{{BRAND_NAME}} is small."]}
        });
        let once = resolve_document(doc);
        let twice = resolve_document(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn is_unresolved_token_matches_full_wrapper_only() {
        assert!(is_unresolved_token("{{PHONE}}"));
        assert!(!is_unresolved_token("call {{PHONE}}"));
        assert!(!is_unresolved_token("{{}}"));
        assert!(!is_unresolved_token("plain text"));
    }

    #[test]
    fn unresolved_tokens_collects_leftovers() {
        let doc = json!({
            "meta": {},
            "contact": {"contact_blocks": [{"label": "Phone", "value": "{{PHONE}}"}]},
            "about": {"paragraphs": ["see {{TWITTER}} and {{PHONE}}"]}
        });
        let resolved = resolve_document(doc);
        let leftovers = unresolved_tokens(&resolved);
        assert_eq!(leftovers, vec!["{{PHONE}}".to_string(), "{{TWITTER}}".to_string()]);
    }

    #[test]
    fn unresolved_tokens_empty_after_full_resolution() {
        let doc = json!({
            "meta": {"brand_name": "Acme"},
            "home": {"hero_headline": "{{BRAND_NAME}} at {{LOCATION}}"}
        });
        let resolved = resolve_document(doc);
        assert!(unresolved_tokens(&resolved).is_empty());
    }
}
