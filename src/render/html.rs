//! Minimal HTML escaping and fragment helpers.

/// Escapes text for use in HTML element content or attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders a `<ul>` bullet list, or nothing for an empty item slice.
#[must_use]
pub fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let body: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect();
    format!("<ul>{body}</ul>")
}

/// Renders a sequence of `<p>` paragraphs.
#[must_use]
pub fn paragraphs(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<p>{}</p>", escape(item)))
        .collect()
}
