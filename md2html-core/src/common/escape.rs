//! HTML escaping and tag stripping.
//!
//! Text content only needs `&`, `<` and `>` escaped. Attribute values produced by
//! the document wrapper also get `"` escaped.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").unwrap());

/// Escape `&`, `<` and `>` for use as HTML text.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Escape text for use inside a double-quoted attribute value.
pub fn escape_attribute(text: &str) -> String {
    escape_html(text).replace('"', "&quot;")
}

/// Remove anything that looks like a tag, keeping the text between tags.
///
/// Used to derive a plain-text title from rendered heading markup. Entities are
/// left as they are.
pub fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}
