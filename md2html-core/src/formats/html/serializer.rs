//! HTML serialization (Document → HTML)
//!
//! Wraps the parsed body fragments in a minimal HTML5 document. Fragments are
//! written one per line, unchanged; they are already valid HTML.

use crate::common::escape::{escape_attribute, escape_html};
use crate::document::Document;

pub const DEFAULT_LANG: &str = "en";
pub const DEFAULT_FALLBACK_TITLE: &str = "Document";

/// Options for HTML serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Value of the `lang` attribute on `<html>`
    pub lang: String,
    /// Title used when the document has no level-1 heading
    pub fallback_title: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.to_string(),
            fallback_title: DEFAULT_FALLBACK_TITLE.to_string(),
        }
    }
}

impl HtmlOptions {
    pub fn new(lang: impl Into<String>, fallback_title: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            fallback_title: fallback_title.into(),
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_fallback_title(mut self, title: impl Into<String>) -> Self {
        self.fallback_title = title.into();
        self
    }
}

/// Every line of the complete document, without line terminators.
pub fn document_lines(doc: &Document, options: &HtmlOptions) -> Vec<String> {
    let title = doc.title.as_deref().unwrap_or(&options.fallback_title);

    let mut lines = Vec::with_capacity(doc.blocks.len() + 9);
    lines.push("<!DOCTYPE html>".to_string());
    lines.push(format!("<html lang=\"{}\">", escape_attribute(&options.lang)));
    lines.push("<head>".to_string());
    lines.push("  <meta charset=\"UTF-8\">".to_string());
    lines.push(format!("  <title>{}</title>", escape_html(title)));
    lines.push("</head>".to_string());
    lines.push("<body>".to_string());
    lines.extend(doc.blocks.iter().cloned());
    lines.push("</body>".to_string());
    lines.push("</html>".to_string());
    lines
}

/// Serialize a document to a complete HTML page, each line ending in `\n`.
pub fn serialize_to_html(doc: &Document, options: &HtmlOptions) -> String {
    let mut out = String::new();
    for line in document_lines(doc, options) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
