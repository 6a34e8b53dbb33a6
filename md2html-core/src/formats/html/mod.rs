//! HTML format implementation
//!
//! Output-only formats that render a parsed [`Document`]:
//!
//! - `html`: a complete HTML5 page. The `<title>` comes from the first level-1
//!   heading, or the configured fallback. Options: `lang`, `fallback-title`.
//! - `html-fragment`: just the body fragments, for embedding in another page.
//!
//! Both write one fragment per line and end every line with `\n`.

mod serializer;

pub use serializer::{
    document_lines, serialize_to_html, HtmlOptions, DEFAULT_FALLBACK_TITLE, DEFAULT_LANG,
};

use crate::document::Document;
use crate::error::FormatError;
use crate::format::Format;
use std::collections::HashMap;

/// Format implementation for complete HTML documents
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Complete HTML5 document"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_to_html(doc, &self.options))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut resolved = self.options.clone();
        for (key, value) in options {
            match key.as_str() {
                "lang" => resolved.lang = value.clone(),
                "fallback-title" => resolved.fallback_title = value.clone(),
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Unknown option '{other}' for format 'html'"
                    )))
                }
            }
        }
        Ok(serialize_to_html(doc, &resolved))
    }
}

/// Format implementation for bare body fragments
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFragmentFormat;

impl Format for HtmlFragmentFormat {
    fn name(&self) -> &str {
        "html-fragment"
    }

    fn description(&self) -> &str {
        "HTML body fragments without the document wrapper"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(doc.body())
    }
}
