//! Markdown format implementation
//!
//! Parses a fixed subset of Markdown straight into HTML fragments. Markdown is
//! an input-only format here: there is no serializer back to Markdown.
//!
//! # Supported Subset
//!
//! | Markdown                         | HTML                                   | Notes                                   |
//! |----------------------------------|----------------------------------------|-----------------------------------------|
//! | `#` .. `######` heading          | `<h1>` .. `<h6>`                       | Closing `#` run is stripped             |
//! | Paragraph                        | `<p>`                                  | Lines joined with a single space        |
//! | `-` / `*` / `+` item             | `<ul><li>`                             | Flat only, blank lines between items ok |
//! | `1.` item                        | `<ol><li>`                             | Numbers are not preserved               |
//! | ```` ``` ```` fence              | `<pre><code>`                          | Info string ignored, content escaped    |
//! | `**bold**` `*italic*` `***both***` | `<strong>` `<em>`                    | No `_` emphasis                         |
//! | `` `code` `` / ``` ``code`` ```  | `<code>`                               | Content escaped, not re-processed       |
//! | `[text](url "title")`            | `<a href="url">`                       | Title dropped                           |
//! | `\*` `\#` `` \` `` `\[` `\]`     | literal character                      |                                         |
//!
//! Not supported: nested lists, blockquotes, tables, raw HTML, footnotes,
//! reference-style links, setext headings, indented code blocks.
//!
//! # Escaping
//!
//! `&`, `<` and `>` are escaped inside code spans and fenced code only. Paragraph,
//! heading and list item text is passed through, so entities already present in
//! the source (`&amp;`) are kept exactly once.

pub mod inline;
pub mod parser;

use crate::document::Document;
use crate::error::FormatError;
use crate::format::Format;

pub use parser::{BlockParser, ListKind};

/// Format implementation for Markdown input
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown subset (headings, paragraphs, flat lists, fenced code, inline spans)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        let lines: Vec<&str> = source.lines().collect();
        Ok(BlockParser::parse(&lines))
    }
}
