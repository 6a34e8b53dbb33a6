//! Markdown subset to HTML conversion
//!
//!     This crate turns a fixed, documented subset of Markdown into HTML. It is a pure
//!     library: it powers the md2html cli but is shell agnostic, so no code here reads
//!     files, touches std streams or looks at environment variables.
//!
//! Architecture
//!
//!     Conversion runs in two layers that compose without sharing state:
//!
//!     - The block parser (./formats/markdown/parser.rs) walks the input once, line by
//!       line. It owns all cross-line state: the pending paragraph, the open list and
//!       the open fenced code block. Finished blocks are emitted as HTML fragments at
//!       once, and the first level-1 heading becomes the document title.
//!     - The inline transformer (./formats/markdown/inline.rs) is a pure function over
//!       one block's text. It resolves code spans, emphasis and links as an ordered
//!       list of regex passes.
//!
//!     The parse result is a [`Document`]: the fragments plus the optional title. Output
//!     formats (./formats/html) render a Document to text.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── document.rs             # Parse result handed to serializers
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── common
//!     │   └── escape.rs           # HTML escaping, tag stripping
//!     ├── formats
//!     │   ├── markdown            # Input: block parser + inline transformer
//!     │   └── html                # Output: full page or body fragments
//!     └── lib.rs
//!
//! Escaping
//!
//!     Escaping is deliberately narrow: `&`, `<` and `>` are escaped in code spans, in
//!     fenced code and in the document title, and nowhere else. Every other tag in the
//!     output is produced by the converter itself. A blanket escape pass over whole
//!     lines would mangle those tags, and would double-escape entities already in the
//!     source.
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── markdown                # Block and inline behavior through the public API
//!     └── html                    # Whole-document snapshots
//!
//!     Note that rust does not by default discover tests in subdirectories, so these are
//!     included through tests/lib.rs.

pub mod common;
pub mod document;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use document::Document;
pub use error::FormatError;
pub use format::Format;
pub use formats::html::HtmlOptions;
pub use registry::FormatRegistry;

use formats::markdown::BlockParser;

/// Parse markdown lines (without line terminators) into a [`Document`].
///
/// Never fails. Anything that is not recognised markup ends up as paragraph text.
pub fn parse_markdown<S: AsRef<str>>(lines: &[S]) -> Document {
    BlockParser::parse(lines)
}

/// Convert markdown source to a complete HTML page using the default options.
pub fn convert(source: &str) -> String {
    convert_with_options(source, &HtmlOptions::default())
}

/// Convert markdown source to a complete HTML page.
pub fn convert_with_options(source: &str, options: &HtmlOptions) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let doc = parse_markdown(&lines);
    formats::html::serialize_to_html(&doc, options)
}
