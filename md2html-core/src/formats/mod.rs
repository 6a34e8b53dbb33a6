//! Format implementations
//!
//! `markdown` is the only input format. `html` and `html-fragment` render a
//! parsed [`Document`](crate::document::Document).

pub mod html;
pub mod markdown;

pub use html::{HtmlFormat, HtmlFragmentFormat, HtmlOptions};
pub use markdown::MarkdownFormat;
