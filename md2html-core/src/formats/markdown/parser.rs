//! Block-level markdown parsing
//!
//! A single pass over the input lines. Each line is classified and either extends
//! the construct currently being accumulated (paragraph, list, fenced code) or
//! closes it and starts another. Finished constructs are emitted as HTML
//! fragments straight away; there is no intermediate tree.
//!
//! Classification, first match wins:
//!
//! 1. inside a fenced code block: a fence closes it, anything else is code
//! 2. a fence (trimmed line starting with three backticks) opens a code block
//! 3. list item: `-`, `*` or `+` then whitespace, or digits, `.` then whitespace
//! 4. blank line: ends the paragraph, ends the list unless the next non-blank
//!    line is another list item
//! 5. ATX heading: one to six `#` then whitespace
//! 6. anything else is paragraph text
//!
//! Only one construct is open at a time. Starting a construct of another kind
//! flushes whatever was open first, and every flush is a no-op when nothing is
//! pending. Parsing never fails: lines that fit no rule end up as paragraph text.

use crate::common::escape::{escape_html, strip_tags};
use crate::document::Document;
use crate::formats::markdown::inline;
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

const FENCE: &str = "```";

static UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[-*+]\s+(.*)$").unwrap());
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\.\s+(.*)$").unwrap());
static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").unwrap());

/// Kind of the list currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// What a line outside of a code block turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Fence,
    ListItem { kind: ListKind, text: &'a str },
    Blank,
    Heading { level: usize, text: &'a str },
    Text,
}

fn is_fence(line: &str) -> bool {
    line.trim().starts_with(FENCE)
}

fn list_item(line: &str) -> Option<(ListKind, &str)> {
    if let Some(caps) = UNORDERED_ITEM.captures(line) {
        return caps.get(1).map(|m| (ListKind::Unordered, m.as_str()));
    }
    ORDERED_ITEM
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| (ListKind::Ordered, m.as_str()))
}

/// Classify a line that is not inside a fenced code block.
pub fn classify(line: &str) -> LineKind<'_> {
    if is_fence(line) {
        return LineKind::Fence;
    }
    if let Some((kind, text)) = list_item(line) {
        return LineKind::ListItem { kind, text };
    }
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    if let Some(caps) = HEADING.captures(line) {
        if let (Some(hashes), Some(text)) = (caps.get(1), caps.get(2)) {
            return LineKind::Heading {
                level: hashes.as_str().len(),
                text: text.as_str(),
            };
        }
    }
    LineKind::Text
}

/// Mutable state of one parse.
///
/// Created per call to [`BlockParser::parse`], consumed by [`BlockParser::finish`].
#[derive(Debug, Default)]
pub struct BlockParser {
    blocks: Vec<String>,
    paragraph: Vec<String>,
    list: Option<ListKind>,
    code_block: Option<Vec<String>>,
    title: Option<String>,
    /// Lookahead verdict for the current run of blank lines: does the open list
    /// continue after it. Computed once per run.
    blank_run_keeps_list: Option<bool>,
}

impl BlockParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a sequence of lines (without trailing newlines) into a [`Document`].
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Document {
        let mut parser = Self::new();
        for (idx, line) in lines.iter().enumerate() {
            parser.process_line(line.as_ref(), &lines[idx + 1..]);
        }
        parser.finish()
    }

    /// Feed one line. `following` holds the lines after it, for the blank-line
    /// lookahead.
    pub fn process_line<S: AsRef<str>>(&mut self, line: &str, following: &[S]) {
        if let Some(code) = self.code_block.as_mut() {
            if is_fence(line) {
                self.flush_code_block();
            } else {
                code.push(line.to_string());
            }
            return;
        }

        let kind = classify(line);
        trace!("line {line:?} classified as {kind:?}");
        if kind != LineKind::Blank {
            self.blank_run_keeps_list = None;
        }

        match kind {
            LineKind::Fence => {
                self.flush_paragraph();
                self.flush_list();
                self.code_block = Some(Vec::new());
            }
            LineKind::ListItem { kind, text } => self.push_list_item(kind, text),
            LineKind::Blank => {
                self.flush_paragraph();
                if self.list.is_some() {
                    let keep = *self
                        .blank_run_keeps_list
                        .get_or_insert_with(|| next_content_is_list_item(following));
                    if !keep {
                        self.flush_list();
                    }
                }
            }
            LineKind::Heading { level, text } => self.push_heading(level, text),
            LineKind::Text => {
                // Lazy continuation of list items is not supported.
                self.flush_list();
                self.paragraph.push(line.to_string());
            }
        }
    }

    fn push_list_item(&mut self, kind: ListKind, text: &str) {
        self.flush_paragraph();
        if self.list != Some(kind) {
            self.flush_list();
            debug!("opening <{}>", kind.tag());
            self.blocks.push(format!("<{}>", kind.tag()));
            self.list = Some(kind);
        }
        self.blocks.push(format!("<li>{}</li>", inline::transform(text)));
    }

    fn push_heading(&mut self, level: usize, text: &str) {
        self.flush_paragraph();
        self.flush_list();

        let text = text.trim_end().trim_end_matches('#').trim_end();
        let content = inline::transform(text);

        if level == 1 && self.title.is_none() {
            let plain = strip_tags(&content);
            if !plain.is_empty() {
                debug!("document title set to {plain:?}");
                self.title = Some(plain);
            }
        }

        self.blocks.push(format!("<h{level}>{content}</h{level}>"));
    }

    /// Emit the pending paragraph, if any.
    pub fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let joined = self.paragraph.join(" ");
        self.blocks.push(format!("<p>{}</p>", inline::transform(&joined)));
        self.paragraph.clear();
    }

    /// Close the open list, if any.
    pub fn flush_list(&mut self) {
        if let Some(kind) = self.list.take() {
            debug!("closing <{}>", kind.tag());
            self.blocks.push(format!("</{}>", kind.tag()));
        }
    }

    /// Emit the open code block, if any.
    ///
    /// Blank lines directly after the opening fence are dropped.
    pub fn flush_code_block(&mut self) {
        let Some(lines) = self.code_block.take() else {
            return;
        };
        let start = lines
            .iter()
            .position(|line| !line.trim().is_empty())
            .unwrap_or(lines.len());
        debug!("emitting code block with {} lines", lines.len() - start);

        self.blocks.push("<pre><code>".to_string());
        self.blocks.extend(
            lines[start..]
                .iter()
                .map(|line| escape_html(line).into_owned()),
        );
        self.blocks.push("</code></pre>".to_string());
    }

    /// Close every open construct and hand back the result.
    pub fn finish(mut self) -> Document {
        self.flush_paragraph();
        self.flush_list();
        self.flush_code_block();
        Document::new(self.blocks, self.title)
    }
}

fn next_content_is_list_item<S: AsRef<str>>(following: &[S]) -> bool {
    following
        .iter()
        .map(AsRef::as_ref)
        .find(|line| !line.trim().is_empty())
        .is_some_and(|line| list_item(line).is_some())
}
