//! Inline span transformation
//!
//! Resolves character-level markup inside one block's text. The text has already
//! been joined into a single line by the block parser.
//!
//! The transformation is an ordered list of independent regex passes over the
//! whole string:
//!
//! | Step | Markdown                  | HTML                                   |
//! |------|---------------------------|----------------------------------------|
//! | 1    | `\*` `\#` `` \` `` `\[` `\]` | the literal character               |
//! | 2    | ``` ``code`` ``` / `` `code` `` | `<code>` with escaped content    |
//! | 3    | `***text***`              | `<em><strong>text</strong></em>`       |
//! | 4    | `**text**`                | `<strong>text</strong>`                |
//! | 5    | `*text*`                  | `<em>text</em>`                        |
//! | 6    | `[text](url "title")`     | `<a href="url">text</a>`               |
//!
//! Every rule matches a non-empty run of characters that does not contain its own
//! delimiter, leftmost first. Nested or unbalanced emphasis beyond the three forms
//! above comes out however the left-to-right passes leave it: `**a*b**c*` renders
//! as `*<em>a</em>b*<em>c</em>`.
//!
//! Escaped characters and code spans are moved into a [`Stash`] as soon as they are
//! recognised and replaced by placeholder slots, so no later pass can read them as
//! markup. The slots are swapped back once all passes ran.
//!
//! Only code span content is HTML-escaped here. Surrounding text is emitted as is.

use crate::common::escape::escape_html;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const SLOT_OPEN: char = '\u{E000}';
const SLOT_CLOSE: char = '\u{E001}';

static SLOT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\x{E000}(\d+)\x{E001}").unwrap());
static ESCAPED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\([*#`\[\]])").unwrap());
static DOUBLE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"``([^`]+)``").unwrap());
static SINGLE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Emphasis and link passes, in application order.
static SPAN_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (
            Regex::new(r"\*\*\*([^*]+)\*\*\*").unwrap(),
            "<em><strong>${1}</strong></em>",
        ),
        (
            Regex::new(r"\*\*([^*]+)\*\*").unwrap(),
            "<strong>${1}</strong>",
        ),
        (Regex::new(r"\*([^*]+)\*").unwrap(), "<em>${1}</em>"),
        (
            Regex::new(r#"\[([^\]]+)\]\(([^)\s]+)(?:\s+"[^"]*")?\)"#).unwrap(),
            r#"<a href="${2}">${1}</a>"#,
        ),
    ]
});

/// Fragments that later passes must not touch, addressed by slot index.
#[derive(Debug, Default)]
struct Stash {
    items: Vec<String>,
}

impl Stash {
    /// Store `html` and return the slot that stands in for it.
    fn hold(&mut self, html: String) -> String {
        let index = self.items.len();
        self.items.push(html);
        format!("{SLOT_OPEN}{index}{SLOT_CLOSE}")
    }

    /// Replace every slot in `text` with the fragment it stands for.
    fn restore(&self, text: &str) -> String {
        SLOT.replace_all(text, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| self.items.get(index))
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
    }
}

/// Resolve inline markup in `text`.
pub fn transform(text: &str) -> String {
    let mut stash = Stash::default();

    // Slot delimiters already present in the input are stashed themselves, so
    // every slot left in the working text is one we created.
    let mut working = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == SLOT_OPEN {
            working.push_str(&stash.hold(ch.to_string()));
        } else {
            working.push(ch);
        }
    }

    working = ESCAPED
        .replace_all(&working, |caps: &Captures| stash.hold(caps[1].to_string()))
        .into_owned();

    for pattern in [&*DOUBLE_CODE, &*SINGLE_CODE] {
        working = pattern
            .replace_all(&working, |caps: &Captures| {
                let content = stash.restore(&caps[1]);
                stash.hold(format!("<code>{}</code>", escape_html(&content)))
            })
            .into_owned();
    }

    for (pattern, replacement) in SPAN_RULES.iter() {
        working = pattern.replace_all(&working, *replacement).into_owned();
    }

    stash.restore(&working)
}
