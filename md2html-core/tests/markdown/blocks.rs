//! Block-level conversion tests

use crate::common::{body, parse};

#[test]
fn plain_text_becomes_single_paragraph() {
    let doc = parse("Nothing special here\nand a second line\nand a third");
    assert_eq!(
        doc.blocks,
        vec!["<p>Nothing special here and a second line and a third</p>"]
    );
    assert_eq!(doc.title, None);
}

#[test]
fn existing_entities_are_kept_once() {
    assert_eq!(body("Tom &amp; Jerry"), "<p>Tom &amp; Jerry</p>");
}

#[test]
fn first_line_heading_is_the_title() {
    let doc = parse("# Title\n\nBody text.\n");
    assert_eq!(doc.blocks, vec!["<h1>Title</h1>", "<p>Body text.</p>"]);
    assert_eq!(doc.title.as_deref(), Some("Title"));
}

#[test]
fn lower_level_headings_never_set_title() {
    let doc = parse("## Sub\n### Subsub\n");
    assert_eq!(doc.title, None);
}

#[test]
fn unordered_then_ordered_lists() {
    assert_eq!(body("- a\n- b"), "<ul><li>a</li><li>b</li></ul>");
    assert_eq!(
        body("- a\n- b\n1. c"),
        "<ul><li>a</li><li>b</li></ul><ol><li>c</li></ol>"
    );
}

#[test]
fn ordered_then_unordered_lists() {
    assert_eq!(
        body("1. one\n2. two\n- dash"),
        "<ol><li>one</li><li>two</li></ol><ul><li>dash</li></ul>"
    );
}

#[test]
fn blank_line_between_items_does_not_split_list() {
    assert_eq!(body("- a\n\n- b"), "<ul><li>a</li><li>b</li></ul>");
}

#[test]
fn blank_line_then_other_kind_splits_list() {
    assert_eq!(
        body("- a\n\n1. b"),
        "<ul><li>a</li></ul><ol><li>b</li></ol>"
    );
}

#[test]
fn heading_between_items_splits_list() {
    assert_eq!(
        body("- a\n# H\n- b"),
        "<ul><li>a</li></ul><h1>H</h1><ul><li>b</li></ul>"
    );
}

#[test]
fn fence_after_blank_line_has_no_leading_blank() {
    let doc = parse("```\n\ncode\n```\n");
    assert_eq!(doc.blocks, vec!["<pre><code>", "code", "</code></pre>"]);
}

#[test]
fn fenced_code_is_escaped_verbatim() {
    let doc = parse("```html\n<a href=\"x\">&copy;</a>\n```\n");
    assert_eq!(
        doc.blocks,
        vec![
            "<pre><code>",
            "&lt;a href=\"x\"&gt;&amp;copy;&lt;/a&gt;",
            "</code></pre>",
        ]
    );
}

#[test]
fn fence_with_leading_whitespace_still_closes() {
    let doc = parse("```\nx\n   ```\nafter");
    assert_eq!(
        doc.blocks,
        vec!["<pre><code>", "x", "</code></pre>", "<p>after</p>"]
    );
}

#[test]
fn empty_code_block() {
    let doc = parse("```\n```");
    assert_eq!(doc.blocks, vec!["<pre><code>", "</code></pre>"]);
}

#[test]
fn markup_inside_code_block_is_not_parsed() {
    let doc = parse("```\n**not bold**\n[no](link)\n```");
    assert_eq!(doc.blocks[1], "**not bold**");
    assert_eq!(doc.blocks[2], "[no](link)");
}

#[test]
fn blank_only_input_is_empty() {
    let doc = parse("\n   \n\t\n");
    assert!(doc.is_empty());
    assert_eq!(doc.title, None);
}

#[test]
fn paragraph_text_gets_inline_markup() {
    assert_eq!(
        body("see *this* and\n[that](/that)"),
        "<p>see <em>this</em> and <a href=\"/that\">that</a></p>"
    );
}

#[test]
fn emphasis_spans_joined_lines() {
    assert_eq!(body("**bold\nacross**"), "<p><strong>bold across</strong></p>");
}
