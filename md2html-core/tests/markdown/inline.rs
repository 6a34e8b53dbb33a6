//! Inline span tests

use md2html_core::formats::markdown::inline::transform;

#[test]
fn bold_italic_and_both() {
    assert_eq!(
        transform("**bold** and *italic* and ***both***"),
        "<strong>bold</strong> and <em>italic</em> and <em><strong>both</strong></em>"
    );
}

#[test]
fn script_in_code_span_is_inert() {
    assert_eq!(transform("`<script>`"), "<code>&lt;script&gt;</code>");
}

#[test]
fn link_title_is_dropped() {
    assert_eq!(
        transform(r#"[text](http://example.com "a title")"#),
        r#"<a href="http://example.com">text</a>"#
    );
}

#[test]
fn several_spans_on_one_line() {
    assert_eq!(
        transform("`a` then `b` then ``c``"),
        "<code>a</code> then <code>b</code> then <code>c</code>"
    );
}

#[test]
fn double_backticks_take_precedence() {
    assert_eq!(transform("``x``"), "<code>x</code>");
}

#[test]
fn escapes_take_precedence_over_markup() {
    assert_eq!(transform(r"\*\*kept\*\*"), "**kept**");
    assert_eq!(transform(r"\[a\](b)"), "[a](b)");
}

#[test]
fn multiple_links() {
    assert_eq!(
        transform("[a](/a) and [b](/b)"),
        r#"<a href="/a">a</a> and <a href="/b">b</a>"#
    );
}

#[test]
fn empty_markers_are_literal() {
    assert_eq!(transform("** and `` and []()"), "** and `` and []()");
}

#[test]
fn raw_html_is_passed_through() {
    assert_eq!(transform("<b>raw</b>"), "<b>raw</b>");
}
