//! Export tests for the HTML formats

use crate::common::{parse, read_fixture};
use insta::assert_snapshot;
use md2html_core::format::Format;
use md2html_core::formats::html::{HtmlFormat, HtmlFragmentFormat, HtmlOptions};
use md2html_core::{convert, convert_with_options, FormatRegistry};

#[test]
fn kitchensink_matches_expected_document() {
    let source = read_fixture("kitchensink.md");
    let expected = read_fixture("kitchensink.html");
    assert_eq!(convert(&source), expected);
}

#[test]
fn registry_pipeline_matches_convert() {
    let source = read_fixture("kitchensink.md");
    let registry = FormatRegistry::default();
    let doc = registry.parse(&source, "markdown").unwrap();
    assert_eq!(registry.serialize(&doc, "html").unwrap(), convert(&source));
}

#[test]
fn empty_input_document() {
    assert_snapshot!(convert(""), @r###"
    <!DOCTYPE html>
    <html lang="en">
    <head>
      <meta charset="UTF-8">
      <title>Document</title>
    </head>
    <body>
    </body>
    </html>
    "###);
}

#[test]
fn small_document() {
    let source = "# Hello & Welcome\n\nSome `<b>` text.\n\n- one\n- two\n";
    assert_snapshot!(convert(source), @r###"
    <!DOCTYPE html>
    <html lang="en">
    <head>
      <meta charset="UTF-8">
      <title>Hello &amp; Welcome</title>
    </head>
    <body>
    <h1>Hello & Welcome</h1>
    <p>Some <code>&lt;b&gt;</code> text.</p>
    <ul>
    <li>one</li>
    <li>two</li>
    </ul>
    </body>
    </html>
    "###);
}

#[test]
fn configured_lang_and_fallback_title() {
    let options = HtmlOptions::new("fr", "Sans titre");
    assert_snapshot!(convert_with_options("## Pas de titre\n", &options), @r###"
    <!DOCTYPE html>
    <html lang="fr">
    <head>
      <meta charset="UTF-8">
      <title>Sans titre</title>
    </head>
    <body>
    <h2>Pas de titre</h2>
    </body>
    </html>
    "###);
}

#[test]
fn title_from_code_span_is_escaped_again() {
    let html = convert("# a `<b>`\n");
    assert!(html.contains("  <title>a &amp;lt;b&amp;gt;</title>\n"));
    assert!(html.contains("<h1>a <code>&lt;b&gt;</code></h1>\n"));
}

#[test]
fn fragment_has_no_wrapper() {
    let doc = parse("# T\n\n```\na < b\n```\n");
    let out = HtmlFragmentFormat.serialize(&doc).unwrap();
    assert_eq!(out, "<h1>T</h1>\n<pre><code>\na &lt; b\n</code></pre>\n");
    assert!(!out.contains("<html"));
}

#[test]
fn html_format_matches_convert_with_defaults() {
    let doc = parse("plain");
    assert_eq!(
        HtmlFormat::default().serialize(&doc).unwrap(),
        convert("plain")
    );
}
