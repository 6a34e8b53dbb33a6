//! Property tests: the parser is total and always emits balanced structure.

use md2html_core::formats::markdown::inline::transform;
use md2html_core::parse_markdown;
use proptest::prelude::*;

/// Lines mixing every construct the parser knows, plus arbitrary text.
fn markdown_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("```".to_string()),
        "[-*+] [a-z*`]{0,10}",
        "[0-9]{1,3}\\. [a-z]{0,10}",
        "#{1,7} [a-z#]{0,10}",
        "\\PC{0,30}",
    ]
}

proptest! {
    #[test]
    fn plain_lines_make_one_paragraph(lines in prop::collection::vec("[a-z][a-z ]{0,20}", 1..8)) {
        let doc = parse_markdown(&lines);
        prop_assert_eq!(doc.blocks, vec![format!("<p>{}</p>", lines.join(" "))]);
        prop_assert_eq!(doc.title, None);
    }

    #[test]
    fn containers_are_balanced_and_never_nested(lines in prop::collection::vec(markdown_line(), 0..40)) {
        let doc = parse_markdown(&lines);
        let mut open: Option<&str> = None;
        for block in &doc.blocks {
            match block.as_str() {
                "<ul>" | "<ol>" | "<pre><code>" => {
                    prop_assert!(open.is_none(), "{} opened inside {:?}", block, open);
                    open = Some(block.as_str());
                }
                "</ul>" => prop_assert_eq!(open.take(), Some("<ul>")),
                "</ol>" => prop_assert_eq!(open.take(), Some("<ol>")),
                "</code></pre>" => prop_assert_eq!(open.take(), Some("<pre><code>")),
                _ => {}
            }
        }
        prop_assert!(open.is_none());
    }

    #[test]
    fn list_items_only_inside_lists(lines in prop::collection::vec(markdown_line(), 0..40)) {
        let doc = parse_markdown(&lines);
        let mut in_list = false;
        for block in &doc.blocks {
            match block.as_str() {
                "<ul>" | "<ol>" => in_list = true,
                "</ul>" | "</ol>" => in_list = false,
                other if other.starts_with("<li>") => prop_assert!(in_list),
                _ => {}
            }
        }
    }

    #[test]
    fn transform_is_total(text in "\\PC{0,60}") {
        let _ = transform(&text);
    }

    #[test]
    fn text_without_markup_is_unchanged(text in "[a-zA-Z0-9 .,;:!?&<>()]{0,60}") {
        prop_assert_eq!(transform(&text), text);
    }
}
