use rte_babel::ir::nodes::{Alignment, Block};
use rte_babel::FormatRegistry;

use crate::common::{article_doc, text, ARTICLE_MARKUP};

#[test]
fn article_parses_into_the_expected_ast() {
    let registry = FormatRegistry::with_defaults();
    let doc = registry.parse(ARTICLE_MARKUP, "markup").unwrap();
    assert_eq!(doc, article_doc());
}

#[test]
fn filename_detection_routes_to_the_markup_format() {
    let registry = FormatRegistry::with_defaults();
    let name = registry.detect_format_from_filename("draft.html").unwrap();
    let doc = registry.parse("<p>hi</p>", &name).unwrap();
    assert_eq!(doc.blocks.len(), 1);
}

#[test]
fn stray_list_items_fall_back_to_a_paragraph() {
    let registry = FormatRegistry::with_defaults();
    let doc = registry.parse("<li>loose</li>", "markup").unwrap();
    assert_eq!(
        doc.blocks,
        vec![Block::Paragraph {
            align: Alignment::Left,
            content: vec![text("loose")],
        }]
    );
}

#[test]
fn wrapper_blocks_collapse_around_their_paragraphs() {
    let registry = FormatRegistry::with_defaults();
    let doc = registry
        .parse("<div><p>a</p><p>b</p></div>", "markup")
        .unwrap();
    assert_eq!(doc.blocks.len(), 2);
}

#[test]
fn editor_noise_survives_parsing() {
    // Pasted content tends to carry spans, entities and stray closers.
    let registry = FormatRegistry::with_defaults();
    let doc = registry
        .parse(
            "<p><span data-x=\"1\">A&nbsp;&amp;&nbsp;B</span></em></p>",
            "markup",
        )
        .unwrap();
    assert_eq!(
        doc.blocks,
        vec![Block::Paragraph {
            align: Alignment::Left,
            content: vec![text("A & B")],
        }]
    );
}
