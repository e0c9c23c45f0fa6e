use rte_babel::ir::nodes::{Alignment, Block};
use rte_babel::FormatRegistry;

use crate::common::{article_doc, text, ARTICLE_MARKDOWN};

#[test]
fn article_parses_into_the_expected_ast() {
    let registry = FormatRegistry::with_defaults();
    let doc = registry.parse(ARTICLE_MARKDOWN, "markdown").unwrap();
    assert_eq!(doc, article_doc());
}

#[test]
fn filename_detection_routes_to_the_markdown_format() {
    let registry = FormatRegistry::with_defaults();
    assert_eq!(
        registry.detect_format_from_filename("notes.markdown"),
        Some("markdown".to_string())
    );
}

#[test]
fn dialect_extensions_only_apply_at_their_positions() {
    let registry = FormatRegistry::with_defaults();
    // A marker away from the line start is literal text, as is a lone `==`.
    let doc = registry
        .parse("see {>} and == markers", "markdown")
        .unwrap();
    assert_eq!(
        doc.blocks,
        vec![Block::Paragraph {
            align: Alignment::Left,
            content: vec![text("see {>} and == markers")],
        }]
    );
}

#[test]
fn list_runs_split_on_marker_kind() {
    let registry = FormatRegistry::with_defaults();
    let doc = registry
        .parse("- a\n- b\n1. c\n2. d", "markdown")
        .unwrap();
    assert_eq!(
        doc.blocks,
        vec![
            Block::List {
                ordered: false,
                items: vec![vec![text("a")], vec![text("b")]],
            },
            Block::List {
                ordered: true,
                items: vec![vec![text("c")], vec![text("d")]],
            },
        ]
    );
}
