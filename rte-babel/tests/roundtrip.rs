//! Generative stability checks over the conversion pipeline.
//!
//! The document strategy only builds content the editor itself could emit
//! (lowercase words, separated inline nodes); for such documents both views
//! must be stable under repeated conversion. Arbitrary junk input gets the
//! weaker guarantee: no panic, deterministic output.

use proptest::prelude::*;
use rte_babel::formats::markdown::serializer::serialize_to_markdown;
use rte_babel::formats::markup::serializer::serialize_to_markup;
use rte_babel::ir::nodes::{Alignment, Block, Document, Inline};
use rte_babel::{highlight_single, markdown_to_markup, markup_to_markdown, plain_text};

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn phrase() -> impl Strategy<Value = String> {
    "[a-z]{1,8}( [a-z]{1,8}){0,3}"
}

fn inline_node() -> impl Strategy<Value = Inline> {
    prop_oneof![
        phrase().prop_map(Inline::Text),
        phrase().prop_map(|s| Inline::Bold(vec![Inline::Text(s)])),
        phrase().prop_map(|s| Inline::Italic(vec![Inline::Text(s)])),
        phrase().prop_map(|s| Inline::Underline(vec![Inline::Text(s)])),
        (word(), phrase()).prop_map(|(host, label)| Inline::Link {
            href: format!("https://{host}.example"),
            content: vec![Inline::Text(label)],
        }),
        (word(), word()).prop_map(|(name, alt)| Inline::Image {
            src: format!("{name}.png"),
            alt,
        }),
    ]
}

/// Inline nodes separated by plain spaces, the way the editor writes them.
fn inline_run() -> impl Strategy<Value = Vec<Inline>> {
    prop::collection::vec(inline_node(), 1..4).prop_map(|nodes| {
        let mut run = Vec::new();
        for (index, node) in nodes.into_iter().enumerate() {
            if index > 0 {
                run.push(Inline::Text(" ".to_string()));
            }
            run.push(node);
        }
        run
    })
}

fn alignment() -> impl Strategy<Value = Alignment> {
    prop_oneof![
        Just(Alignment::Left),
        Just(Alignment::Right),
        Just(Alignment::Center),
        Just(Alignment::Justify),
    ]
}

fn block() -> impl Strategy<Value = Block> {
    prop_oneof![
        (1u8..=6, alignment(), inline_run()).prop_map(|(level, align, content)| {
            Block::Heading {
                level,
                align,
                content,
            }
        }),
        (alignment(), inline_run()).prop_map(|(align, content)| Block::Paragraph {
            align,
            content
        }),
        // Multi-line paragraphs (line breaks) only exist left-aligned.
        prop::collection::vec(inline_run(), 2..4).prop_map(|lines| {
            let mut content = Vec::new();
            for (index, line) in lines.into_iter().enumerate() {
                if index > 0 {
                    content.push(Inline::LineBreak);
                }
                content.extend(line);
            }
            Block::Paragraph {
                align: Alignment::Left,
                content,
            }
        }),
        (any::<bool>(), prop::collection::vec(inline_run(), 1..4)).prop_map(
            |(ordered, items)| Block::List { ordered, items }
        ),
    ]
}

fn document() -> impl Strategy<Value = Document> {
    prop::collection::vec(block(), 0..5).prop_map(|blocks| Document { blocks })
}

/// Text the editor would never emit but pretty-printed markup can: words
/// separated by raw newlines inside a single text node.
fn newline_phrase() -> impl Strategy<Value = String> {
    "[a-z]{1,6}(\n[a-z]{1,6}){1,2}"
}

proptest! {
    #[test]
    fn both_views_are_stable_for_editor_documents(doc in document()) {
        let markup = serialize_to_markup(&doc);
        let markdown = markup_to_markdown(&markup);
        prop_assert_eq!(&markdown_to_markup(&markdown), &markup);
        prop_assert_eq!(markup_to_markdown(&markup), markdown);
    }

    #[test]
    fn newline_bearing_text_still_reaches_a_markdown_fixed_point(
        level in 1u8..=6,
        align in alignment(),
        ordered in any::<bool>(),
        body in newline_phrase(),
    ) {
        let doc = Document {
            blocks: vec![
                Block::Heading {
                    level,
                    align,
                    content: vec![Inline::Text(body.clone())],
                },
                Block::Paragraph {
                    align,
                    content: vec![Inline::Text(body.clone())],
                },
                Block::List {
                    ordered,
                    items: vec![vec![Inline::Text(body)]],
                },
            ],
        };
        let md = serialize_to_markdown(&doc);
        prop_assert_eq!(markup_to_markdown(&markdown_to_markup(&md)), md);
    }

    #[test]
    fn junk_markup_converts_without_panicking(src in "\\PC{0,120}") {
        let first = markup_to_markdown(&src);
        prop_assert_eq!(markup_to_markdown(&src), first);
        let _ = plain_text(&src);
    }

    #[test]
    fn junk_markdown_converts_without_panicking(src in "\\PC{0,120}") {
        let first = markdown_to_markup(&src);
        prop_assert_eq!(markdown_to_markup(&src), first);
    }

    #[test]
    fn highlighting_editor_documents_is_idempotent(
        doc in document(),
        needle in "[a-z]{2,6}",
    ) {
        let markup = serialize_to_markup(&doc);
        let once = highlight_single(&markup, &[&needle], "hl");
        let twice = highlight_single(&once, &[&needle], "hl");
        prop_assert_eq!(twice, once);
    }
}
