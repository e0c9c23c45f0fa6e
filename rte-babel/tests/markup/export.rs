use rte_babel::formats::markup::serializer::serialize_to_markup;
use rte_babel::ir::nodes::{Alignment, Block, Document, Inline};
use rte_babel::FormatRegistry;

use crate::common::{article_doc, text, ARTICLE_MARKUP};

#[test]
fn article_serializes_back_to_editor_markup() {
    let registry = FormatRegistry::with_defaults();
    let out = registry.serialize(&article_doc(), "markup").unwrap();
    assert_eq!(out, ARTICLE_MARKUP);
}

#[test]
fn blocks_are_emitted_without_separators() {
    let doc = Document {
        blocks: vec![
            Block::Paragraph {
                align: Alignment::Left,
                content: vec![text("a")],
            },
            Block::Paragraph {
                align: Alignment::Left,
                content: vec![text("b")],
            },
        ],
    };
    assert_eq!(serialize_to_markup(&doc), "<p>a</p><p>b</p>");
}

#[test]
fn text_and_attribute_values_are_escaped() {
    let doc = Document {
        blocks: vec![Block::Paragraph {
            align: Alignment::Left,
            content: vec![
                text("1 < 2 & 3 > 2 "),
                Inline::Link {
                    href: "https://x?q=\"v\"&n=1".to_string(),
                    content: vec![text("go")],
                },
            ],
        }],
    };
    assert_eq!(
        serialize_to_markup(&doc),
        "<p>1 &lt; 2 &amp; 3 &gt; 2 \
         <a href=\"https://x?q=&quot;v&quot;&amp;n=1\">go</a></p>"
    );
}
