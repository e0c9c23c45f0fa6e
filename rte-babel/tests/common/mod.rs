//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use rte_babel::ir::nodes::{Alignment, Block, Document, Inline};

/// A small article touching every construct the editor emits.
pub const ARTICLE_MARKUP: &str = concat!(
    "<h1 style=\"text-align: center\">Release Notes</h1>",
    "<p>Intro with <strong>bold</strong>, <em>italic</em> and <u>underline</u>.</p>",
    "<ul><li>first</li><li>second</li></ul>",
    "<ol><li>one</li><li>two</li></ol>",
    "<p style=\"text-align: right\">signed</p>",
    "<p>see <a href=\"https://example.com\">docs</a><br>",
    "then <img src=\"shot.png\" alt=\"screen\" /></p>",
);

/// The same article in the Markdown dialect.
pub const ARTICLE_MARKDOWN: &str = "{^}# Release Notes\n\n\
    Intro with **bold**, *italic* and ==underline==.\n\n\
    - first\n\
    - second\n\n\
    1. one\n\
    2. two\n\n\
    {>}signed\n\n\
    see [docs](https://example.com)\n\
    then ![screen](shot.png)";

pub fn text(s: &str) -> Inline {
    Inline::Text(s.to_string())
}

/// The AST both importers should produce for the article.
pub fn article_doc() -> Document {
    Document {
        blocks: vec![
            Block::Heading {
                level: 1,
                align: Alignment::Center,
                content: vec![text("Release Notes")],
            },
            Block::Paragraph {
                align: Alignment::Left,
                content: vec![
                    text("Intro with "),
                    Inline::Bold(vec![text("bold")]),
                    text(", "),
                    Inline::Italic(vec![text("italic")]),
                    text(" and "),
                    Inline::Underline(vec![text("underline")]),
                    text("."),
                ],
            },
            Block::List {
                ordered: false,
                items: vec![vec![text("first")], vec![text("second")]],
            },
            Block::List {
                ordered: true,
                items: vec![vec![text("one")], vec![text("two")]],
            },
            Block::Paragraph {
                align: Alignment::Right,
                content: vec![text("signed")],
            },
            Block::Paragraph {
                align: Alignment::Left,
                content: vec![
                    text("see "),
                    Inline::Link {
                        href: "https://example.com".to_string(),
                        content: vec![text("docs")],
                    },
                    Inline::LineBreak,
                    text("then "),
                    Inline::Image {
                        src: "shot.png".to_string(),
                        alt: "screen".to_string(),
                    },
                ],
            },
        ],
    }
}
