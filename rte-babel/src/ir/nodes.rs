//! Core data structures for the Intermediate Representation (IR).
//!
//! Parsers build these values fresh on every conversion; nothing here is
//! mutated in place once a document is assembled.

/// Block-level alignment. `Left` is the default and is never marked in either
/// wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
    Justify,
}

impl Alignment {
    /// The CSS `text-align` value, or `None` for the unmarked default.
    pub fn css_value(self) -> Option<&'static str> {
        match self {
            Alignment::Left => None,
            Alignment::Right => Some("right"),
            Alignment::Center => Some("center"),
            Alignment::Justify => Some("justify"),
        }
    }

    /// The Markdown line-leading marker, or `None` for the unmarked default.
    pub fn markdown_marker(self) -> Option<&'static str> {
        match self {
            Alignment::Left => None,
            Alignment::Right => Some("{>}"),
            Alignment::Center => Some("{^}"),
            Alignment::Justify => Some("{=}"),
        }
    }

    /// Maps a CSS `text-align` value. Unknown values fall back to `Left`.
    pub fn from_css(value: &str) -> Alignment {
        match value {
            "right" => Alignment::Right,
            "center" => Alignment::Center,
            "justify" => Alignment::Justify,
            _ => Alignment::Left,
        }
    }
}

/// Represents the root of a document: an ordered run of blocks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A block-level element.
///
/// Lists carry flat items only: each item is a single inline run, there is no
/// list nesting in the editor model.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading {
        level: u8,
        align: Alignment,
        content: Vec<Inline>,
    },
    Paragraph {
        align: Alignment,
        content: Vec<Inline>,
    },
    List {
        ordered: bool,
        items: Vec<Vec<Inline>>,
    },
}

/// Represents inline content, such as text, bold, italics, etc.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    Bold(Vec<Inline>),
    Italic(Vec<Inline>),
    Underline(Vec<Inline>),
    Link { href: String, content: Vec<Inline> },
    Image { src: String, alt: String },
    LineBreak,
}
