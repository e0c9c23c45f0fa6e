//! Markup parser: scanner tokens → document AST.
//!
//! A single forward pass over the token stream drives a small block/inline
//! state machine. At most one block is open at a time (the editor model has
//! no block nesting), plus a stack of open inline marks inside it.
//!
//! Degradation rules:
//! - inline content outside any block opens an implicit paragraph
//! - unknown block-level tags (div, blockquote, ...) demote to paragraphs,
//!   keeping their inline content and any text-align style
//! - unknown inline tags (span included) are transparent: the tags vanish,
//!   their content stays
//! - a closing tag with no matching open mark is ignored
//! - known entities decode at this stage; unknown ones stay literal

use crate::formats::markup::scanner::{decode_entity, decode_text, Scanner, Tag, TokenKind};
use crate::ir::nodes::{Alignment, Block, Document, Inline};

/// Tags treated as block-level even though the editor never emits them.
/// Anything else unknown is treated as transparent inline markup.
const GENERIC_BLOCK_TAGS: &[&str] = &[
    "div",
    "blockquote",
    "section",
    "article",
    "header",
    "footer",
    "main",
    "aside",
    "pre",
    "table",
    "tr",
    "td",
    "th",
];

/// Parse editor markup into a document. Never fails.
pub fn parse_from_markup(source: &str) -> Document {
    let mut builder = Builder::new();
    for token in Scanner::new(source) {
        match token.kind {
            TokenKind::Text => builder.push_text(token.raw),
            TokenKind::Entity(name) => match decode_entity(&name) {
                Some(c) => {
                    let mut buf = [0u8; 4];
                    builder.push_text(c.encode_utf8(&mut buf));
                }
                None => builder.push_text(token.raw),
            },
            TokenKind::Tag(tag) => builder.handle_tag(&tag),
        }
    }
    builder.finish()
}

/// Extract the `text-align` value from a style attribute.
fn parse_text_align(style: &str) -> Alignment {
    let style = style.to_ascii_lowercase();
    for declaration in style.split(';') {
        let mut parts = declaration.splitn(2, ':');
        if parts.next().map(str::trim) == Some("text-align") {
            if let Some(value) = parts.next() {
                return Alignment::from_css(value.trim());
            }
        }
    }
    Alignment::Left
}

fn tag_alignment(tag: &Tag) -> Alignment {
    tag.attr("style").map(parse_text_align).unwrap_or_default()
}

/// Kinds of open inline marks.
enum Mark {
    Bold,
    Italic,
    Underline,
    Link(String),
}

impl Mark {
    fn matches(&self, other: &Mark) -> bool {
        matches!(
            (self, other),
            (Mark::Bold, Mark::Bold)
                | (Mark::Italic, Mark::Italic)
                | (Mark::Underline, Mark::Underline)
                | (Mark::Link(_), Mark::Link(_))
        )
    }

    fn wrap(self, content: Vec<Inline>) -> Inline {
        match self {
            Mark::Bold => Inline::Bold(content),
            Mark::Italic => Inline::Italic(content),
            Mark::Underline => Inline::Underline(content),
            Mark::Link(href) => Inline::Link { href, content },
        }
    }
}

enum OpenBlock {
    Heading { level: u8, align: Alignment },
    Paragraph { align: Alignment },
    List { ordered: bool, item_open: bool },
}

struct Builder {
    blocks: Vec<Block>,
    open: Option<OpenBlock>,
    /// Items collected for the currently open list.
    items: Vec<Vec<Inline>>,
    /// Inline run of the current block (or current list item).
    run: Vec<Inline>,
    /// Open inline marks, innermost last.
    marks: Vec<(Mark, Vec<Inline>)>,
}

impl Builder {
    fn new() -> Self {
        Builder {
            blocks: Vec::new(),
            open: None,
            items: Vec::new(),
            run: Vec::new(),
            marks: Vec::new(),
        }
    }

    fn handle_tag(&mut self, tag: &Tag) {
        match tag.name.as_str() {
            "strong" | "b" => self.mark_tag(tag, Mark::Bold),
            "em" | "i" => self.mark_tag(tag, Mark::Italic),
            "u" => self.mark_tag(tag, Mark::Underline),
            "a" => {
                let href = tag.attr("href").map(decode_text).unwrap_or_default();
                self.mark_tag(tag, Mark::Link(href));
            }
            "br" => {
                if !tag.closing {
                    self.push_inline(Inline::LineBreak);
                }
            }
            "img" => {
                if !tag.closing {
                    self.push_inline(Inline::Image {
                        src: tag.attr("src").map(decode_text).unwrap_or_default(),
                        alt: tag.attr("alt").map(decode_text).unwrap_or_default(),
                    });
                }
            }
            "p" => {
                self.flush_block();
                if !tag.closing {
                    self.open = Some(OpenBlock::Paragraph {
                        align: tag_alignment(tag),
                    });
                }
            }
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                self.flush_block();
                if !tag.closing {
                    let level = tag.name.as_bytes()[1] - b'0';
                    self.open = Some(OpenBlock::Heading {
                        level,
                        align: tag_alignment(tag),
                    });
                }
            }
            "ul" | "ol" => {
                self.flush_block();
                if !tag.closing {
                    self.open = Some(OpenBlock::List {
                        ordered: tag.name == "ol",
                        item_open: false,
                    });
                }
            }
            "li" => {
                // Stray li outside a list is transparent.
                if matches!(self.open, Some(OpenBlock::List { .. })) {
                    self.finish_item();
                    if !tag.closing {
                        if let Some(OpenBlock::List { item_open, .. }) = &mut self.open {
                            *item_open = true;
                        }
                    }
                }
            }
            name if GENERIC_BLOCK_TAGS.contains(&name) => {
                self.flush_block();
                if !tag.closing {
                    self.open = Some(OpenBlock::Paragraph {
                        align: tag_alignment(tag),
                    });
                }
            }
            // span and every other unknown inline tag: transparent.
            _ => {}
        }
    }

    fn mark_tag(&mut self, tag: &Tag, mark: Mark) {
        if tag.closing {
            self.close_mark(&mark);
        } else if !tag.self_closing {
            self.ensure_block();
            self.marks.push((mark, Vec::new()));
        }
    }

    /// Close the innermost matching mark, implicitly closing anything opened
    /// inside it. With no matching mark open, the closing tag is ignored.
    fn close_mark(&mut self, kind: &Mark) {
        let Some(index) = self.marks.iter().rposition(|(m, _)| m.matches(kind)) else {
            return;
        };
        while self.marks.len() > index {
            if let Some((mark, content)) = self.marks.pop() {
                let node = mark.wrap(content);
                match self.marks.last_mut() {
                    Some((_, parent)) => parent.push(node),
                    None => self.run.push(node),
                }
            }
        }
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        // Whitespace between blocks (or between list items) is formatting
        // noise, not content.
        if text.chars().all(char::is_whitespace) && !self.accepting_text() {
            return;
        }
        self.ensure_block();
        let run = match self.marks.last_mut() {
            Some((_, content)) => content,
            None => &mut self.run,
        };
        if let Some(Inline::Text(prev)) = run.last_mut() {
            prev.push_str(text);
        } else {
            run.push(Inline::Text(text.to_string()));
        }
    }

    fn push_inline(&mut self, node: Inline) {
        self.ensure_block();
        match self.marks.last_mut() {
            Some((_, content)) => content.push(node),
            None => self.run.push(node),
        }
    }

    /// Whether a whitespace-only text token is meaningful right now.
    fn accepting_text(&self) -> bool {
        match &self.open {
            None => false,
            Some(OpenBlock::List { item_open, .. }) => *item_open,
            Some(_) => true,
        }
    }

    /// Make sure some block is open to receive inline content.
    fn ensure_block(&mut self) {
        match &mut self.open {
            None => {
                self.open = Some(OpenBlock::Paragraph {
                    align: Alignment::Left,
                });
            }
            Some(OpenBlock::List { item_open, .. }) => {
                // Bare content inside ul/ol starts an implicit item.
                *item_open = true;
            }
            Some(_) => {}
        }
    }

    /// Close the current list item, if any content accumulated.
    fn finish_item(&mut self) {
        self.close_all_marks();
        let mut content = std::mem::take(&mut self.run);
        trim_run(&mut content);
        if !content.is_empty() {
            self.items.push(content);
        }
        if let Some(OpenBlock::List { item_open, .. }) = &mut self.open {
            *item_open = false;
        }
    }

    fn close_all_marks(&mut self) {
        while let Some((mark, content)) = self.marks.pop() {
            let node = mark.wrap(content);
            match self.marks.last_mut() {
                Some((_, parent)) => parent.push(node),
                None => self.run.push(node),
            }
        }
    }

    fn flush_block(&mut self) {
        let Some(open) = self.open.take() else {
            self.close_all_marks();
            self.run.clear();
            return;
        };
        match open {
            OpenBlock::Heading { level, align } => {
                self.close_all_marks();
                let mut content = std::mem::take(&mut self.run);
                trim_run(&mut content);
                if !content.is_empty() {
                    self.blocks.push(Block::Heading {
                        level,
                        align,
                        content,
                    });
                }
            }
            OpenBlock::Paragraph { align } => {
                self.close_all_marks();
                let mut content = std::mem::take(&mut self.run);
                trim_run(&mut content);
                if !content.is_empty() {
                    self.blocks.push(Block::Paragraph { align, content });
                }
            }
            OpenBlock::List { ordered, .. } => {
                self.close_all_marks();
                let mut content = std::mem::take(&mut self.run);
                trim_run(&mut content);
                if !content.is_empty() {
                    self.items.push(content);
                }
                let items = std::mem::take(&mut self.items);
                if !items.is_empty() {
                    self.blocks.push(Block::List { ordered, items });
                }
            }
        }
    }

    fn finish(mut self) -> Document {
        self.flush_block();
        Document {
            blocks: self.blocks,
        }
    }
}

/// Trim leading/trailing whitespace off the edges of an inline run, dropping
/// text nodes that end up empty. Interior whitespace is untouched.
fn trim_run(content: &mut Vec<Inline>) {
    if let Some(Inline::Text(text)) = content.first_mut() {
        let trimmed = text.trim_start();
        if trimmed.len() != text.len() {
            *text = trimmed.to_string();
        }
        if text.is_empty() {
            content.remove(0);
        }
    }
    if let Some(Inline::Text(text)) = content.last_mut() {
        let trimmed = text.trim_end();
        if trimmed.len() != text.len() {
            *text = trimmed.to_string();
        }
        if text.is_empty() {
            content.pop();
        }
    }
}
