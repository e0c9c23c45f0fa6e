//! Markdown serializer: document AST → extended dialect.
//!
//! Blocks are separated by exactly one blank line, ordered lists renumber
//! from 1, and alignment serializes as the line-leading marker. Line breaks
//! become raw newlines only inside left-aligned paragraphs; in headings,
//! aligned paragraphs and list items a newline would re-parse as a new block,
//! so they soften to a space there, and so do newlines embedded in text
//! nodes. Output is trimmed as a whole.

use crate::ir::nodes::{Block, Document, Inline};

/// Knobs for Markdown output.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownRules {
    /// Bullet character for unordered list items.
    pub unordered_marker: char,
}

impl Default for MarkdownRules {
    fn default() -> Self {
        MarkdownRules {
            unordered_marker: '-',
        }
    }
}

/// Serialize a document with default rules. Never fails.
pub fn serialize_to_markdown(doc: &Document) -> String {
    serialize_to_markdown_with_rules(doc, &MarkdownRules::default())
}

/// Serialize a document with explicit rules.
pub fn serialize_to_markdown_with_rules(doc: &Document, rules: &MarkdownRules) -> String {
    let mut chunks = Vec::new();
    for block in &doc.blocks {
        let rendered = match block {
            Block::Heading {
                level,
                align,
                content,
            } => {
                let marker = align.markdown_marker().unwrap_or("");
                format!(
                    "{marker}{} {}",
                    "#".repeat(*level as usize),
                    single_line(content)
                )
            }
            Block::Paragraph { align, content } => match align.markdown_marker() {
                None => paragraph_body(content),
                Some(marker) => format!("{marker}{}", single_line(content)),
            },
            Block::List { ordered, items } => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    if *ordered {
                        format!("{}. {}", index + 1, single_line(item))
                    } else {
                        format!("{} {}", rules.unordered_marker, single_line(item))
                    }
                })
                .collect::<Vec<_>>()
                .join("\n"),
        };
        if !rendered.trim().is_empty() {
            chunks.push(rendered);
        }
    }
    chunks.join("\n\n").trim().to_string()
}

/// Render a left-aligned paragraph. Lines are trimmed and blank-line runs
/// collapsed so that re-parsing the output reads back the same structure.
fn paragraph_body(content: &[Inline]) -> String {
    let body = inlines_to_markdown(content, "\n");
    let mut lines = Vec::new();
    let mut pending_blanks = 0usize;
    for line in body.split('\n').map(str::trim) {
        if line.is_empty() {
            pending_blanks += 1;
            continue;
        }
        if !lines.is_empty() {
            // At most one blank line survives; more would not re-parse.
            lines.push(if pending_blanks > 0 { "\n\n" } else { "\n" });
        }
        pending_blanks = 0;
        lines.push(line);
        continue;
    }
    let mut out = String::new();
    for piece in lines {
        out.push_str(piece);
    }
    out
}

/// Render an inline run that must stay on one physical line. Line breaks
/// soften to spaces, and so do newlines embedded in text nodes; either would
/// re-parse as a block boundary. Whitespace runs around a softened newline
/// collapse with it, and the ends are trimmed to match what a re-parse of the
/// line reads back.
fn single_line(content: &[Inline]) -> String {
    let rendered = inlines_to_markdown(content, " ");
    let mut out = String::with_capacity(rendered.len());
    let mut run = String::new();
    let mut run_breaks = false;
    for ch in rendered.chars() {
        if ch.is_whitespace() {
            run_breaks |= ch == '\n' || ch == '\r';
            run.push(ch);
            continue;
        }
        if !run.is_empty() {
            if run_breaks {
                out.push(' ');
            } else {
                out.push_str(&run);
            }
            run.clear();
            run_breaks = false;
        }
        out.push(ch);
    }
    out.trim().to_string()
}

fn inlines_to_markdown(content: &[Inline], line_break: &str) -> String {
    let mut out = String::new();
    for node in content {
        match node {
            Inline::Text(text) => out.push_str(text),
            Inline::Bold(inner) => {
                out.push_str("**");
                out.push_str(&inlines_to_markdown(inner, line_break));
                out.push_str("**");
            }
            Inline::Italic(inner) => {
                out.push('*');
                out.push_str(&inlines_to_markdown(inner, line_break));
                out.push('*');
            }
            Inline::Underline(inner) => {
                out.push_str("==");
                out.push_str(&inlines_to_markdown(inner, line_break));
                out.push_str("==");
            }
            Inline::Link { href, content } => {
                out.push('[');
                out.push_str(&inlines_to_markdown(content, line_break));
                out.push_str("](");
                out.push_str(href);
                out.push(')');
            }
            Inline::Image { src, alt } => {
                out.push_str("![");
                out.push_str(alt);
                out.push_str("](");
                out.push_str(src);
                out.push(')');
            }
            Inline::LineBreak => out.push_str(line_break),
        }
    }
    out
}
