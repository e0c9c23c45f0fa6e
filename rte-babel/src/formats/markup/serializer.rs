//! Markup serializer: document AST → normalized editor markup.
//!
//! Output is canonical: `<strong>`/`<em>`/`<u>` only (never `<b>`/`<i>`),
//! alignment as a single `style="text-align: ..."` attribute, no whitespace
//! between blocks. Text nodes escape `& < >`, attribute values escape `&`
//! and `"`, so serializing a parsed document always re-parses to the same
//! document.

use crate::ir::nodes::{Block, Document, Inline};

/// Serialize a document to editor markup. Never fails.
pub fn serialize_to_markup(doc: &Document) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        match block {
            Block::Heading {
                level,
                align,
                content,
            } => {
                let tag = format!("h{level}");
                open_block_tag(&mut out, &tag, align.css_value());
                write_inlines(&mut out, content);
                out.push_str("</");
                out.push_str(&tag);
                out.push('>');
            }
            Block::Paragraph { align, content } => {
                open_block_tag(&mut out, "p", align.css_value());
                write_inlines(&mut out, content);
                out.push_str("</p>");
            }
            Block::List { ordered, items } => {
                let tag = if *ordered { "ol" } else { "ul" };
                out.push('<');
                out.push_str(tag);
                out.push('>');
                for item in items {
                    out.push_str("<li>");
                    write_inlines(&mut out, item);
                    out.push_str("</li>");
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
    out
}

fn open_block_tag(out: &mut String, name: &str, align: Option<&str>) {
    match align {
        Some(value) => {
            out.push('<');
            out.push_str(name);
            out.push_str(" style=\"text-align: ");
            out.push_str(value);
            out.push_str("\">");
        }
        None => {
            out.push('<');
            out.push_str(name);
            out.push('>');
        }
    }
}

fn write_inlines(out: &mut String, content: &[Inline]) {
    for node in content {
        match node {
            Inline::Text(text) => escape_text(out, text),
            Inline::Bold(inner) => wrap(out, "strong", inner),
            Inline::Italic(inner) => wrap(out, "em", inner),
            Inline::Underline(inner) => wrap(out, "u", inner),
            Inline::Link { href, content } => {
                out.push_str("<a href=\"");
                escape_attr(out, href);
                out.push_str("\">");
                write_inlines(out, content);
                out.push_str("</a>");
            }
            Inline::Image { src, alt } => {
                out.push_str("<img src=\"");
                escape_attr(out, src);
                out.push_str("\" alt=\"");
                escape_attr(out, alt);
                out.push_str("\" />");
            }
            Inline::LineBreak => out.push_str("<br>"),
        }
    }
}

fn wrap(out: &mut String, tag: &str, inner: &[Inline]) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    write_inlines(out, inner);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn escape_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
