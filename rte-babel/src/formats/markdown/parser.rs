//! Markdown parser: extended dialect → document AST.
//!
//! Line-oriented: blank lines delimit paragraphs, runs of item lines form
//! lists, `#` lines form headings, and a line-leading `{>}` / `{^}` / `{=}`
//! marker aligns the single heading or paragraph line it prefixes. Inside a
//! line, inline patterns apply as a priority cascade: each pattern splits the
//! text and only later patterns run inside the matched content, which is what
//! gives `**` precedence over `*` and images precedence over links.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ir::nodes::{Alignment, Block, Document, Inline};

static ALIGNED_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{([>^=])\}(.+)$").expect("alignment regex"));
static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("heading regex"));
static UNORDERED_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[-*+]\s+(.+)$").expect("unordered item regex"));
static ORDERED_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+\.\s+(.+)$").expect("ordered item regex"));

static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("image regex"));
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link regex"));
static BOLD_STAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold regex"));
static BOLD_UNDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__(.+?)__").expect("bold regex"));
static ITALIC_STAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*(.+?)\*").expect("italic regex"));
static ITALIC_UNDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_(.+?)_").expect("italic regex"));
static UNDERLINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"==(.+?)==").expect("underline regex"));

/// Parse the extended Markdown dialect into a document. Never fails:
/// unmatched syntax stays literal text.
pub fn parse_from_markdown(source: &str) -> Document {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<String> = Vec::new();
    let mut list: Option<(bool, Vec<Vec<Inline>>)> = None;

    for line in source.lines() {
        if line.trim().is_empty() {
            flush_paragraph(&mut blocks, &mut paragraph);
            flush_list(&mut blocks, &mut list);
            continue;
        }

        // Alignment markers bind tighter than anything else on the line.
        if let Some(caps) = ALIGNED_LINE_RE.captures(line) {
            flush_paragraph(&mut blocks, &mut paragraph);
            flush_list(&mut blocks, &mut list);
            let align = match &caps[1] {
                ">" => Alignment::Right,
                "^" => Alignment::Center,
                _ => Alignment::Justify,
            };
            let rest = &caps[2];
            match HEADING_RE.captures(rest) {
                Some(heading) => blocks.push(Block::Heading {
                    level: heading[1].len() as u8,
                    align,
                    content: parse_inlines(heading[2].trim()),
                }),
                None => blocks.push(Block::Paragraph {
                    align,
                    content: parse_inlines(rest.trim()),
                }),
            }
            continue;
        }

        if let Some(caps) = HEADING_RE.captures(line) {
            flush_paragraph(&mut blocks, &mut paragraph);
            flush_list(&mut blocks, &mut list);
            blocks.push(Block::Heading {
                level: caps[1].len() as u8,
                align: Alignment::Left,
                content: parse_inlines(caps[2].trim()),
            });
            continue;
        }

        if let Some(caps) = UNORDERED_ITEM_RE.captures(line) {
            flush_paragraph(&mut blocks, &mut paragraph);
            push_item(&mut blocks, &mut list, false, parse_inlines(caps[1].trim()));
            continue;
        }

        if let Some(caps) = ORDERED_ITEM_RE.captures(line) {
            flush_paragraph(&mut blocks, &mut paragraph);
            push_item(&mut blocks, &mut list, true, parse_inlines(caps[1].trim()));
            continue;
        }

        // Plain paragraph line.
        flush_list(&mut blocks, &mut list);
        paragraph.push(line.to_string());
    }

    flush_paragraph(&mut blocks, &mut paragraph);
    flush_list(&mut blocks, &mut list);
    Document { blocks }
}

/// Append an item, continuing the current list when the marker kind matches
/// and starting a fresh one when it switches.
fn push_item(
    blocks: &mut Vec<Block>,
    list: &mut Option<(bool, Vec<Vec<Inline>>)>,
    ordered: bool,
    content: Vec<Inline>,
) {
    match list {
        Some((kind, items)) if *kind == ordered => items.push(content),
        _ => {
            flush_list(blocks, list);
            *list = Some((ordered, vec![content]));
        }
    }
}

fn flush_list(blocks: &mut Vec<Block>, list: &mut Option<(bool, Vec<Vec<Inline>>)>) {
    if let Some((ordered, items)) = list.take() {
        if !items.is_empty() {
            blocks.push(Block::List { ordered, items });
        }
    }
}

/// Consecutive plain lines become one paragraph; the newlines between them
/// survive as LineBreak nodes.
fn flush_paragraph(blocks: &mut Vec<Block>, paragraph: &mut Vec<String>) {
    if paragraph.is_empty() {
        return;
    }
    let lines = std::mem::take(paragraph);
    let mut content = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            content.push(Inline::LineBreak);
        }
        content.extend(parse_inlines(line.trim()));
    }
    if !content.is_empty() {
        blocks.push(Block::Paragraph {
            align: Alignment::Left,
            content,
        });
    }
}

/// Inline pattern cascade, in precedence order.
const PATTERN_COUNT: usize = 7;

fn pattern(index: usize) -> &'static Regex {
    match index {
        0 => &IMAGE_RE,
        1 => &LINK_RE,
        2 => &BOLD_STAR_RE,
        3 => &BOLD_UNDER_RE,
        4 => &ITALIC_STAR_RE,
        5 => &ITALIC_UNDER_RE,
        _ => &UNDERLINE_RE,
    }
}

/// Parse one line of inline content.
pub fn parse_inlines(text: &str) -> Vec<Inline> {
    let mut out = Vec::new();
    apply_patterns(text, 0, &mut out);
    out
}

fn apply_patterns(text: &str, index: usize, out: &mut Vec<Inline>) {
    if text.is_empty() {
        return;
    }
    if index >= PATTERN_COUNT {
        out.push(Inline::Text(text.to_string()));
        return;
    }

    let mut last = 0;
    for caps in pattern(index).captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        apply_patterns(&text[last..whole.start()], index + 1, out);
        out.push(build_node(index, &caps));
        last = whole.end();
    }
    apply_patterns(&text[last..], index + 1, out);
}

fn build_node(index: usize, caps: &regex::Captures<'_>) -> Inline {
    match index {
        0 => Inline::Image {
            alt: caps[1].to_string(),
            src: caps[2].to_string(),
        },
        1 => Inline::Link {
            href: caps[2].to_string(),
            content: sub_inlines(&caps[1], 2),
        },
        2 => Inline::Bold(sub_inlines(&caps[1], 3)),
        3 => Inline::Bold(sub_inlines(&caps[1], 4)),
        4 => Inline::Italic(sub_inlines(&caps[1], 5)),
        5 => Inline::Italic(sub_inlines(&caps[1], 6)),
        _ => Inline::Underline(sub_inlines(&caps[1], 7)),
    }
}

fn sub_inlines(text: &str, index: usize) -> Vec<Inline> {
    let mut out = Vec::new();
    apply_patterns(text, index, &mut out);
    out
}
