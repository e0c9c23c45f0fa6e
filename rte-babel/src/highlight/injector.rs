//! The span injector behind both highlight entry points.
//!
//! One pass over the scanner token stream. Tag and entity tokens are copied
//! through untouched; text tokens outside any `<span>` are matched against
//! the target words, longest first, earliest position wins, no overlaps.
//! Matched slices keep their original casing inside the injected span.

use crate::formats::markup::scanner::{Scanner, TokenKind};

use super::{ColorSpec, HighlightRules, WordColor};

struct Target {
    word: String,
    open_tag: String,
}

pub(super) fn inject_single(markup: &str, words: &[&str], class: &str) -> String {
    let open_tag = format!("<span class=\"{class}\">");
    let targets: Vec<Target> = words
        .iter()
        .map(|word| word.trim())
        .filter(|word| !word.is_empty())
        .map(|word| Target {
            word: word.to_string(),
            open_tag: open_tag.clone(),
        })
        .collect();
    inject(markup, targets)
}

pub(super) fn inject_multi(markup: &str, entries: &[WordColor], rules: &HighlightRules) -> String {
    let targets: Vec<Target> = entries
        .iter()
        .filter(|entry| !entry.word.trim().is_empty())
        .map(|entry| Target {
            word: entry.word.trim().to_string(),
            open_tag: span_open_tag(&entry.color, rules),
        })
        .collect();
    inject(markup, targets)
}

fn span_open_tag(color: &ColorSpec, rules: &HighlightRules) -> String {
    if let Some(hex) = &color.hex {
        let text = color.text.as_deref().unwrap_or(&rules.default_text_color);
        format!(
            "<span style=\"background-color: {hex}; color: {text};\" class=\"{}\">",
            rules.utility_classes
        )
    } else if let Some(class) = &color.class {
        let text = color.text.as_deref().unwrap_or("");
        format!("<span class=\"{class} {text} {}\">", rules.utility_classes)
    } else {
        format!(
            "<span class=\"{} {}\">",
            rules.fallback_classes, rules.utility_classes
        )
    }
}

fn inject(markup: &str, mut targets: Vec<Target>) -> String {
    if targets.is_empty() || markup.is_empty() {
        return markup.to_string();
    }
    // Longest first so "category" beats "cat"; the sort is stable, so equal
    // lengths keep caller order.
    targets.sort_by(|a, b| b.word.len().cmp(&a.word.len()));

    let mut out = String::with_capacity(markup.len());
    let mut span_depth = 0usize;
    for token in Scanner::new(markup) {
        match &token.kind {
            TokenKind::Tag(tag) if tag.name == "span" => {
                if tag.closing {
                    span_depth = span_depth.saturating_sub(1);
                } else if !tag.self_closing {
                    span_depth += 1;
                }
                out.push_str(token.raw);
            }
            TokenKind::Text if span_depth == 0 => wrap_matches(token.raw, &targets, &mut out),
            _ => out.push_str(token.raw),
        }
    }
    out
}

fn wrap_matches(text: &str, targets: &[Target], out: &mut String) {
    let mut i = 0;
    let mut prev: Option<char> = None;
    while i < text.len() {
        let rest = &text[i..];
        let Some(c) = rest.chars().next() else { break };
        let boundary_before = prev.map_or(true, |p| !is_word_char(p));
        let mut matched = false;
        if boundary_before {
            for target in targets {
                let len = target.word.len();
                let Some(candidate) = rest.get(..len) else {
                    continue;
                };
                if !candidate.eq_ignore_ascii_case(&target.word) {
                    continue;
                }
                if rest[len..].chars().next().is_some_and(is_word_char) {
                    continue;
                }
                out.push_str(&target.open_tag);
                out.push_str(candidate);
                out.push_str("</span>");
                i += len;
                prev = candidate.chars().last();
                matched = true;
                break;
            }
        }
        if !matched {
            out.push(c);
            i += c.len_utf8();
            prev = Some(c);
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
