//! Plain-text helpers over markup: extraction and word-at-offset lookup.

use crate::formats::markup::scanner::{decode_entity, Scanner, TokenKind};

/// Extract the visible text of a markup string.
///
/// Tags are dropped, known entities decode (`&nbsp;` to a regular space),
/// unknown entities stay literal. Never fails; malformed markup degrades the
/// same way the parser degrades it.
pub fn plain_text(markup: &str) -> String {
    let mut out = String::new();
    for token in Scanner::new(markup) {
        match token.kind {
            TokenKind::Text => out.push_str(token.raw),
            TokenKind::Entity(name) => match decode_entity(&name) {
                Some(c) => out.push(c),
                None => out.push_str(token.raw),
            },
            TokenKind::Tag(_) => {}
        }
    }
    out
}

/// The word around a character offset in plain text.
///
/// Collects the run of `[A-Za-z0-9'_-]` characters touching `offset` (offset
/// counts characters, not bytes), trims leading/trailing apostrophes and
/// hyphens, and lowercases. Returns `None` for out-of-range offsets and for
/// results of one character or less.
pub fn word_at_offset(text: &str, offset: usize) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    if offset > chars.len() {
        return None;
    }

    let mut start = offset;
    while start > 0 && is_token_char(chars[start - 1]) {
        start -= 1;
    }
    let mut end = offset;
    while end < chars.len() && is_token_char(chars[end]) {
        end += 1;
    }

    let token: String = chars[start..end].iter().collect();
    let word = token
        .trim_matches(|c| c == '\'' || c == '-')
        .to_lowercase();
    if word.chars().count() > 1 {
        Some(word)
    } else {
        None
    }
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '\'' || c == '-'
}
