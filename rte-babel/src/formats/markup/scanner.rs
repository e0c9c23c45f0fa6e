//! Low-level markup scanner.
//!
//! Classifies spans of a markup string as tags, text, or entity references
//! without building a tree. The scanner is shared by the markup parser, the
//! highlight injector and plain-text extraction, so they all agree on what
//! counts as a tag.
//!
//! Scanning never fails. A `<` that does not open a well-formed tag is
//! emitted as a one-character text token and scanning resumes right after it.
//! Quoted attribute values may contain angle brackets; an unterminated quote
//! makes the whole tag malformed.

/// A classified span of markup source.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    /// The raw source slice this token covers.
    pub raw: &'a str,
    pub kind: TokenKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Tag(Tag),
    Text,
    /// Entity name without the surrounding `&` and `;` (`#` kept for numeric
    /// references).
    Entity(String),
}

/// A scanned tag. Names and attribute names are lowercased.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub closing: bool,
    pub self_closing: bool,
}

impl Tag {
    /// First value of the named attribute, raw (entities not decoded).
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Elements that never have a closing tag.
const VOID_TAGS: &[&str] = &["br", "img", "hr"];

/// Longest entity name the scanner will consider (`&frac12;` territory; the
/// converter only decodes five short names anyway).
const MAX_ENTITY_LEN: usize = 10;

/// Pull-based scanner over a markup string.
pub struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Scanner { src, pos: 0 }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.src[self.pos..];
        let first = rest.chars().next()?;

        if first == '<' {
            if let Some((tag, len)) = scan_tag(rest) {
                self.pos += len;
                return Some(Token {
                    raw: &rest[..len],
                    kind: TokenKind::Tag(tag),
                });
            }
            // Malformed tag: the '<' itself becomes literal text.
            self.pos += 1;
            return Some(Token {
                raw: &rest[..1],
                kind: TokenKind::Text,
            });
        }

        if first == '&' {
            if let Some((name, len)) = scan_entity(rest) {
                self.pos += len;
                return Some(Token {
                    raw: &rest[..len],
                    kind: TokenKind::Entity(name),
                });
            }
        }

        // Text run: everything up to the next tag or entity candidate.
        let start = first.len_utf8();
        let end = rest[start..]
            .find(['<', '&'])
            .map(|i| i + start)
            .unwrap_or(rest.len());
        self.pos += end;
        Some(Token {
            raw: &rest[..end],
            kind: TokenKind::Text,
        })
    }
}

/// Decode one of the five entities the converter understands.
pub fn decode_entity(name: &str) -> Option<char> {
    match name {
        "nbsp" => Some(' '),
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        _ => None,
    }
}

/// Decode known entities anywhere in a string (used for attribute values,
/// which arrive inside the tag token rather than as entity tokens).
///
/// Unknown entities are left untouched. Each reference is decoded exactly
/// once: `&amp;lt;` becomes `&lt;`, not `<`.
pub fn decode_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(idx) = rest.find('&') {
        out.push_str(&rest[..idx]);
        match scan_entity(&rest[idx..]) {
            Some((name, len)) => {
                match decode_entity(&name) {
                    Some(c) => out.push(c),
                    None => out.push_str(&rest[idx..idx + len]),
                }
                rest = &rest[idx + len..];
            }
            None => {
                out.push('&');
                rest = &rest[idx + 1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Attempt to scan a tag at the start of `src` (which begins with `<`).
/// Returns the tag and the byte length consumed, or None if malformed.
fn scan_tag(src: &str) -> Option<(Tag, usize)> {
    let bytes = src.as_bytes();
    let mut i = 1;
    let mut closing = false;

    if bytes.get(i) == Some(&b'/') {
        closing = true;
        i += 1;
    }

    let name_start = i;
    if !bytes.get(i)?.is_ascii_alphabetic() {
        return None;
    }
    while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
        i += 1;
    }
    let name = src[name_start..i].to_ascii_lowercase();

    let mut attrs = Vec::new();
    let mut self_closing = false;
    loop {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        match bytes.get(i) {
            None => return None,
            Some(b'>') => {
                i += 1;
                break;
            }
            Some(b'/') => {
                if bytes.get(i + 1) != Some(&b'>') {
                    return None;
                }
                self_closing = true;
                i += 2;
                break;
            }
            Some(_) => {
                let attr_start = i;
                while i < bytes.len() && is_attr_name_byte(bytes[i]) {
                    i += 1;
                }
                if i == attr_start {
                    return None;
                }
                let attr_name = src[attr_start..i].to_ascii_lowercase();

                while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                let value = if bytes.get(i) == Some(&b'=') {
                    i += 1;
                    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                        i += 1;
                    }
                    match bytes.get(i) {
                        Some(&quote) if quote == b'"' || quote == b'\'' => {
                            i += 1;
                            let value_start = i;
                            while i < bytes.len() && bytes[i] != quote {
                                i += 1;
                            }
                            if i == bytes.len() {
                                // Unterminated quote: malformed tag.
                                return None;
                            }
                            let value = src[value_start..i].to_string();
                            i += 1;
                            value
                        }
                        Some(_) => {
                            let value_start = i;
                            while i < bytes.len()
                                && !bytes[i].is_ascii_whitespace()
                                && bytes[i] != b'>'
                            {
                                i += 1;
                            }
                            src[value_start..i].to_string()
                        }
                        None => return None,
                    }
                } else {
                    String::new()
                };
                attrs.push((attr_name, value));
            }
        }
    }

    let self_closing = self_closing || VOID_TAGS.contains(&name.as_str());
    Some((
        Tag {
            name,
            attrs,
            closing,
            self_closing,
        },
        i,
    ))
}

fn is_attr_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' || byte == b':'
}

/// Attempt to scan an entity reference at the start of `src` (which begins
/// with `&`). Returns the name and the byte length consumed.
fn scan_entity(src: &str) -> Option<(String, usize)> {
    let bytes = src.as_bytes();
    let mut i = 1;
    if bytes.get(i) == Some(&b'#') {
        i += 1;
    }
    let body_start = i;
    while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
        i += 1;
    }
    if i == body_start || i - 1 > MAX_ENTITY_LEN {
        return None;
    }
    if bytes.get(i) != Some(&b';') {
        return None;
    }
    Some((src[1..i].to_string(), i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(src: &str) -> Vec<Token<'_>> {
        Scanner::new(src).collect()
    }

    #[test]
    fn scans_simple_tag_and_text() {
        let toks = tokens("<p>hi</p>");
        assert_eq!(toks.len(), 3);
        match &toks[0].kind {
            TokenKind::Tag(tag) => {
                assert_eq!(tag.name, "p");
                assert!(!tag.closing);
            }
            other => panic!("expected tag, got {other:?}"),
        }
        assert_eq!(toks[1].raw, "hi");
        match &toks[2].kind {
            TokenKind::Tag(tag) => assert!(tag.closing),
            other => panic!("expected closing tag, got {other:?}"),
        }
    }

    #[test]
    fn lowercases_names_and_reads_attributes() {
        let toks = tokens(r#"<A HREF="x" Data-Id=7>"#);
        match &toks[0].kind {
            TokenKind::Tag(tag) => {
                assert_eq!(tag.name, "a");
                assert_eq!(tag.attr("href"), Some("x"));
                assert_eq!(tag.attr("data-id"), Some("7"));
            }
            other => panic!("expected tag, got {other:?}"),
        }
    }

    #[test]
    fn quoted_values_protect_angle_brackets() {
        let toks = tokens(r#"<a href="a>b">x</a>"#);
        match &toks[0].kind {
            TokenKind::Tag(tag) => assert_eq!(tag.attr("href"), Some("a>b")),
            other => panic!("expected tag, got {other:?}"),
        }
        assert_eq!(toks[1].raw, "x");
    }

    #[test]
    fn malformed_tag_degrades_to_literal_text() {
        let toks = tokens("a < b");
        let raws: Vec<&str> = toks.iter().map(|t| t.raw).collect();
        assert_eq!(raws, vec!["a ", "<", " b"]);
        assert!(toks.iter().all(|t| matches!(t.kind, TokenKind::Text)));
    }

    #[test]
    fn unterminated_tag_degrades_to_literal_text() {
        let toks = tokens("<p unterminated");
        assert_eq!(toks[0].raw, "<");
        assert!(matches!(toks[0].kind, TokenKind::Text));
        assert_eq!(toks[1].raw, "p unterminated");
    }

    #[test]
    fn unterminated_quote_makes_tag_malformed() {
        let toks = tokens(r#"<a href="x>y"#);
        assert_eq!(toks[0].raw, "<");
        assert!(matches!(toks[0].kind, TokenKind::Text));
    }

    #[test]
    fn void_tags_are_self_closing() {
        for src in ["<br>", "<br/>", "<br />", "<img src=\"x\">"] {
            let toks = tokens(src);
            match &toks[0].kind {
                TokenKind::Tag(tag) => assert!(tag.self_closing, "{src}"),
                other => panic!("expected tag for {src}, got {other:?}"),
            }
        }
    }

    #[test]
    fn scans_entities() {
        let toks = tokens("A&nbsp;B&unknown;C&#8212;D");
        let kinds: Vec<_> = toks
            .iter()
            .map(|t| match &t.kind {
                TokenKind::Entity(name) => format!("entity:{name}"),
                TokenKind::Text => format!("text:{}", t.raw),
                TokenKind::Tag(_) => "tag".to_string(),
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                "text:A",
                "entity:nbsp",
                "text:B",
                "entity:unknown",
                "text:C",
                "entity:#8212",
                "text:D"
            ]
        );
    }

    #[test]
    fn bare_ampersand_is_text() {
        let toks = tokens("fish & chips");
        let raws: Vec<&str> = toks.iter().map(|t| t.raw).collect();
        assert_eq!(raws, vec!["fish ", "& chips"]);
        assert!(toks.iter().all(|t| matches!(t.kind, TokenKind::Text)));
    }

    #[test]
    fn decode_entity_knows_exactly_five_names() {
        assert_eq!(decode_entity("nbsp"), Some(' '));
        assert_eq!(decode_entity("amp"), Some('&'));
        assert_eq!(decode_entity("lt"), Some('<'));
        assert_eq!(decode_entity("gt"), Some('>'));
        assert_eq!(decode_entity("quot"), Some('"'));
        assert_eq!(decode_entity("copy"), None);
        assert_eq!(decode_entity("#8212"), None);
    }

    #[test]
    fn decode_text_decodes_each_reference_once() {
        assert_eq!(decode_text("a&amp;b"), "a&b");
        assert_eq!(decode_text("&amp;lt;"), "&lt;");
        assert_eq!(decode_text("&copy; 2024"), "&copy; 2024");
        assert_eq!(decode_text("no entities"), "no entities");
    }

    #[test]
    fn raw_slices_cover_the_whole_input() {
        let src = "<p style=\"x\">a&nbsp;<b>c</b></p>";
        let joined: String = tokens(src).iter().map(|t| t.raw).collect();
        assert_eq!(joined, src);
    }
}
