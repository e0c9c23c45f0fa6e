//! Extended Markdown format implementation
//!
//! This module implements bidirectional conversion between the document AST
//! and the editor's Markdown dialect.
//!
//! # Library Choice
//!
//! The line and inline grammar is a set of `regex` patterns behind
//! `once_cell::sync::Lazy` statics, tried in declaration order. A CommonMark
//! library is deliberately not used: the dialect diverges from CommonMark
//! (see below) and the grammar is small enough that owning it outright is
//! simpler than teaching a conformant parser to unlearn CommonMark rules.
//!
//! # Element Mapping Table
//!
//! | AST Element    | Markdown                 | Notes                                |
//! |----------------|--------------------------|--------------------------------------|
//! | Heading        | `# ` .. `###### `        | Space after hashes required          |
//! | Paragraph      | blank-line separated     | Inner newlines become LineBreak      |
//! | List           | `- item` / `1. item`     | `*`/`+` accepted; ordered renumbers  |
//! | Bold           | `**text**`               | `__text__` accepted                  |
//! | Italic         | `*text*`                 | `_text_` accepted                    |
//! | Underline      | `==text==`               | Dialect extension                    |
//! | Link           | `[text](href)`           |                                      |
//! | Image          | `![alt](src)`            |                                      |
//! | Alignment      | `{>}` `{^}` `{=}` prefix | Dialect extension, line-leading only |
//!
//! # Dialect Warning
//!
//! `==text==` and the `{>}`/`{^}`/`{=}` prefixes are not portable: standard
//! Markdown tooling renders them as literal text. Documents using them only
//! round-trip through this crate.

pub mod parser;
pub mod serializer;

use std::collections::HashMap;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;

pub use serializer::MarkdownRules;

/// Format implementation for the extended Markdown dialect
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Extended Markdown dialect (underline, alignment markers)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(parser::parse_from_markdown(source))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serializer::serialize_to_markdown(doc))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut rules = MarkdownRules::default();
        for (key, value) in options {
            match key.as_str() {
                "unordered_marker" => {
                    let mut chars = value.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) if matches!(c, '-' | '*' | '+') => {
                            rules.unordered_marker = c;
                        }
                        _ => {
                            return Err(FormatError::SerializationError(format!(
                                "unordered_marker must be one of '-', '*', '+', got {value:?}"
                            )))
                        }
                    }
                }
                _ => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'markdown' does not support option '{key}'"
                    )))
                }
            }
        }
        Ok(serializer::serialize_to_markdown_with_rules(doc, &rules))
    }
}
