//! Editor markup format implementation
//!
//! This module implements bidirectional conversion between the document AST
//! and the editor's markup, a small HTML subset.
//!
//! # Library Choice
//!
//! The scanner and parser are hand-written rather than delegated to an HTML5
//! parser. The editor contract is not HTML conformance: the supported subset
//! is tiny, malformed tags must become literal text (a conformant parser
//! error-corrects them instead), and the same scanner must drive the
//! highlight injector and plain-text extraction so all three agree on what a
//! tag is.
//!
//! # Element Mapping Table
//!
//! | AST Element    | Markup                          | Import Notes                        |
//! |----------------|---------------------------------|-------------------------------------|
//! | Heading        | `<h1>`..`<h6>`                  | Level from tag name                 |
//! | Paragraph      | `<p>`                           | Bare inline content also accepted   |
//! | List           | `<ul>`/`<ol>` + `<li>`          | Items are flat inline runs          |
//! | Bold           | `<strong>`                      | `<b>` accepted on import            |
//! | Italic         | `<em>`                          | `<i>` accepted on import            |
//! | Underline      | `<u>`                           |                                     |
//! | Link           | `<a href="...">`                | href entities decoded               |
//! | Image          | `<img src="..." alt="..." />`   | Either attribute order              |
//! | LineBreak      | `<br>`                          | `<br/>` and `<br />` accepted       |
//! | Alignment      | `style="text-align: ..."`       | On headings, paragraphs, div        |
//!
//! # Degradation
//!
//! Import never fails. Unknown block tags demote to paragraphs, unknown
//! inline tags (span included) are transparent, malformed tags become literal
//! text, and the five known entities decode while everything else passes
//! through raw. Export is canonical and escapes text/attribute values, so an
//! import/export round trip is stable.

pub mod parser;
pub mod scanner;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;

/// Format implementation for editor markup
pub struct MarkupFormat;

impl Format for MarkupFormat {
    fn name(&self) -> &str {
        "markup"
    }

    fn description(&self) -> &str {
        "Editor markup (HTML subset)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(parser::parse_from_markup(source))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serializer::serialize_to_markup(doc))
    }
}
