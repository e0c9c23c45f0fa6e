//! Bidirectional conversion core for rich-text editor content
//!
//!     This crate provides a uniform interface for converting between the
//!     editor's markup (a small HTML subset) and its extended Markdown dialect,
//!     plus the read-only preview helpers: tag-safe word highlighting,
//!     plain-text extraction and word-at-offset lookup.
//!
//! Architecture
//!
//!     Every conversion is a two-stage pipeline: parse the source into the
//!     document AST (./ir/nodes.rs), then serialize the AST into the target
//!     format. The AST is the single normalization point. Malformed or
//!     unsupported input degrades at parse time, so both serializers only ever
//!     see well-formed documents.
//!
//!     This is a pure lib, that is, it powers the rte-cli but is shell
//!     agnostic: no code here supposes a shell environment, be it std print,
//!     env vars etc.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── markup              # editor markup (HTML subset)
//!     │   │   ├── scanner.rs      # tag/text/entity classifier
//!     │   │   ├── parser.rs
//!     │   │   ├── serializer.rs
//!     │   │   └── mod.rs
//!     │   └── markdown            # extended Markdown dialect
//!     │       ├── parser.rs
//!     │       ├── serializer.rs
//!     │       └── mod.rs
//!     ├── highlight               # tag-safe word highlighting
//!     ├── ir                      # document AST
//!     ├── text.rs                 # plain text / word-at-offset helpers
//!     └── lib.rs
//!
//! Error Handling
//!
//!     Conversions never fail. Malformed tags become literal text, unknown
//!     block tags demote to paragraphs, stray entities pass through, and
//!     out-of-range offsets return None. All degradation is silent and
//!     deterministic. [`FormatError`] exists for registry-level misuse only:
//!     asking for an unknown format, or parsing with a serialize-only format.
//!
//! The Markdown Dialect
//!
//!     The Markdown side is not CommonMark. It adds `==text==` for underline
//!     and line-leading `{>}` / `{^}` / `{=}` alignment markers (right,
//!     center, justify), none of which standard Markdown tooling understands.
//!     Output using those constructs only round-trips through this crate's own
//!     parser.
//!
//! Testing
//!
//!     Unit tests live beside the code in #[cfg(test)] modules. Integration
//!     tests live under tests/, one directory per format plus roundtrip
//!     property tests. Note that rust does not by default discover tests in
//!     subdirectories, so tests/lib.rs declares the modules.

pub mod error;
pub mod format;
pub mod formats;
pub mod highlight;
pub mod ir;
pub mod registry;
pub mod text;

pub use error::FormatError;
pub use format::Format;
pub use highlight::{
    highlight_multi, highlight_multi_with_rules, highlight_single, ColorSpec, HighlightRules,
    WordColor, DEFAULT_HIGHLIGHT_CLASS,
};
pub use registry::FormatRegistry;
pub use text::{plain_text, word_at_offset};

/// Converts editor markup to the extended Markdown dialect.
///
/// Never fails: unsupported constructs degrade deterministically during the
/// markup parse stage.
pub fn markup_to_markdown(markup: &str) -> String {
    let doc = formats::markup::parser::parse_from_markup(markup);
    formats::markdown::serializer::serialize_to_markdown(&doc)
}

/// Converts the extended Markdown dialect back to editor markup.
///
/// The output uses canonical tags only (`<strong>`, `<em>`, never `<b>` or
/// `<i>`), so converting twice is idempotent.
pub fn markdown_to_markup(markdown: &str) -> String {
    let doc = formats::markdown::parser::parse_from_markdown(markdown);
    formats::markup::serializer::serialize_to_markup(&doc)
}
