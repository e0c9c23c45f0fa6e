use std::collections::HashMap;

use rte_babel::FormatRegistry;

use crate::common::{article_doc, ARTICLE_MARKDOWN};

#[test]
fn article_serializes_to_the_dialect() {
    let registry = FormatRegistry::with_defaults();
    let out = registry.serialize(&article_doc(), "markdown").unwrap();
    assert_eq!(out, ARTICLE_MARKDOWN);
}

#[test]
fn unordered_marker_can_be_switched_through_options() {
    let registry = FormatRegistry::with_defaults();
    let mut options = HashMap::new();
    options.insert("unordered_marker".to_string(), "*".to_string());
    let out = registry
        .serialize_with_options(&article_doc(), "markdown", &options)
        .unwrap();
    assert!(out.contains("* first\n* second"));
    assert!(!out.contains("- first"));
}

#[test]
fn unknown_options_surface_as_errors() {
    let registry = FormatRegistry::with_defaults();
    let mut options = HashMap::new();
    options.insert("flavor".to_string(), "gfm".to_string());
    assert!(registry
        .serialize_with_options(&article_doc(), "markdown", &options)
        .is_err());
}
