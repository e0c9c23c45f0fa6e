//! End-to-end conversion through the public convenience API.

mod common;

use common::{ARTICLE_MARKDOWN, ARTICLE_MARKUP};
use rte_babel::{markdown_to_markup, markup_to_markdown, plain_text, word_at_offset};

#[test]
fn article_converts_to_markdown() {
    assert_eq!(markup_to_markdown(ARTICLE_MARKUP), ARTICLE_MARKDOWN);
}

#[test]
fn article_converts_to_markup() {
    assert_eq!(markdown_to_markup(ARTICLE_MARKDOWN), ARTICLE_MARKUP);
}

#[test]
fn a_second_pass_changes_nothing() {
    let md = markup_to_markdown(ARTICLE_MARKUP);
    assert_eq!(markup_to_markdown(&markdown_to_markup(&md)), md);

    let markup = markdown_to_markup(ARTICLE_MARKDOWN);
    assert_eq!(markdown_to_markup(&markup_to_markdown(&markup)), markup);
}

#[test]
fn newlines_inside_single_line_blocks_reach_a_fixed_point() {
    // Pretty-printed markup can carry raw newlines inside a heading or an
    // aligned paragraph; the Markdown view must not split those into blocks.
    let md = markup_to_markdown("<h1>a\nb</h1>");
    assert_eq!(md, "# a b");
    assert_eq!(markup_to_markdown(&markdown_to_markup(&md)), md);

    let md = markup_to_markdown("<p style=\"text-align: right\">a\nb</p>");
    assert_eq!(md, "{>}a b");
    assert_eq!(markup_to_markdown(&markdown_to_markup(&md)), md);

    let md = markup_to_markdown("<ul><li>a\nb</li></ul>");
    assert_eq!(md, "- a b");
    assert_eq!(markup_to_markdown(&markdown_to_markup(&md)), md);
}

#[test]
fn non_breaking_spaces_extract_as_single_characters() {
    let text = plain_text("<p>A&nbsp;B</p>");
    assert_eq!(text, "A B");
    assert_eq!(text.chars().count(), 3);
}

#[test]
fn word_lookup_works_over_extracted_text() {
    let text = plain_text("<p>The <strong>quick</strong> fox</p>");
    assert_eq!(text, "The quick fox");
    assert_eq!(word_at_offset(&text, 6), Some("quick".to_string()));
    assert_eq!(word_at_offset(&text, 0), Some("the".to_string()));
}

#[test]
fn conversion_output_is_trimmed() {
    assert_eq!(markup_to_markdown("<p>  a  </p>"), "a");
    assert_eq!(markdown_to_markup("\n\na\n\n"), "<p>a</p>");
}

#[test]
fn empty_inputs_convert_to_empty_outputs() {
    assert_eq!(markup_to_markdown(""), "");
    assert_eq!(markdown_to_markup(""), "");
}
