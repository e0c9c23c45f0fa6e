use rte_babel::{
    highlight_multi, highlight_multi_with_rules, highlight_single, markdown_to_markup,
    HighlightRules, WordColor, DEFAULT_HIGHLIGHT_CLASS,
};

#[test]
fn highlighting_composes_with_conversion() {
    let markup = markdown_to_markup("the **cat** sat");
    let out = highlight_single(&markup, &["cat"], DEFAULT_HIGHLIGHT_CLASS);
    assert_eq!(
        out,
        "<p>the <strong><span class=\"rte-highlight\">cat</span></strong> sat</p>"
    );
}

#[test]
fn word_color_entries_load_from_json() {
    let json = r##"[
        {"word": "alpha", "color": {"hex": "#ffe066"}},
        {"word": "beta", "color": {"class": "bg-blue-200", "text": "text-blue-800"}},
        {"word": "gamma"}
    ]"##;
    let entries: Vec<WordColor> = serde_json::from_str(json).unwrap();
    let out = highlight_multi("<p>alpha beta gamma</p>", &entries);
    assert_eq!(
        out,
        "<p><span style=\"background-color: #ffe066; color: #000000;\" \
         class=\"px-0.5 rounded font-medium\">alpha</span> \
         <span class=\"bg-blue-200 text-blue-800 px-0.5 rounded font-medium\">beta</span> \
         <span class=\"bg-yellow-200 text-yellow-800 px-0.5 rounded font-medium\">gamma</span></p>"
    );
}

#[test]
fn custom_rules_restyle_every_span() {
    let rules = HighlightRules {
        utility_classes: "rte-chip".to_string(),
        fallback_classes: "rte-fallback".to_string(),
        default_text_color: "#111111".to_string(),
    };
    let entries = vec![WordColor {
        word: "cat".to_string(),
        color: Default::default(),
    }];
    let out = highlight_multi_with_rules("<p>cat</p>", &entries, &rules);
    assert_eq!(out, "<p><span class=\"rte-fallback rte-chip\">cat</span></p>");
}

#[test]
fn repeated_injection_over_converted_content_is_stable() {
    let markup = markdown_to_markup("# Cats\n\nthe cat and the cat");
    let once = highlight_single(&markup, &["cat", "cats"], DEFAULT_HIGHLIGHT_CLASS);
    let twice = highlight_single(&once, &["cat", "cats"], DEFAULT_HIGHLIGHT_CLASS);
    assert_eq!(once, twice);
}
