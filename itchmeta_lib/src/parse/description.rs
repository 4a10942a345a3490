use crate::dom::Document;
use crate::text::html_to_text;

const DESCRIPTION_SELECTORS: &[&str] = &[
    "div[class*='formatted_description']",
    "div[class='game_description']",
    "div[class*='page_widget'] div[class*='inner_column']",
];

/// Plain-text description from the formatted block, else the page's
/// `<meta name="description">`.
pub fn parse_description(doc: &Document) -> Option<String> {
    let root = doc.root();
    let formatted = root
        .select_first_of(DESCRIPTION_SELECTORS)
        .map(|node| html_to_text(&node.inner_html()))
        .filter(|text| !text.is_empty());
    if formatted.is_some() {
        return formatted;
    }
    root.select_first("meta[name='description']")
        .and_then(|meta| meta.attr_non_empty("content"))
        .map(str::to_string)
}
