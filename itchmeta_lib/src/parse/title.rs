use crate::dom::{Document, Node};

const TITLE_SELECTORS: &[&str] = &[
    "h1[class='game_title']",
    "h1[class*='game_title']",
    "div[class='game_title'] h1",
    "title",
];

const SITE_SUFFIX: &str = " - itch.io";

/// Game title from the page heading, or from `<title>` with the
/// `" by <author>"` and site-name suffixes removed.
pub fn parse_title(doc: &Document) -> Option<String> {
    doc.root().first_of(TITLE_SELECTORS, title_from_node)
}

fn title_from_node(node: Node<'_>) -> Option<String> {
    let mut title = node.text();
    if node.tag() == "title" {
        if let Some((head, _)) = title.split_once(" by ") {
            title = head.trim().to_string();
        }
        if let Some(head) = title.strip_suffix(SITE_SUFFIX) {
            title = head.trim().to_string();
        }
    }
    Some(title).filter(|t| !t.is_empty())
}
