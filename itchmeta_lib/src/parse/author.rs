use crate::cascade::first_some;
use crate::dom::{Document, Node};
use crate::urls::absolutize;

use super::labeled_row;

/// The single listed author of a game page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    /// Absolute profile URL, when the author node links somewhere.
    pub profile_url: Option<String>,
}

const AUTHOR_SELECTORS: &[&str] = &[
    "div[class='game_author'] a",
    "a[class*='user_link']",
    "td[class='game_info_panel_widget'] a[href*='.itch.io']",
];

/// The page's author, with the profile link when one is present.
pub fn parse_author(doc: &Document, page_url: &str) -> Option<Author> {
    let node = author_node(doc.root())?;
    let name = node.text();
    if name.is_empty() {
        return None;
    }
    let profile_url = node
        .attr_non_empty("href")
        .and_then(|href| absolutize(href, page_url));
    Some(Author { name, profile_url })
}

fn author_node<'a>(root: Node<'a>) -> Option<Node<'a>> {
    type Strategy<'a> = fn(Node<'a>) -> Option<Node<'a>>;
    let strategies: [Strategy<'a>; 2] = [by_selector as Strategy<'a>, by_info_row as Strategy<'a>];
    first_some(root, &strategies)
}

fn by_selector(root: Node<'_>) -> Option<Node<'_>> {
    root.first_of(AUTHOR_SELECTORS, |n| Some(n).filter(|n| !n.text().is_empty()))
}

fn by_info_row(root: Node<'_>) -> Option<Node<'_>> {
    labeled_row(root, "Author")?
        .into_iter()
        .skip(1)
        .find_map(|cell| cell.select_first("a"))
        .filter(|n| !n.text().is_empty())
}
