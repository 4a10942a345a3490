use crate::dom::{Document, Node};

use super::{labeled_row, non_empty_text};

const TAG_SELECTORS: &[&str] = &[
    "td[class='game_info_panel_widget'] a[href*='/tag/']",
    "a[href*='/games/tag-']",
    "div[class*='game_tags'] a",
];

/// Lowercase keywords that mark a tag as a genre when the page lists none.
pub const GENRE_KEYWORDS: &[&str] = &[
    "action",
    "adventure",
    "rpg",
    "puzzle",
    "platformer",
    "shooter",
    "strategy",
    "simulation",
    "horror",
    "visual novel",
    "racing",
    "sports",
    "fighting",
    "survival",
    "roguelike",
    "metroidvania",
    "sandbox",
    "open world",
];

/// Tag link texts, in page order.
pub fn parse_tags(doc: &Document) -> Vec<String> {
    doc.root()
        .first_non_empty_set(TAG_SELECTORS)
        .into_iter()
        .filter_map(non_empty_text)
        .collect()
}

/// Genres from the labelled genre field, else inferred from `tags`.
pub fn parse_genres(doc: &Document, tags: &[String]) -> Vec<String> {
    let explicit = explicit_genres(doc.root());
    if explicit.is_empty() {
        infer_genres(tags)
    } else {
        explicit
    }
}

fn explicit_genres(root: Node<'_>) -> Vec<String> {
    if let Some(cells) = labeled_row(root, "Genre") {
        let genres: Vec<String> = cells
            .iter()
            .flat_map(|cell| cell.select_all("a"))
            .filter_map(non_empty_text)
            .collect();
        if !genres.is_empty() {
            return genres;
        }
    }

    root.find_all(|n| n.tag() == "div" && n.own_text().contains("Genre:"))
        .into_iter()
        .map(|div| {
            div.select_all("a")
                .into_iter()
                .filter_map(non_empty_text)
                .collect::<Vec<_>>()
        })
        .find(|genres| !genres.is_empty())
        .unwrap_or_default()
}

/// Tags whose text mentions a genre keyword, kept in tag order.
///
/// A heuristic, not a classification: "Action RPG" counts once even though
/// it matches two keywords.
pub fn infer_genres(tags: &[String]) -> Vec<String> {
    tags.iter()
        .filter(|tag| {
            let lower = tag.to_lowercase();
            GENRE_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
        })
        .cloned()
        .collect()
}
