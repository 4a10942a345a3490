//! Field parsers. Each recovers one attribute from a game page and falls
//! back to absence (or an empty list) when its selector cascade is exhausted.

pub mod author;
pub mod description;
pub mod images;
pub mod links;
pub mod rating;
pub mod release_date;
pub mod taxonomy;
pub mod title;

pub use self::author::{parse_author, Author};
pub use self::description::parse_description;
pub use self::images::{parse_cover_image, parse_screenshots};
pub use self::links::parse_additional_links;
pub use self::rating::{parse_community_score, score_from_rating};
pub use self::release_date::{parse_date, parse_release_date};
pub use self::taxonomy::{infer_genres, parse_genres, parse_tags};
pub use self::title::parse_title;

use crate::dom::Node;

/// Text of a node, `None` when blank.
pub(crate) fn non_empty_text(node: Node<'_>) -> Option<String> {
    Some(node.text()).filter(|t| !t.is_empty())
}

/// Cells of the first table row whose label cell contains `label`.
///
/// Rows are `<tr>` elements; a label cell is any `<td>` whose own text
/// contains the label (case-sensitive, as rendered on the page).
pub(crate) fn labeled_row<'a>(scope: Node<'a>, label: &str) -> Option<Vec<Node<'a>>> {
    scope.select_all("tr").into_iter().find_map(|row| {
        let cells: Vec<Node<'a>> = row
            .children()
            .into_iter()
            .filter(|c| c.tag() == "td")
            .collect();
        cells
            .iter()
            .any(|cell| cell.own_text().contains(label) || cell.text().starts_with(label))
            .then_some(cells)
    })
}
