//! Marketplace search: one results page parsed into candidates.

use itchio_api::{query_url, SearchQuery};
use url::Url;

use crate::dom::{Document, Node};
use crate::fetch::{fetch_document, PageFetcher};
use crate::parse::non_empty_text;
use crate::types::SearchCandidate;
use crate::urls::{absolutize, join_site};
use crate::validation::{clamp_max_results, validate_search};

const CELL_SELECTOR: &str = "div[class*='game_cell']";
const PRIMARY_TITLE_SELECTOR: &str = "a[class*='title'], a[class*='game_link']";
const NESTED_TITLE_SELECTOR: &str = "div[class='game_title'] a";
const TITLE_BLOCK_SELECTOR: &str = "div[class*='game_title']";
const AUTHOR_SELECTORS: &[&str] = &["div[class*='game_author'] a", "a[class*='user_link']"];
const TEXT_SELECTOR: &str = "div[class*='game_text']";
const THUMBNAIL_SELECTORS: &[&str] = &[
    "div[class*='game_thumb'] img",
    "img[class*='lazy_loaded']",
    "img",
];

/// Issues searches through a [`PageFetcher`].
pub struct SearchClient<'a, F> {
    fetcher: &'a F,
}

impl<'a, F: PageFetcher> SearchClient<'a, F> {
    pub fn new(fetcher: &'a F) -> Self {
        Self { fetcher }
    }

    /// Up to `max` candidates (clamped to 1-100) in result-page order.
    ///
    /// An invalid query, a failed fetch, or a page without result cells all
    /// give an empty list.
    pub async fn search(&self, query: &str, max: u32) -> Vec<SearchCandidate> {
        let query = match validate_search(query) {
            Ok(q) => q,
            Err(e) => {
                tracing::debug!("Skipping search: {}", e);
                return Vec::new();
            }
        };
        let Some(url) = search_url(self.fetcher.site_url(), &query) else {
            return Vec::new();
        };
        let Some(html) = fetch_document(self.fetcher, url.as_str()).await else {
            return Vec::new();
        };
        let candidates = parse_search_results(&html, max, self.fetcher.site_url());
        tracing::info!("Search {:?} returned {} candidates", query, candidates.len());
        candidates
    }
}

fn search_url(site_url: &str, text: &str) -> Option<Url> {
    query_url(site_url, &SearchQuery::new(text))
        .map_err(|e| tracing::warn!("Skipping search: {}", e))
        .ok()
}

/// Candidates from a results page. Cells without both a title and a URL
/// are dropped before the list is cut to `max`; repeated URLs (nested
/// cell markup) are kept once.
pub fn parse_search_results(html: &str, max: u32, base_url: &str) -> Vec<SearchCandidate> {
    let max = clamp_max_results(max) as usize;
    let doc = Document::parse(html);
    let mut candidates: Vec<SearchCandidate> = Vec::new();
    for cell in doc.root().select_all(CELL_SELECTOR) {
        if candidates.len() == max {
            break;
        }
        let Some(candidate) = parse_cell(cell, base_url) else {
            tracing::debug!("Dropping search cell without title or URL");
            continue;
        };
        if candidates.iter().any(|c| c.url == candidate.url) {
            continue;
        }
        candidates.push(candidate);
    }
    candidates
}

fn parse_cell(cell: Node<'_>, base_url: &str) -> Option<SearchCandidate> {
    let (title, href) = cell_title(cell)?;
    let url = join_site(href, base_url)?;

    let author = cell.first_of(AUTHOR_SELECTORS, non_empty_text);
    let text = cell.select_first(TEXT_SELECTOR).and_then(non_empty_text);
    let thumbnail_url = cell.first_of(THUMBNAIL_SELECTORS, |img| {
        img.attr_non_empty("data-lazy_src")
            .or_else(|| img.attr_non_empty("src"))
            .and_then(|src| absolutize(src, base_url))
    });

    let description = match (&author, text) {
        (Some(author), Some(text)) => Some(format!("by {} - {}", author, text)),
        (Some(author), None) => Some(format!("by {}", author)),
        (None, text) => text,
    };

    Some(SearchCandidate {
        title,
        url,
        description,
        thumbnail_url,
        author,
    })
}

/// Title text and raw href of a cell: the title link, then a link nested in
/// the title block, then the title block itself.
fn cell_title(cell: Node<'_>) -> Option<(String, &str)> {
    cell.select_all(PRIMARY_TITLE_SELECTOR)
        .into_iter()
        .find_map(titled_link)
        .or_else(|| cell.select_first(NESTED_TITLE_SELECTOR).and_then(titled_link))
        .or_else(|| {
            let block = cell.select_first(TITLE_BLOCK_SELECTOR)?;
            let link = block.select_first("a");
            let title = link
                .and_then(non_empty_text)
                .or_else(|| non_empty_text(block))?;
            let href = link?.attr_non_empty("href")?;
            Some((title, href))
        })
}

fn titled_link(a: Node<'_>) -> Option<(String, &str)> {
    let title = non_empty_text(a)?;
    let href = a.attr_non_empty("href")?;
    Some((title, href))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(i: usize) -> String {
        format!(
            r#"<div class="game_cell has_info">
                 <div class="game_thumb"><img data-lazy_src="//img.itch.zone/{i}.png" src="data:,"></div>
                 <div class="game_cell_data">
                   <div class="game_title"><a class="title game_link" href="https://dev{i}.itch.io/game{i}">Game {i}</a></div>
                   <div class="game_text">Short text {i}</div>
                   <div class="game_author"><a href="https://dev{i}.itch.io">Dev {i}</a></div>
                 </div>
               </div>"#
        )
    }

    fn page(cells: &[String]) -> String {
        format!(
            "<html><body><div class=\"game_grid_widget\">{}</div></body></html>",
            cells.concat()
        )
    }

    #[test]
    fn full_cell() {
        let html = page(&[cell(1)]);
        let results = parse_search_results(&html, 20, "https://itch.io");
        assert_eq!(
            results,
            vec![SearchCandidate {
                title: "Game 1".to_string(),
                url: "https://dev1.itch.io/game1".to_string(),
                description: Some("by Dev 1 - Short text 1".to_string()),
                thumbnail_url: Some("https://img.itch.zone/1.png".to_string()),
                author: Some("Dev 1".to_string()),
            }]
        );
    }

    #[test]
    fn capped_in_document_order() {
        let cells: Vec<String> = (1..=10).map(cell).collect();
        let results = parse_search_results(&page(&cells), 3, "https://itch.io");
        let titles: Vec<&str> = results.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Game 1", "Game 2", "Game 3"]);
    }

    #[test]
    fn malformed_cells_dropped() {
        let broken = r#"<div class="game_cell"><div class="game_thumb"><img src="//img.itch.zone/ad.png"></div></div>"#;
        let cells = vec![
            cell(1),
            broken.to_string(),
            cell(2),
            broken.to_string(),
            cell(3),
        ];
        let results = parse_search_results(&page(&cells), 20, "https://itch.io");
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn cap_applies_after_dropping() {
        let broken = r#"<div class="game_cell"></div>"#.to_string();
        let cells = vec![broken.clone(), broken, cell(1), cell(2)];
        let results = parse_search_results(&page(&cells), 2, "https://itch.io");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Game 1");
    }

    #[test]
    fn title_block_without_link_class() {
        let html = page(&[r#"<div class="game_cell">
            <div class="game_title featured"><a href="/game/relative">Relative Game</a></div>
            <div class="game_text">Plain text</div></div>"#
            .to_string()]);
        let results = parse_search_results(&html, 20, "https://itch.io");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, "https://itch.io/game/relative");
        assert_eq!(results[0].description.as_deref(), Some("Plain text"));
        assert_eq!(results[0].author, None);
    }

    #[test]
    fn author_without_text() {
        let html = page(&[r#"<div class="game_cell">
            <a class="title" href="https://a.itch.io/b">B</a>
            <a class="user_link" href="https://a.itch.io">A</a></div>"#
            .to_string()]);
        let results = parse_search_results(&html, 20, "https://itch.io");
        assert_eq!(results[0].description.as_deref(), Some("by A"));
    }

    #[test]
    fn no_cells() {
        assert!(parse_search_results("<html><body>No results</body></html>", 20, "https://itch.io").is_empty());
    }

    #[test]
    fn search_url_encodes_query() {
        let url = search_url("https://itch.io/", "celeste").unwrap();
        assert_eq!(url.as_str(), "https://itch.io/search?q=celeste");
    }
}
