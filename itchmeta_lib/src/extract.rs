//! Page extractor: every field parser run against one document.

use crate::dom::Document;
use crate::error::ItchMetaError;
use crate::fetch::PageFetcher;
use crate::parse;
use crate::types::{Link, MetadataRecord};

/// Display name of the link back to the source page.
pub const SOURCE_LINK_NAME: &str = "itch.io";
pub const DEVELOPER_LINK_NAME: &str = "Developer Page";

/// Assembles the record for a parsed game page.
///
/// Parsers run independently; a miss leaves only that field empty.
pub fn extract_page(doc: &Document, source_url: &str) -> MetadataRecord {
    let author = parse::parse_author(doc, source_url);
    let tags = parse::parse_tags(doc);
    let genres = parse::parse_genres(doc, &tags);
    let cover_image_url = parse::parse_cover_image(doc, source_url);
    let screenshots = parse::parse_screenshots(doc, source_url, cover_image_url.as_deref());

    let mut links = vec![Link::new(SOURCE_LINK_NAME, source_url)];
    if let Some(profile) = author.as_ref().and_then(|a| a.profile_url.clone()) {
        links.push(Link::new(DEVELOPER_LINK_NAME, profile));
    }
    links.extend(parse::parse_additional_links(doc, source_url));
    let links = dedup_links(links);

    let (developers, publishers) = match author {
        Some(author) => (vec![author.name.clone()], vec![author.name]),
        None => (Vec::new(), Vec::new()),
    };

    let record = MetadataRecord {
        name: parse::parse_title(doc),
        description: parse::parse_description(doc),
        developers,
        publishers,
        genres,
        tags,
        release_date: parse::parse_release_date(doc),
        cover_image_url,
        screenshots,
        links,
        community_score: parse::parse_community_score(doc),
        source_url: Some(source_url.to_string()),
    };
    tracing::debug!(
        "Extracted {} fields from {}",
        record.available_fields().len(),
        source_url
    );
    record
}

/// Parses raw page HTML and extracts its record.
pub fn extract_html(html: &str, source_url: &str) -> MetadataRecord {
    extract_page(&Document::parse(html), source_url)
}

/// Fetches a page and extracts its record, surfacing transport errors.
pub async fn fetch_record<F: PageFetcher>(
    fetcher: &F,
    url: &str,
) -> Result<MetadataRecord, ItchMetaError> {
    let html = fetcher.fetch_page(url).await?;
    Ok(extract_html(&html, url))
}

fn dedup_links(links: Vec<Link>) -> Vec<Link> {
    let mut unique: Vec<Link> = Vec::with_capacity(links.len());
    for link in links {
        if !unique.iter().any(|l| l.url == link.url) {
            unique.push(link);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MetadataField;

    const PAGE: &str = "https://maddy.itch.io/celeste";

    #[test]
    fn minimal_page_still_has_source_link() {
        let record = extract_html("<html><body></body></html>", PAGE);
        assert_eq!(record.links, vec![Link::new("itch.io", PAGE)]);
        assert_eq!(record.source_url.as_deref(), Some(PAGE));
        assert_eq!(record.available_fields(), vec![MetadataField::Links]);
        assert!(record.developers.is_empty());
        assert!(record.screenshots.is_empty());
    }

    #[test]
    fn author_fills_people_and_developer_link() {
        let html = r#"<html><body>
            <h1 class="game_title">Celeste</h1>
            <div class="game_author"><a href="https://maddy.itch.io">Maddy Makes Games</a></div>
            <div class="links"><a href="https://maddy.itch.io">dup of developer</a>
            <a href="https://twitter.com/celeste_game">tw</a></div>
            </body></html>"#;
        let record = extract_html(html, PAGE);
        assert_eq!(record.name.as_deref(), Some("Celeste"));
        assert_eq!(record.developers, vec!["Maddy Makes Games"]);
        assert_eq!(record.publishers, vec!["Maddy Makes Games"]);
        assert_eq!(
            record.links,
            vec![
                Link::new("itch.io", PAGE),
                Link::new("Developer Page", "https://maddy.itch.io"),
                Link::new("Twitter", "https://twitter.com/celeste_game"),
            ]
        );
    }

    #[test]
    fn developer_link_equal_to_source_is_deduplicated() {
        let html = r#"<html><body><a class="user_link" href="https://maddy.itch.io/celeste">Maddy</a></body></html>"#;
        let record = extract_html(html, PAGE);
        assert_eq!(record.links, vec![Link::new("itch.io", PAGE)]);
    }

    #[test]
    fn relative_urls_on_http_page_become_https() {
        let page = "http://maddy.itch.io/celeste";
        let html = r#"<html><body>
            <div class="game_cover"><img src="/cover.png"></div>
            <div class="screenshot_list"><a href="/shots/a.png">a</a></div>
            <div class="game_author"><a href="/profile">Maddy</a></div>
            </body></html>"#;
        let record = extract_html(html, page);
        assert_eq!(
            record.cover_image_url.as_deref(),
            Some("https://maddy.itch.io/cover.png")
        );
        assert_eq!(record.screenshots, vec!["https://maddy.itch.io/shots/a.png"]);
        assert_eq!(
            record.links[1],
            Link::new("Developer Page", "https://maddy.itch.io/profile")
        );
    }

    #[test]
    fn cover_seeds_screenshots() {
        let html = r#"<html><head><meta property="og:image" content="//img.itch.zone/cover.png"></head></html>"#;
        let record = extract_html(html, PAGE);
        assert_eq!(
            record.cover_image_url.as_deref(),
            Some("https://img.itch.zone/cover.png")
        );
        assert_eq!(record.screenshots, vec!["https://img.itch.zone/cover.png"]);
    }
}
