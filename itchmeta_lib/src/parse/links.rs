use crate::dom::{Document, Node};
use crate::types::Link;
use crate::urls::{absolutize, host_of, is_marketplace_url};

use super::non_empty_text;

const LINK_SELECTORS: &[&str] = &[
    "td[class='game_info_panel_widget'] a[href*='http']",
    "div[class*='links'] a[href*='http']",
];

/// Outbound links off the marketplace, named by known service or link text.
/// Deduplicated by URL, first occurrence wins.
pub fn parse_additional_links(doc: &Document, page_url: &str) -> Vec<Link> {
    let mut links: Vec<Link> = Vec::new();
    for node in doc.root().first_non_empty_set(LINK_SELECTORS) {
        let Some(url) = node
            .attr_non_empty("href")
            .and_then(|href| absolutize(href, page_url))
        else {
            continue;
        };
        if is_marketplace_url(&url) {
            continue;
        }
        if links.iter().any(|l| l.url == url) {
            continue;
        }
        let name = classify(&url, node);
        links.push(Link::new(name, url));
    }
    links
}

fn classify(url: &str, node: Node<'_>) -> String {
    let lower = url.to_ascii_lowercase();
    let host = host_of(url).unwrap_or_default();
    let known = if lower.contains("twitter.com") || host == "x.com" || host.ends_with(".x.com") {
        Some("Twitter")
    } else if lower.contains("discord") {
        Some("Discord")
    } else if lower.contains("github.com") {
        Some("GitHub")
    } else if lower.contains("youtube.com") {
        Some("YouTube")
    } else if lower.contains("steam") {
        Some("Steam")
    } else {
        None
    };
    match known {
        Some(name) => name.to_string(),
        None => non_empty_text(node).unwrap_or_else(|| "Website".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://maddy.itch.io/celeste";

    fn names_and_urls(links: &[Link]) -> Vec<(&str, &str)> {
        links
            .iter()
            .map(|l| (l.name.as_str(), l.url.as_str()))
            .collect()
    }

    #[test]
    fn classifies_known_services() {
        let html = r#"<html><body><div class="links">
            <a href="https://twitter.com/celeste_game">@celeste_game</a>
            <a href="https://x.com/maddy">maddy</a>
            <a href="https://discord.gg/celeste">Join us</a>
            <a href="https://github.com/maddy/celeste">Source</a>
            <a href="https://www.youtube.com/watch?v=1">Trailer</a>
            <a href="https://store.steampowered.com/app/504230">Buy</a>
            <a href="https://www.netflix.com/title/1">Watch</a>
            <a href="https://celestegame.com"></a>
            </div></body></html>"#;
        let links = parse_additional_links(&Document::parse(html), PAGE);
        assert_eq!(
            names_and_urls(&links),
            vec![
                ("Twitter", "https://twitter.com/celeste_game"),
                ("Twitter", "https://x.com/maddy"),
                ("Discord", "https://discord.gg/celeste"),
                ("GitHub", "https://github.com/maddy/celeste"),
                ("YouTube", "https://www.youtube.com/watch?v=1"),
                ("Steam", "https://store.steampowered.com/app/504230"),
                ("Watch", "https://www.netflix.com/title/1"),
                ("Website", "https://celestegame.com"),
            ]
        );
    }

    #[test]
    fn skips_marketplace_and_duplicates() {
        let html = r#"<html><body><table><tr>
            <td class="game_info_panel_widget">
              <a href="https://itch.io/games/tag-platformer">Platformer</a>
              <a href="https://maddy.itch.io">Maddy</a>
              <a href="http://celestegame.com">Homepage</a>
              <a href="https://celestegame.com">Homepage again</a>
            </td></tr></table></body></html>"#;
        let links = parse_additional_links(&Document::parse(html), PAGE);
        assert_eq!(
            names_and_urls(&links),
            vec![("Homepage", "https://celestegame.com")]
        );
    }

    #[test]
    fn no_links() {
        assert!(parse_additional_links(&Document::parse("<html></html>"), PAGE).is_empty());
    }
}
