use std::sync::LazyLock;

use regex::Regex;

use crate::dom::{Document, Node};

const RATING_SELECTORS: &[&str] = &[
    "div[class*='aggregate_rating']",
    "span[class*='rating_value']",
    "div[itemprop='aggregateRating'] span[itemprop='ratingValue']",
];

static NUMBER: LazyLock<Regex> = LazyLock::new(|| re(r"\d+(?:\.\d+)?"));

static RATED_OUT_OF_FIVE: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)Rated\s+(\d+(?:\.\d+)?)\s+out\s+of\s+5"));

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

/// Converts a displayed rating to a 0-100 score.
///
/// Values up to 5 are treated as stars; values above 5 and up to 100 as a
/// percentage. Anything else is discarded.
pub fn score_from_rating(value: f64) -> Option<u8> {
    if !value.is_finite() || value < 0.0 {
        None
    } else if value <= 5.0 {
        Some((value * 20.0).round() as u8)
    } else if value <= 100.0 {
        Some(value.round() as u8)
    } else {
        None
    }
}

/// Community score from the rating widgets, else from a
/// "Rated X out of 5" tooltip.
pub fn parse_community_score(doc: &Document) -> Option<u8> {
    let root = doc.root();
    root.select_first_of(RATING_SELECTORS)
        .and_then(widget_score)
        .or_else(|| tooltip_score(root))
}

fn widget_score(node: Node<'_>) -> Option<u8> {
    let from_text = NUMBER
        .find(&node.text())
        .and_then(|m| m.as_str().parse::<f64>().ok());
    let value = from_text.or_else(|| {
        node.attr_non_empty("content")
            .and_then(|content| NUMBER.find(content))
            .and_then(|m| m.as_str().parse::<f64>().ok())
    })?;
    score_from_rating(value)
}

fn tooltip_score(root: Node<'_>) -> Option<u8> {
    root.find_all(|n| n.attr("title").is_some_and(|t| t.contains("Rated")))
        .into_iter()
        .find_map(|node| {
            let title = node.attr("title")?;
            let caps = RATED_OUT_OF_FIVE.captures(title)?;
            let value = caps.get(1)?.as_str().parse::<f64>().ok()?;
            score_from_rating(value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_and_percentages() {
        assert_eq!(score_from_rating(4.5), Some(90));
        assert_eq!(score_from_rating(5.0), Some(100));
        assert_eq!(score_from_rating(0.0), Some(0));
        assert_eq!(score_from_rating(4.83), Some(97));
        assert_eq!(score_from_rating(82.0), Some(82));
        assert_eq!(score_from_rating(100.0), Some(100));
        assert_eq!(score_from_rating(150.0), None);
        assert_eq!(score_from_rating(-1.0), None);
    }

    #[test]
    fn score_from_widget_text() {
        let html = r#"<html><body><div class="aggregate_rating">Rating: 4.5 (120 ratings)</div></body></html>"#;
        assert_eq!(parse_community_score(&Document::parse(html)), Some(90));
    }

    #[test]
    fn score_from_content_attribute() {
        let html = r#"<html><body><div itemprop="aggregateRating"><span itemprop="ratingValue" content="4.0"></span></div></body></html>"#;
        assert_eq!(parse_community_score(&Document::parse(html)), Some(80));
    }

    #[test]
    fn percentage_widget() {
        let html = r#"<html><body><span class="rating_value">82</span></body></html>"#;
        assert_eq!(parse_community_score(&Document::parse(html)), Some(82));
    }

    #[test]
    fn out_of_range_widget_discarded() {
        let html = r#"<html><body><span class="rating_value">150</span></body></html>"#;
        assert_eq!(parse_community_score(&Document::parse(html)), None);
    }

    #[test]
    fn tooltip_fallback() {
        let html = r#"<html><body><div class="star_value" title="Rated 3.5 out of 5 stars"></div></body></html>"#;
        assert_eq!(parse_community_score(&Document::parse(html)), Some(70));
    }

    #[test]
    fn no_rating() {
        assert_eq!(parse_community_score(&Document::parse("<html></html>")), None);
    }
}
