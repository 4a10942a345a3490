//! Canonical game-page URL from what the caller already knows.

use itchio_api::{DOMAIN, SITE_URL};

use crate::types::Link;

/// Source names that identify this marketplace, compared case-insensitively.
pub const SOURCE_NAMES: &[&str] = &["itch", "itch.io"];

/// Picks the page URL to extract from, first match wins:
///
/// 1. an existing link whose URL mentions the domain;
/// 2. a game id that mentions the domain;
/// 3. any non-empty game id when the source is this marketplace.
pub fn resolve_game_url(links: &[Link], game_id: Option<&str>, source: Option<&str>) -> Option<String> {
    if let Some(link) = links.iter().find(|l| l.url.contains(DOMAIN)) {
        return Some(normalize(&link.url));
    }

    let game_id = game_id.map(str::trim).filter(|id| !id.is_empty());
    if let Some(id) = game_id.filter(|id| id.contains(DOMAIN)) {
        return Some(normalize(id));
    }

    let from_marketplace = source.is_some_and(|s| {
        SOURCE_NAMES
            .iter()
            .any(|name| s.trim().eq_ignore_ascii_case(name))
    });
    if from_marketplace {
        return game_id.map(normalize);
    }
    None
}

/// Absolute `http(s)` input passes through unchanged; anything else is made
/// an absolute `https` URL on the site.
pub fn normalize(value: &str) -> String {
    let value = value.trim();
    if is_absolute_http(value) {
        return value.to_string();
    }
    if let Some(rest) = value.strip_prefix("//") {
        return format!("https://{}", rest);
    }
    if let Some(path) = value.strip_prefix('/') {
        return format!("{}/{}", SITE_URL, path);
    }
    let host = value.split('/').next().unwrap_or(value);
    if host.contains(DOMAIN) {
        return format!("https://{}", value);
    }
    format!("{}/{}", SITE_URL, value)
}

fn is_absolute_http(value: &str) -> bool {
    let lower = value.get(..8).unwrap_or(value).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
