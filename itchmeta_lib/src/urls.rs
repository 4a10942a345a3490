//! URL clean-up for harvested attributes.

use itchio_api::{DOMAIN, SITE_URL};
use url::Url;

/// Makes a harvested URL absolute and `https`.
///
/// Protocol-relative (`//host/x`) and `http://` forms are upgraded; relative
/// paths are joined to `base` (the page URL, or the site root when `base`
/// does not parse) and the result is upgraded too. Non-web schemes are
/// rejected.
pub fn absolutize(raw: &str, base: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw.starts_with('#') {
        return None;
    }
    if let Some(rest) = raw.strip_prefix("//") {
        return Some(format!("https://{}", rest));
    }
    if let Some(rest) = strip_prefix_ignore_case(raw, "http://") {
        return Some(format!("https://{}", rest));
    }
    if strip_prefix_ignore_case(raw, "https://").is_some() {
        return Some(raw.to_string());
    }

    let base = Url::parse(base).or_else(|_| Url::parse(SITE_URL)).ok()?;
    let mut joined = base.join(raw).ok()?;
    if !matches!(joined.scheme(), "http" | "https") {
        return None;
    }
    joined.set_scheme("https").ok()?;
    Some(joined.to_string())
}

/// Resolves a search-result href against the site that was searched.
///
/// Relative hrefs stay on `site_url` as configured, scheme and port
/// included, so candidates point back at the server that listed them.
/// Anything else goes through [`absolutize`].
pub fn join_site(raw: &str, site_url: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw.starts_with('#') || raw.starts_with("//") || Url::parse(raw).is_ok() {
        return absolutize(raw, site_url);
    }
    match Url::parse(site_url).and_then(|site| site.join(raw)) {
        Ok(joined) => Some(joined.to_string()),
        Err(_) => absolutize(raw, SITE_URL),
    }
}

fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let head = value.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &value[prefix.len()..])
}

/// Host of an absolute URL, lowercased.
pub fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_ascii_lowercase()))
}

/// True for `itch.io` and any `*.itch.io` host.
pub fn is_marketplace_url(url: &str) -> bool {
    match host_of(url) {
        Some(host) => host == DOMAIN || host.ends_with(&format!(".{}", DOMAIN)),
        None => url.contains(DOMAIN),
    }
}

const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".webp"];

/// True when the URL path ends in a recognized image extension.
pub fn has_image_extension(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or(url).to_ascii_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}
