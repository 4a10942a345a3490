use crate::dom::{Document, Node};
use crate::urls::{absolutize, has_image_extension};

const COVER_SELECTORS: &[&str] = &[
    "div[class='game_cover'] img",
    "div[class*='header'] img[class*='game_cover']",
    "img[class*='screenshot_image']",
];

const SCREENSHOT_LINK_SELECTORS: &[&str] = &[
    "div[class*='screenshot_container'] a",
    "div[class*='screenshot_list'] a",
    "a[class*='screenshot_link']",
];

const SCREENSHOT_IMG_SELECTOR: &str = "div[class*='screenshot'] img";

/// URL fragments of small fixed-size thumbnail renditions.
const THUMBNAIL_PATTERNS: &[&str] = &["/50x50", "/100x100"];

/// Cover image from the cover containers, else the `og:image` preview.
pub fn parse_cover_image(doc: &Document, page_url: &str) -> Option<String> {
    let root = doc.root();
    root.first_of(COVER_SELECTORS, |img| image_source(img, page_url))
        .or_else(|| {
            root.select_first("meta[property='og:image']")
                .and_then(|meta| meta.attr_non_empty("content"))
                .and_then(|url| absolutize(url, page_url))
        })
}

/// Screenshot URLs: linked full-size images first, then inline images that
/// are not thumbnails. Falls back to the cover when nothing was found.
pub fn parse_screenshots(doc: &Document, page_url: &str, cover: Option<&str>) -> Vec<String> {
    let root = doc.root();
    let mut screenshots: Vec<String> = Vec::new();

    for link in root.first_non_empty_set(SCREENSHOT_LINK_SELECTORS) {
        let Some(url) = link
            .attr_non_empty("href")
            .filter(|href| has_image_extension(href))
            .and_then(|href| absolutize(href, page_url))
        else {
            continue;
        };
        push_unique(&mut screenshots, url);
    }

    for img in root.select_all(SCREENSHOT_IMG_SELECTOR) {
        let Some(url) = image_source(img, page_url) else {
            continue;
        };
        if THUMBNAIL_PATTERNS.iter().any(|p| url.contains(p)) {
            continue;
        }
        push_unique(&mut screenshots, url);
    }

    if screenshots.is_empty() {
        if let Some(cover) = cover {
            screenshots.push(cover.to_string());
        }
    }
    screenshots
}

/// `src`, then the lazy-loading attribute, made absolute.
fn image_source(img: Node<'_>, page_url: &str) -> Option<String> {
    img.attr_non_empty("src")
        .and_then(|src| absolutize(src, page_url))
        .or_else(|| {
            img.attr_non_empty("data-lazy_src")
                .and_then(|src| absolutize(src, page_url))
        })
}

fn push_unique(urls: &mut Vec<String>, url: String) {
    if !urls.contains(&url) {
        urls.push(url);
    }
}
