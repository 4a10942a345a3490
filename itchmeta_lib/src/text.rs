//! Rich-text fragment to plain text.

use std::sync::LazyLock;

use regex::Regex;

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in regex {pattern}: {e}"))
}

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| re(r"(?i)<br\s*/?>"));
static PARAGRAPH_CLOSE: LazyLock<Regex> = LazyLock::new(|| re(r"(?i)</p\s*>"));
static BLOCK_CLOSE: LazyLock<Regex> = LazyLock::new(|| re(r"(?i)</(?:div|li)\s*>"));
static LIST_ITEM_OPEN: LazyLock<Regex> = LazyLock::new(|| re(r"(?i)<li(?:\s[^>]*)?>"));
static HEADING_OPEN: LazyLock<Regex> = LazyLock::new(|| re(r"(?i)<h[1-6](?:\s[^>]*)?>"));
static HEADING_CLOSE: LazyLock<Regex> = LazyLock::new(|| re(r"(?i)</h[1-6]\s*>"));
static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| re(r"<[^>]+>"));
static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| re(r"\n{3,}"));
static HORIZONTAL_SPACE: LazyLock<Regex> = LazyLock::new(|| re(r"[ \t]+"));

/// Converts an HTML fragment into plain text.
///
/// Block structure survives as newlines, list items get a `• ` bullet and
/// headings are set off by a blank line. Everything else is stripped and
/// entities are decoded. Never fails: all-markup input gives `""`.
pub fn html_to_text(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let text = LINE_BREAK.replace_all(html, "\n");
    let text = PARAGRAPH_CLOSE.replace_all(&text, "\n\n");
    let text = BLOCK_CLOSE.replace_all(&text, "\n");
    let text = LIST_ITEM_OPEN.replace_all(&text, "• ");
    let text = HEADING_OPEN.replace_all(&text, "\n\n");
    let text = HEADING_CLOSE.replace_all(&text, "\n");
    let text = ANY_TAG.replace_all(&text, "");
    let text = html_escape::decode_html_entities(&text);
    let text = BLANK_LINES.replace_all(&text, "\n\n");
    let text = HORIZONTAL_SPACE.replace_all(&text, " ");

    text.trim().to_string()
}
