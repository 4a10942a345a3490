use url::Url;

use crate::error::ItchMetaError;

pub const MAX_SEARCH_LENGTH: usize = 200;
pub const MAX_URL_LENGTH: usize = 2048;

/// Bounds of the search result cap.
pub const MIN_RESULTS: u32 = 1;
pub const MAX_RESULTS: u32 = 100;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, ItchMetaError> {
    if input.len() > max_len {
        return Err(ItchMetaError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(ItchMetaError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a search/name string: enforce length, strip control chars, trim.
pub fn validate_search(input: &str) -> Result<String, ItchMetaError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate a game page URL given on the command line: absolute `http(s)`.
pub fn validate_page_url(input: &str) -> Result<String, ItchMetaError> {
    let trimmed = sanitize_text(input, MAX_URL_LENGTH)?;
    match Url::parse(&trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host_str().is_some() => {
            Ok(trimmed)
        }
        _ => Err(ItchMetaError::InvalidInput(format!(
            "'{}' is not an absolute http(s) URL",
            trimmed
        ))),
    }
}

/// Validate a result cap: must be within 1-100.
pub fn validate_max_results(value: u32) -> Result<u32, ItchMetaError> {
    if (MIN_RESULTS..=MAX_RESULTS).contains(&value) {
        Ok(value)
    } else {
        Err(ItchMetaError::InvalidInput(format!(
            "max results must be between {} and {}, got {}",
            MIN_RESULTS, MAX_RESULTS, value
        )))
    }
}

/// Clamp a result cap into 1-100.
pub fn clamp_max_results(value: u32) -> u32 {
    value.clamp(MIN_RESULTS, MAX_RESULTS)
}
