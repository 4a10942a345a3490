//! User settings: TOML file, environment overrides, verification.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ItchMetaError;
use crate::validation::{clamp_max_results, MAX_RESULTS, MIN_RESULTS};

pub const ENV_CONFIG_PATH: &str = "ITCHMETA_CONFIG";
pub const ENV_MAX_SEARCH_RESULTS: &str = "ITCHMETA_MAX_SEARCH_RESULTS";
pub const ENV_PREFER_FIRST_RESULT: &str = "ITCHMETA_PREFER_FIRST_RESULT";
pub const ENV_PREFER_SOURCE_DESCRIPTION: &str = "ITCHMETA_PREFER_SOURCE_DESCRIPTION";
pub const ENV_DOWNLOAD_SCREENSHOTS: &str = "ITCHMETA_DOWNLOAD_SCREENSHOTS";

/// Resolution preferences. Read-only once a request starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Search result cap, 1-100.
    pub max_search_results: u32,
    /// Take the top search result without asking. Background requests
    /// always do.
    pub prefer_first_search_result: bool,
    /// Let the harvested description replace one the caller already has.
    pub prefer_source_description: bool,
    /// Expose screenshot URLs (and so a background image) at all.
    pub download_screenshots: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_search_results: 20,
            prefer_first_search_result: false,
            prefer_source_description: true,
            download_screenshots: true,
        }
    }
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self, ItchMetaError> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ItchMetaError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ItchMetaError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Apply `ITCHMETA_*` environment variables. Unparsable values are ignored.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(max) = lookup(ENV_MAX_SEARCH_RESULTS).and_then(|v| v.trim().parse().ok()) {
            self.max_search_results = max;
        }
        if let Some(flag) = lookup(ENV_PREFER_FIRST_RESULT).and_then(|v| parse_flag(&v)) {
            self.prefer_first_search_result = flag;
        }
        if let Some(flag) = lookup(ENV_PREFER_SOURCE_DESCRIPTION).and_then(|v| parse_flag(&v)) {
            self.prefer_source_description = flag;
        }
        if let Some(flag) = lookup(ENV_DOWNLOAD_SCREENSHOTS).and_then(|v| parse_flag(&v)) {
            self.download_screenshots = flag;
        }
        self
    }

    /// Every problem with the current values, or `Ok` when there are none.
    pub fn verify(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if !(MIN_RESULTS..=MAX_RESULTS).contains(&self.max_search_results) {
            errors.push(format!(
                "Max search results must be between {} and {}",
                MIN_RESULTS, MAX_RESULTS
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// The result cap, clamped into range even when unverified.
    pub fn search_limit(&self) -> u32 {
        clamp_max_results(self.max_search_results)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
