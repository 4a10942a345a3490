//! Shared query infrastructure: the [`Query`] trait.

use url::Url;

use crate::Error;

/// Trait implemented by all query builders. Provides URL serialization.
pub trait Query {
    /// Path of the page this query targets, relative to the site root.
    fn path(&self) -> &'static str;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Builds the absolute URL for `query` against a site root.
pub fn query_url(base_url: &str, query: &impl Query) -> Result<Url, Error> {
    let base = format!("{}{}", base_url.trim_end_matches('/'), query.path());
    let url = Url::parse(&base).map_err(|e| {
        tracing::error!("Invalid URL constructed: {}", e);
        Error::InvalidUrl(e.to_string())
    })?;
    Ok(query.add_to_url(&url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchQuery;

    #[test]
    fn query_url_trims_base_slash() {
        let url = query_url("https://itch.io/", &SearchQuery::new("celeste")).unwrap();
        assert_eq!(url.as_str(), "https://itch.io/search?q=celeste");
    }

    #[test]
    fn query_url_rejects_bad_base() {
        let err = query_url("not a url", &SearchQuery::new("celeste")).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}
