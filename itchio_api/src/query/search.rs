use url::Url;

use super::Query;

/// Free-text search against the itch.io search page (`/search?q=...`).
///
/// Only the first results page is ever requested.
#[derive(Clone, Debug, Default)]
pub struct SearchQuery {
    pub text: String,
}

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl Query for SearchQuery {
    fn path(&self) -> &'static str {
        "/search"
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().append_pair("q", &self.text);
        url
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    #[test]
    fn test_search_query() {
        let url = Url::parse("https://itch.io/search").unwrap();

        insta::assert_snapshot!(
            SearchQuery::new("celeste").add_to_url(&url).to_string(),
            @"https://itch.io/search?q=celeste"
        );

        insta::assert_snapshot!(
            SearchQuery::new("hollow knight & co").add_to_url(&url).to_string(),
            @"https://itch.io/search?q=hollow+knight+%26+co"
        );
    }

    #[test]
    fn test_search_path() {
        assert_eq!(SearchQuery::default().path(), "/search");
    }
}
