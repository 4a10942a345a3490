//! Cascading selectors: ordered alternatives tried until one yields a value.

use crate::dom::Node;

/// Runs strategies in order and returns the first `Some`.
pub fn first_some<S: Copy, T>(scope: S, strategies: &[fn(S) -> Option<T>]) -> Option<T> {
    strategies.iter().find_map(|strategy| strategy(scope))
}

impl<'a> Node<'a> {
    /// For each selector in priority order, and each match in document order,
    /// returns the first value `extract` accepts.
    pub fn first_of<T>(
        &self,
        selectors: &[&str],
        extract: impl Fn(Node<'a>) -> Option<T>,
    ) -> Option<T> {
        selectors
            .iter()
            .find_map(|css| self.select_all(css).into_iter().find_map(&extract))
    }

    /// First node of the first selector that matches anything.
    pub fn select_first_of(&self, selectors: &[&str]) -> Option<Node<'a>> {
        selectors.iter().find_map(|css| self.select_first(css))
    }

    /// Node set of the first selector that matches anything.
    pub fn first_non_empty_set(&self, selectors: &[&str]) -> Vec<Node<'a>> {
        selectors
            .iter()
            .map(|css| self.select_all(css))
            .find(|nodes| !nodes.is_empty())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    const HTML: &str = r#"<html><body>
        <h1 class="other">  </h1>
        <h1 class="game_title">Second</h1>
        <ul class="a"></ul>
        <ul class="b"><li>x</li><li>y</li></ul>
        </body></html>"#;

    #[test]
    fn priority_order_beats_document_order() {
        let doc = Document::parse(HTML);
        let found = doc
            .root()
            .first_of(&["h1.game_title", "h1"], |n| Some(n.text()));
        assert_eq!(found.as_deref(), Some("Second"));
    }

    #[test]
    fn empty_results_fall_through() {
        let doc = Document::parse(HTML);
        let found = doc.root().first_of(&["h1.other", "h1"], |n| {
            Some(n.text()).filter(|t| !t.is_empty())
        });
        assert_eq!(found.as_deref(), Some("Second"));
    }

    #[test]
    fn first_non_empty_set_skips_misses() {
        let doc = Document::parse(HTML);
        let items = doc.root().first_non_empty_set(&["ul.a li", "ul.b li", "li"]);
        assert_eq!(items.len(), 2);
        assert!(doc.root().first_non_empty_set(&["table td"]).is_empty());
    }

    #[test]
    fn strategies_run_in_order() {
        fn none(_: u8) -> Option<&'static str> {
            None
        }
        fn small(n: u8) -> Option<&'static str> {
            (n < 10).then_some("small")
        }
        fn any(_: u8) -> Option<&'static str> {
            Some("any")
        }
        assert_eq!(first_some(3, &[none, small, any]), Some("small"));
        assert_eq!(first_some(30, &[none, small, any]), Some("any"));
        assert_eq!(first_some::<u8, &str>(30, &[none]), None);
    }
}
