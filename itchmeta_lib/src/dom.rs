//! Minimal document-query layer over `scraper`.
//!
//! Field parsers only see [`Document`] and [`Node`]: node kind, attribute
//! lookup, text, and descendant search by CSS selector or predicate.

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// The document element (`<html>`).
    pub fn root(&self) -> Node<'_> {
        Node {
            el: self.html.root_element(),
        }
    }
}

/// Borrowed handle to one element of a [`Document`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    el: ElementRef<'a>,
}

impl<'a> Node<'a> {
    /// Lowercase tag name.
    pub fn tag(&self) -> &'a str {
        self.el.value().name()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.el.value().attr(name)
    }

    /// Attribute value trimmed, `None` when missing or blank.
    pub fn attr_non_empty(&self, name: &str) -> Option<&'a str> {
        self.attr(name).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.el.value().classes().any(|c| c == class)
    }

    /// All descendant text, entities decoded, trimmed.
    pub fn text(&self) -> String {
        self.el.text().collect::<String>().trim().to_string()
    }

    /// Text of direct text children only, trimmed.
    pub fn own_text(&self) -> String {
        self.el
            .children()
            .filter_map(|child| child.value().as_text())
            .map(|t| &**t)
            .collect::<String>()
            .trim()
            .to_string()
    }

    pub fn inner_html(&self) -> String {
        self.el.inner_html()
    }

    /// Element children in document order.
    pub fn children(&self) -> Vec<Node<'a>> {
        self.el
            .children()
            .filter_map(ElementRef::wrap)
            .map(|el| Node { el })
            .collect()
    }

    /// Descendants matching a CSS selector, in document order.
    pub fn select_all(&self, css: &str) -> Vec<Node<'a>> {
        let Some(selector) = parse_selector(css) else {
            return Vec::new();
        };
        self.el.select(&selector).map(|el| Node { el }).collect()
    }

    pub fn select_first(&self, css: &str) -> Option<Node<'a>> {
        let selector = parse_selector(css)?;
        self.el.select(&selector).next().map(|el| Node { el })
    }

    /// Descendants (excluding self) accepted by a predicate, in document order.
    pub fn find_all(&self, predicate: impl Fn(&Node<'a>) -> bool) -> Vec<Node<'a>> {
        self.el
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .map(|el| Node { el })
            .filter(|node| predicate(node))
            .collect()
    }
}

fn parse_selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::debug!("Ignoring invalid selector {:?}: {:?}", css, e);
            None
        }
    }
}
