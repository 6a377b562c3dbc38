//! Selector queries over a parsed page.
//!
//! A [`Page`] owns one parsed HTML document for as long as the builder that
//! created it lives. Every accessor takes an optional scope: `None` searches
//! the whole document, `Some(element)` searches only that element's
//! descendants. A selector that matches nothing yields `None` (or an empty
//! vector), never an error.

use crate::utils::collapse_whitespace;
use scraper::{ElementRef, Html, Node, Selector};

/// Elements whose boundaries separate words in rendered text.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main",
    "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Elements that never render as text.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "template", "noscript"];

/// Visible text of `element`: text nodes in order, with a space at `<br>`
/// and around block elements, whitespace collapsed and trimmed.
pub fn visible_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    push_text(element, &mut raw);
    collapse_whitespace(&raw)
}

fn push_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if HIDDEN_ELEMENTS.contains(&el.name()) => {}
            Node::Element(el) => {
                let block = BLOCK_ELEMENTS.contains(&el.name());
                if block {
                    out.push(' ');
                }
                if let Some(child_element) = ElementRef::wrap(child) {
                    push_text(child_element, out);
                }
                if block {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
}

/// A parsed HTML document with null-safe selector accessors.
#[derive(Debug, Clone)]
pub struct Page {
    doc: Html,
}

impl From<Html> for Page {
    fn from(doc: Html) -> Self {
        Self { doc }
    }
}

impl Page {
    /// Parse a full HTML document.
    pub fn parse(html: &str) -> Self {
        Self::from(Html::parse_document(html))
    }

    /// The underlying document.
    pub fn document(&self) -> &Html {
        &self.doc
    }

    /// First element matching `selector` inside `scope`, or inside the whole
    /// document when `scope` is `None`.
    pub fn first_match<'a>(
        &'a self,
        scope: Option<ElementRef<'a>>,
        selector: &Selector,
    ) -> Option<ElementRef<'a>> {
        match scope {
            Some(element) => element.select(selector).next(),
            None => self.doc.select(selector).next(),
        }
    }

    /// Visible text of the first match, whitespace collapsed and trimmed.
    pub fn text<'a>(
        &'a self,
        scope: Option<ElementRef<'a>>,
        selector: &Selector,
    ) -> Option<String> {
        self.first_match(scope, selector).map(visible_text)
    }

    /// Value of attribute `name` on the first match.
    ///
    /// Returns `None` only when nothing matches. A matched element without
    /// the attribute yields `Some("")`.
    pub fn attribute<'a>(
        &'a self,
        scope: Option<ElementRef<'a>>,
        selector: &Selector,
        name: &str,
    ) -> Option<String> {
        self.first_match(scope, selector)
            .map(|element| element.value().attr(name).unwrap_or_default().to_string())
    }

    /// Every element in the document matching `selector`, in document order.
    pub fn all_matches(&self, selector: &Selector) -> Vec<ElementRef<'_>> {
        self.doc.select(selector).collect()
    }
}
