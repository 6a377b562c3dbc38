//! Declarative selector tables.
//!
//! A [`FieldRule`] pairs a CSS selector with what to read from its first
//! match: the element's text or one of its attributes. Builders group rules
//! into schemas so that a markup change on the site means editing a table
//! entry, not extraction code.

use crate::query::Page;
use scraper::{ElementRef, Selector};
use tracing::debug;

/// What to pull from the matched element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    Text,
    Attr(&'static str),
}

/// One field of a schema: selector plus extraction kind.
#[derive(Debug)]
pub struct FieldRule {
    css: String,
    selector: Selector,
    pick: Pick,
}

impl FieldRule {
    /// Read the text of the first element matching `css`.
    pub fn text(css: impl Into<String>) -> Self {
        Self::new(css.into(), Pick::Text)
    }

    /// Read attribute `name` of the first element matching `css`.
    pub fn attr(css: impl Into<String>, name: &'static str) -> Self {
        Self::new(css.into(), Pick::Attr(name))
    }

    fn new(css: String, pick: Pick) -> Self {
        let selector = compile(&css);
        Self { css, selector, pick }
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn pick(&self) -> Pick {
        self.pick
    }

    /// Run the rule against `page`, inside `scope` when given.
    pub fn extract<'a>(&self, page: &'a Page, scope: Option<ElementRef<'a>>) -> Option<String> {
        let value = match self.pick {
            Pick::Text => page.text(scope, &self.selector),
            Pick::Attr(name) => page.attribute(scope, &self.selector, name),
        };
        if value.is_none() {
            debug!(selector = %self.css, "Selector matched nothing");
        }
        value
    }
}

/// Compile a built-in selector. These are fixed strings, so a parse failure
/// is a programming error.
pub fn compile(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}

/// Raw, un-normalized values for the four fields every record carries.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image_link: Option<String>,
}

/// Rules for title, description, link and image link.
#[derive(Debug)]
pub struct EntrySchema {
    pub title: FieldRule,
    pub description: FieldRule,
    pub link: FieldRule,
    pub image_link: FieldRule,
}

impl EntrySchema {
    pub fn extract<'a>(&self, page: &'a Page, scope: Option<ElementRef<'a>>) -> RawEntry {
        RawEntry {
            title: self.title.extract(page, scope),
            description: self.description.extract(page, scope),
            link: self.link.extract(page, scope),
            image_link: self.image_link.extract(page, scope),
        }
    }

    /// All rules, for diagnostics and schema checks.
    pub fn rules(&self) -> [&FieldRule; 4] {
        [&self.title, &self.description, &self.link, &self.image_link]
    }
}

/// A repeated item: the container selector plus a schema scoped to it.
#[derive(Debug)]
pub struct ListSchema<S> {
    pub container: Selector,
    pub item: S,
}

impl<S> ListSchema<S> {
    pub fn new(container: &str, item: S) -> Self {
        Self {
            container: compile(container),
            item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HTML: &str = r#"
        <div class="card"><h4 class="name"> Otter </h4><a href="/otter">more</a></div>
        <div class="card"><h4 class="name">Hornbill</h4><a>more</a></div>
    "#;

    fn schema() -> EntrySchema {
        EntrySchema {
            title: FieldRule::text("h4.name"),
            description: FieldRule::text("p.rte"),
            link: FieldRule::attr("a", "href"),
            image_link: FieldRule::attr("img", "src"),
        }
    }

    #[test]
    fn test_rule_kinds() {
        let rule = FieldRule::attr("img", "src");
        assert_eq!(rule.css(), "img");
        assert_eq!(rule.pick(), Pick::Attr("src"));
        assert_eq!(FieldRule::text("p").pick(), Pick::Text);
    }

    #[test]
    fn test_entry_schema_extracts_per_scope() {
        let page = Page::parse(HTML);
        let list = ListSchema::new("div.card", schema());
        let cards = page.all_matches(&list.container);
        assert_eq!(cards.len(), 2);

        let first = list.item.extract(&page, Some(cards[0]));
        assert_eq!(first.title.as_deref(), Some("Otter"));
        assert_eq!(first.link.as_deref(), Some("/otter"));
        assert_eq!(first.description, None);
        assert_eq!(first.image_link, None);

        let second = list.item.extract(&page, Some(cards[1]));
        assert_eq!(second.title.as_deref(), Some("Hornbill"));
        // <a> present without href
        assert_eq!(second.link.as_deref(), Some(""));
    }

    #[test]
    fn test_document_scope_takes_first_match() {
        let page = Page::parse(HTML);
        let raw = schema().extract(&page, None);
        assert_eq!(raw.title.as_deref(), Some("Otter"));
    }

    #[test]
    #[should_panic(expected = "invalid built-in selector")]
    fn test_bad_selector_panics() {
        compile("div[");
    }
}
