// src/extractors/document.rs
//! Read-only query layer over a parsed page. Absence is never an error here:
//! every lookup returns `None` or an empty `Vec`.

use crate::utils::error::ExtractError;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// Extra predicate applied to elements matched by a selector.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub enum Filter<'f> {
    Class(&'f str),
    Attr(&'f str, &'f str),
    AttrMatches(&'f str, &'f Regex),
    TextContains(&'f str),
}

impl Filter<'_> {
    pub fn matches(&self, element: ElementRef<'_>) -> bool {
        match self {
            Filter::Class(name) => element.value().classes().any(|c| c == *name),
            Filter::Attr(name, value) => element.value().attr(name) == Some(*value),
            Filter::AttrMatches(name, re) => element.value().attr(name).is_some_and(|v| re.is_match(v)),
            Filter::TextContains(needle) => text(element, true).contains(needle),
        }
    }
}

pub struct Document {
    html: Html,
}

impl Document {
    /// Parses raw page bytes. Invalid UTF-8 is replaced, not rejected.
    pub fn parse(bytes: &[u8]) -> Result<Self, ExtractError> {
        let source = String::from_utf8_lossy(bytes);
        if source.trim().is_empty() {
            return Err(ExtractError::EmptyDocument);
        }
        Ok(Self { html: Html::parse_document(&source) })
    }

    pub fn find_first<'a>(&'a self, selector: &str, filter: Option<Filter<'_>>) -> Option<ElementRef<'a>> {
        let selector = Selector::parse(selector).ok()?;
        self.html
            .select(&selector)
            .find(|el| filter.map_or(true, |f| f.matches(*el)))
    }

    pub fn find_all<'a>(&'a self, selector: &str, filter: Option<Filter<'_>>) -> Vec<ElementRef<'a>> {
        let Ok(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.html
            .select(&selector)
            .filter(|el| filter.map_or(true, |f| f.matches(*el)))
            .collect()
    }

    /// Trimmed text of `<title>`, if any.
    pub fn title(&self) -> Option<String> {
        self.find_first("title", None)
            .map(|t| text(t, true))
            .filter(|t| !t.is_empty())
    }

    /// Untrimmed text of the whole document, in document order.
    pub fn page_text(&self) -> String {
        self.html.root_element().text().collect()
    }
}

/// Descendants of `node` matching `selector` (and `filter`).
pub fn find_all_in<'a>(node: ElementRef<'a>, selector: &str, filter: Option<Filter<'_>>) -> Vec<ElementRef<'a>> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };
    node.select(&selector)
        .filter(|el| filter.map_or(true, |f| f.matches(*el)))
        .collect()
}

/// Text content of `node`. When `trimmed`, every text piece is trimmed and the
/// non-empty pieces are joined with no separator.
pub fn text(node: ElementRef<'_>, trimmed: bool) -> String {
    if trimmed {
        node.text().map(str::trim).filter(|s| !s.is_empty()).collect()
    } else {
        node.text().collect()
    }
}

pub fn attr<'a>(node: ElementRef<'a>, name: &str) -> Option<&'a str> {
    node.value().attr(name)
}

/// Direct rows of a table, looking through thead/tbody/tfoot but not into nested tables.
pub fn rows<'a>(table: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    let mut out = Vec::new();
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "tr" => out.push(child),
            "thead" | "tbody" | "tfoot" => out.extend(
                child
                    .children()
                    .filter_map(ElementRef::wrap)
                    .filter(|el| el.value().name() == "tr"),
            ),
            _ => {}
        }
    }
    out
}

/// Direct td/th cells of a row.
pub fn cells<'a>(row: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "td" | "th"))
        .collect()
}

/// The next sibling element of `row`, if it is a row.
pub fn next_row<'a>(row: ElementRef<'a>) -> Option<ElementRef<'a>> {
    row.next_siblings()
        .filter_map(ElementRef::wrap)
        .next()
        .filter(|el| el.value().name() == "tr")
}
