// src/extractors/identity.rs
//! Name and identifier. The pages have no "this is the subject" marker, so the
//! name comes from an ordered list of heuristics, cheapest and most reliable first.

use crate::extractors::document::{self, Document};
use crate::extractors::rules::{MAIN_CONTENT_SELECTOR, SITE_LABEL};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::node::Node;

pub const DEFAULT_ID: &str = "001";

const TITLE_SEPARATOR: &str = " - ";

/// Category words the site appends to names in titles.
const TITLE_BOILERPLATE: [&str; 2] = ["Pokémon", "Pokemon"];

/// Substrings that disqualify a text node from being a name.
const NAME_STOPLIST: [&str; 14] = [
    "hp", "attack", "defense", "special", "speed", "lbs", "kg", "serebii", "pokédex", "stats",
    "total", "route", "gift", "scratch",
];

static TITLE_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\d+)").expect("Failed to compile TITLE_ID_RE"));

pub type NameStrategy = fn(&Document) -> Option<String>;

/// Tried in order; the first non-empty result wins.
pub const NAME_STRATEGIES: [(&str, NameStrategy); 3] = [
    ("title", name_from_title),
    ("heading", name_from_heading),
    ("content-scan", name_from_content),
];

/// Resolves the name, returning it together with the label of the strategy that found it.
pub fn extract_name(doc: &Document) -> Option<(String, &'static str)> {
    NAME_STRATEGIES
        .iter()
        .find_map(|(label, strategy)| strategy(doc).map(|name| (name, *label)))
}

/// Digits after the `#` in the title, padded to three places.
pub fn extract_id(doc: &Document) -> Option<String> {
    let title = doc.title()?;
    let digits = &TITLE_ID_RE.captures(&title)?[1];
    let number: u32 = digits.parse().ok()?;
    Some(format!("{:03}", number))
}

/// `"... - #025 - Pikachu"` -> `"Pikachu"`.
pub fn name_from_title(doc: &Document) -> Option<String> {
    let title = doc.title()?;
    if !title.contains('#') {
        return None;
    }
    let last = title.rsplit(TITLE_SEPARATOR).next()?;
    let name = TITLE_BOILERPLATE
        .iter()
        .fold(last.to_string(), |acc, word| acc.replace(word, ""));
    let name = name.trim();
    (!name.is_empty() && !name.contains('#')).then(|| name.to_string())
}

pub fn name_from_heading(doc: &Document) -> Option<String> {
    let heading = doc.find_first("h1", None)?;
    let text = document::text(heading, true);
    if text.is_empty() || text.contains('#') || text.contains(SITE_LABEL) {
        return None;
    }
    Some(text)
}

/// First text node under the main content region that looks like a name.
pub fn name_from_content(doc: &Document) -> Option<String> {
    let region = doc
        .find_first(MAIN_CONTENT_SELECTOR, None)
        .or_else(|| doc.find_first("body", None))?;

    region
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => Some(text.text.trim()),
            _ => None,
        })
        .find(|candidate| looks_like_name(candidate))
        .map(str::to_string)
}

fn looks_like_name(candidate: &str) -> bool {
    let len = candidate.chars().count();
    if !(3..20).contains(&len) {
        return false;
    }
    if !candidate.chars().next().is_some_and(char::is_alphabetic) {
        return false;
    }
    if candidate.chars().all(|c| c.is_ascii_digit()) || candidate.ends_with('-') {
        return false;
    }
    let lower = candidate.to_lowercase();
    !NAME_STOPLIST.iter().any(|stop| lower.contains(stop))
}
