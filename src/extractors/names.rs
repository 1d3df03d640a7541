// src/extractors/names.rs
use crate::extractors::document::{self, Document, Filter};
use crate::extractors::rules::{FOREIGN_NAME_MARKERS, INFO_CELL_CLASS, ROMANIZED_JAPANESE_KEY};
use std::collections::BTreeMap;

/// Names in other languages from the single info cell listing all four.
pub fn extract_foreign_names(doc: &Document) -> BTreeMap<String, String> {
    let mut names = BTreeMap::new();

    let Some(text) = doc
        .find_all("td", Some(Filter::Class(INFO_CELL_CLASS)))
        .into_iter()
        .map(|cell| document::text(cell, true))
        .find(|text| FOREIGN_NAME_MARKERS.iter().all(|(marker, _)| text.contains(marker)))
    else {
        return names;
    };

    for (index, (marker, key)) in FOREIGN_NAME_MARKERS.iter().enumerate() {
        let Some(value) = segment_after(&text, marker) else {
            continue;
        };
        if index == 0 {
            let (romanized, native) = split_romanized(value);
            names.insert(ROMANIZED_JAPANESE_KEY.to_string(), romanized.to_string());
            names.insert(key.to_string(), native.to_string());
        } else {
            names.insert(key.to_string(), value.to_string());
        }
    }
    names
}

/// Text after `marker` up to the nearest following marker (or the end).
fn segment_after<'t>(text: &'t str, marker: &str) -> Option<&'t str> {
    let start = text.find(marker)? + marker.len();
    let rest = &text[start..];
    let end = FOREIGN_NAME_MARKERS
        .iter()
        .filter_map(|(other, _)| rest.find(other))
        .min()
        .unwrap_or(rest.len());
    Some(rest[..end].trim())
}

/// Splits at the first non-ASCII character: romanized prefix, native-script remainder.
fn split_romanized(value: &str) -> (&str, &str) {
    match value.char_indices().find(|(_, c)| !c.is_ascii()) {
        Some((at, _)) => (value[..at].trim(), value[at..].trim()),
        None => (value.trim(), ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::fixtures::BULBASAUR_PAGE;

    #[test]
    fn test_fixture_names() {
        let doc = Document::parse(BULBASAUR_PAGE.as_bytes()).unwrap();
        let names = extract_foreign_names(&doc);
        assert_eq!(names["japanese_romaji"], "Fushigidane");
        assert_eq!(names["japanese"], "フシギダネ");
        assert_eq!(names["french"], "Bulbizarre");
        assert_eq!(names["german"], "Bisasam");
        assert_eq!(names["korean"], "Isanghaessi 이상해씨");
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn test_romanized_only() {
        assert_eq!(split_romanized("Pikachu"), ("Pikachu", ""));
        assert_eq!(split_romanized(" Pikachu ピカチュウ"), ("Pikachu", "ピカチュウ"));
    }

    #[test]
    fn test_cell_needs_all_four_markers() {
        let html = r#"<table><tr><td class="fooinfo">Japan: Nyorozo French: Têtarte</td></tr></table>"#;
        let doc = Document::parse(html.as_bytes()).unwrap();
        assert!(extract_foreign_names(&doc).is_empty());
    }

    #[test]
    fn test_markers_out_of_order_still_delimit() {
        let html = r#"<table><tr><td class="fooinfo">French: Salamèche<br>Japan: Hitokage ヒトカゲ<br>Korean: Pairi<br>German: Glumanda</td></tr></table>"#;
        let doc = Document::parse(html.as_bytes()).unwrap();
        let names = extract_foreign_names(&doc);
        assert_eq!(names["japanese_romaji"], "Hitokage");
        assert_eq!(names["french"], "Salamèche");
        assert_eq!(names["korean"], "Pairi");
        assert_eq!(names["german"], "Glumanda");
    }
}
