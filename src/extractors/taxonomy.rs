// src/extractors/taxonomy.rs
use crate::extractors::document::{self, Document, Filter};
use crate::extractors::rules::{
    title_case, DEX_TABLE_CLASS, PROFILE_ROW_INDEX, PROFILE_TABLE_INDEX, TYPE_COLUMN_INDEX, TYPE_ICON_RE,
};
use scraper::ElementRef;

/// An entry has one or two types.
const MAX_TYPES: usize = 2;

/// Type labels from the profile table's type column, first-seen order, no repeats.
pub fn extract_types(doc: &Document) -> Vec<String> {
    let tables = doc.find_all("table", Some(Filter::Class(DEX_TABLE_CLASS)));
    let Some(table) = tables.get(PROFILE_TABLE_INDEX) else {
        return Vec::new();
    };
    let rows = document::rows(*table);
    let Some(row) = rows.get(PROFILE_ROW_INDEX) else {
        return Vec::new();
    };
    let mut labels = document::cells(*row)
        .get(TYPE_COLUMN_INDEX)
        .map(|cell| type_labels(*cell))
        .unwrap_or_default();
    if labels.len() > MAX_TYPES {
        tracing::debug!("Type column has {} icons, keeping the first {}", labels.len(), MAX_TYPES);
        labels.truncate(MAX_TYPES);
    }
    labels
}

/// Type labels for every type icon under `node`. Shared with the move tables.
pub fn type_labels(node: ElementRef<'_>) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for img in document::find_all_in(node, "img", None) {
        let Some(src) = document::attr(img, "src") else {
            continue;
        };
        if let Some(caps) = TYPE_ICON_RE.captures(src) {
            let label = title_case(&caps[1]);
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
    }
    labels
}
