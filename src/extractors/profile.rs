// src/extractors/profile.rs
use crate::extractors::document::{self, Document, Filter};
use crate::extractors::rules::{leading_int, CAPTURE_RATE_LABEL, CLASSIFICATION_LABEL, HEADER_CELL_CLASS};

#[derive(Debug, Default, PartialEq)]
pub struct Profile {
    pub classification: Option<String>,
    pub capture_rate: Option<u8>,
}

pub fn extract_profile(doc: &Document) -> Profile {
    Profile {
        classification: labelled_value(doc, CLASSIFICATION_LABEL),
        capture_rate: labelled_value(doc, CAPTURE_RATE_LABEL)
            .and_then(|v| leading_int(&v))
            .and_then(|n| u8::try_from(n).ok()),
    }
}

/// Value under a header cell: same column, next row.
fn labelled_value(doc: &Document, label: &str) -> Option<String> {
    let header = doc
        .find_all("td", Some(Filter::Class(HEADER_CELL_CLASS)))
        .into_iter()
        .find(|cell| document::text(*cell, true) == label)?;

    let header_row = header.parent().and_then(scraper::ElementRef::wrap)?;
    let column = document::cells(header_row).iter().position(|c| c.id() == header.id())?;
    let value_row = document::next_row(header_row)?;
    let value = document::text(*document::cells(value_row).get(column)?, true);
    (!value.is_empty()).then_some(value)
}
