// src/extractors/evolution.rs
use crate::extractors::document::{self, Document};
use crate::extractors::rules::{EVOLUTION_ICON_RE, EVOLUTION_TABLE, SPRITE_RE};
use crate::serebii::models::Evolution;
use scraper::ElementRef;
use std::collections::HashSet;

/// How many cells right of a level icon may hold the successor's sprite.
const SUCCESSOR_LOOKAHEAD: usize = 2;

/// Level-triggered successors of `own_id`, in chain order, without repeats.
pub fn extract_evolutions(doc: &Document, own_id: &str) -> Vec<Evolution> {
    let mut evolutions = Vec::new();
    let Some(table) = EVOLUTION_TABLE.locate(doc) else {
        return evolutions;
    };

    let mut seen = HashSet::new();
    for row in document::rows(table) {
        let cells = document::cells(row);
        for (index, cell) in cells.iter().enumerate() {
            let Some(level) = level_icon(*cell) else {
                continue;
            };
            let successor = cells
                .iter()
                .skip(index + 1)
                .take(SUCCESSOR_LOOKAHEAD)
                .find_map(|neighbour| sprite_id(*neighbour));
            let Some(successor) = successor else {
                tracing::debug!("Level {} icon without a successor sprite", level);
                continue;
            };
            if successor == own_id {
                continue;
            }
            let evolution = Evolution { level, successor };
            if seen.insert(evolution.clone()) {
                evolutions.push(evolution);
            }
        }
    }
    evolutions
}

fn level_icon(cell: ElementRef<'_>) -> Option<u32> {
    first_capture(cell, |src| {
        EVOLUTION_ICON_RE.captures(src).and_then(|caps| caps[1].parse().ok())
    })
}

fn sprite_id(cell: ElementRef<'_>) -> Option<String> {
    first_capture(cell, |src| SPRITE_RE.captures(src).map(|caps| caps[1].to_string()))
}

fn first_capture<T>(cell: ElementRef<'_>, pick: impl Fn(&str) -> Option<T>) -> Option<T> {
    document::find_all_in(cell, "img", None)
        .into_iter()
        .filter_map(|img| document::attr(img, "src"))
        .find_map(pick)
}
