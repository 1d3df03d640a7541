// src/extractors/locations.rs
use crate::extractors::document::{self, Document};
use crate::extractors::rules::{ALTERNATE_GAME_SEPARATOR, LOCATIONS_TABLE, LOCATION_PLACEHOLDERS};
use crate::serebii::models::Location;
use std::collections::HashSet;

/// (game, location) pairs. Three-cell rows name two alternate games for one location.
pub fn extract_locations(doc: &Document) -> Vec<Location> {
    let mut locations = Vec::new();
    let Some(table) = LOCATIONS_TABLE.locate(doc) else {
        return locations;
    };

    let mut seen = HashSet::new();
    for row in document::rows(table) {
        let texts: Vec<String> = document::cells(row)
            .into_iter()
            .map(|cell| document::text(cell, true))
            .collect();

        let (game, location) = match texts.as_slice() {
            [game, location] => (game.clone(), location.clone()),
            [first, second, location] => (format!("{}{}{}", first, ALTERNATE_GAME_SEPARATOR, second), location.clone()),
            _ => continue,
        };

        if game.is_empty()
            || location.is_empty()
            || LOCATION_PLACEHOLDERS.contains(&game.as_str())
            || LOCATION_PLACEHOLDERS.contains(&location.as_str())
        {
            continue;
        }

        let record = Location { game, location };
        if seen.insert(record.clone()) {
            locations.push(record);
        }
    }
    locations
}
