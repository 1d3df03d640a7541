// src/extractors/progression.rs
//! Growth rate and effort values. These live in free text rather than fixed
//! cells, so they are matched against the flattened page text.

use crate::extractors::rules::{
    EFFORT_VALUES_COMBINED_RE, EFFORT_VALUE_PATTERNS, GROWTH_PATTERNS, GROWTH_RATE_RE, POINTS_RE,
};
use crate::serebii::models::{Progression, Stat};
use std::collections::BTreeMap;

pub fn extract_progression(page_text: &str) -> Progression {
    for re in GROWTH_PATTERNS.iter() {
        if let Some(caps) = re.captures(page_text) {
            return Progression {
                experience_points: parse_points(&caps[1]),
                growth_rate: Some(caps[2].to_string()),
            };
        }
    }

    // Points and label not adjacent: take the points, then the first label after them.
    let Some(points) = POINTS_RE.captures(page_text) else {
        return Progression::default();
    };
    let after = points.get(0).map_or(page_text.len(), |m| m.end());
    Progression {
        experience_points: parse_points(&points[1]),
        growth_rate: GROWTH_RATE_RE
            .find(&page_text[after..])
            .map(|m| m.as_str().to_string()),
    }
}

fn parse_points(raw: &str) -> Option<u32> {
    raw.replace(',', "").parse().ok()
}

/// Sparse stat -> reward map. The contiguous five-stat layout, when present,
/// overrides whatever the per-stat patterns found.
pub fn extract_effort_values(page_text: &str) -> BTreeMap<Stat, u32> {
    let mut values = BTreeMap::new();

    for (stat, re) in EFFORT_VALUE_PATTERNS.iter() {
        if let Some(value) = re.captures(page_text).and_then(|caps| caps[1].parse().ok()) {
            values.insert(*stat, value);
        }
    }

    if let Some(caps) = EFFORT_VALUES_COMBINED_RE.captures(page_text) {
        for (index, stat) in Stat::ALL.iter().enumerate() {
            if let Ok(value) = caps[index + 1].parse() {
                values.insert(*stat, value);
            }
        }
    }
    values
}
