// src/extractors/damage.rs
use crate::extractors::document::{self, Document};
use crate::extractors::rules::{title_case, ALLOWED_MULTIPLIERS, DAMAGE_ICON_RE, DAMAGE_ROWS};
use scraper::ElementRef;
use std::collections::BTreeMap;

/// What to do when the icon row and multiplier row differ in length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PairingPolicy {
    /// Pair up to the shorter row.
    #[default]
    Truncate,
    /// Treat the whole table as missing.
    Strict,
}

/// Type -> damage multiplier, paired by column between the icon and value rows.
pub fn extract_damage_taken(doc: &Document, policy: PairingPolicy) -> BTreeMap<String, f64> {
    let mut taken = BTreeMap::new();
    let Some(table) = DAMAGE_ROWS.table.locate(doc) else {
        tracing::debug!("No damage table found");
        return taken;
    };

    let rows = document::rows(table);
    let (Some(label_row), Some(value_row)) = (
        rows.get(DAMAGE_ROWS.label_row_offset),
        rows.get(DAMAGE_ROWS.value_row_offset),
    ) else {
        return taken;
    };

    let labels = document::cells(*label_row);
    let values = document::cells(*value_row);
    if labels.len() != values.len() {
        match policy {
            PairingPolicy::Truncate => {
                tracing::debug!("Damage rows differ ({} icons, {} values); truncating", labels.len(), values.len());
            }
            PairingPolicy::Strict => {
                tracing::warn!("Damage rows differ ({} icons, {} values); dropping table", labels.len(), values.len());
                return taken;
            }
        }
    }

    for (label_cell, value_cell) in labels.iter().zip(values.iter()) {
        let Some(label) = damage_type(*label_cell) else {
            continue;
        };
        match parse_multiplier(&document::text(*value_cell, true)) {
            Some(multiplier) => {
                taken.insert(label, multiplier);
            }
            None => tracing::debug!("Unrecognised multiplier for {}", label),
        }
    }
    taken
}

fn damage_type(cell: ElementRef<'_>) -> Option<String> {
    document::find_all_in(cell, "img", None)
        .into_iter()
        .filter_map(|img| document::attr(img, "src"))
        .find_map(|src| DAMAGE_ICON_RE.captures(src).map(|caps| title_case(&caps[1])))
}

/// `"*0.5"` -> `0.5`; only the fixed multiplier set is accepted.
fn parse_multiplier(raw: &str) -> Option<f64> {
    let number = raw.trim().trim_start_matches(['*', '×', 'x']).trim();
    let value: f64 = number.parse().ok()?;
    ALLOWED_MULTIPLIERS.contains(&value).then_some(value)
}
