// src/extractors/assembler.rs
use crate::extractors::damage::{extract_damage_taken, PairingPolicy};
use crate::extractors::document::Document;
use crate::extractors::evolution::extract_evolutions;
use crate::extractors::identity::{self, DEFAULT_ID};
use crate::extractors::locations::extract_locations;
use crate::extractors::moves::extract_moves;
use crate::extractors::names::extract_foreign_names;
use crate::extractors::profile::extract_profile;
use crate::extractors::progression::{extract_effort_values, extract_progression};
use crate::extractors::stats::{extract_physical, extract_stats};
use crate::extractors::taxonomy::extract_types;
use crate::serebii::models::CatalogEntry;

/// Runs every field extractor over one parsed page and merges the results.
/// Missing fields stay at their zero value; assembly itself never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordAssembler {
    pub damage_pairing: PairingPolicy,
}

impl RecordAssembler {
    pub fn new(damage_pairing: PairingPolicy) -> Self {
        Self { damage_pairing }
    }

    /// `expected_id` is the identifier the page was requested under. It always
    /// wins over the title, so one request can never produce another entry's record.
    pub fn assemble(&self, doc: &Document, expected_id: Option<&str>) -> CatalogEntry {
        let title_id = identity::extract_id(doc);
        let id = match (expected_id, title_id) {
            (Some(expected), Some(found)) => {
                if expected != found {
                    tracing::warn!("Page requested as #{} identifies itself as #{}", expected, found);
                }
                expected.to_string()
            }
            (Some(expected), None) => expected.to_string(),
            (None, found) => found.unwrap_or_else(|| DEFAULT_ID.to_string()),
        };

        let name = match identity::extract_name(doc) {
            Some((name, strategy)) => {
                tracing::debug!("#{} name '{}' via {} strategy", id, name, strategy);
                Some(name)
            }
            None => {
                tracing::debug!("#{} name not recoverable", id);
                None
            }
        };

        let page_text = doc.page_text();
        let profile = extract_profile(doc);
        let stats = extract_stats(doc);
        let learnsets = extract_moves(doc);

        let mut entry = CatalogEntry::empty(id);
        entry.name = name;
        entry.types = extract_types(doc);
        entry.classification = profile.classification;
        entry.physical = extract_physical(doc);
        entry.base_stats = stats.base;
        entry.base_stat_total = stats.base_total;
        entry.stats_lv50 = stats.level_50;
        entry.stats_lv100 = stats.level_100;
        entry.capture_rate = profile.capture_rate;
        entry.progression = extract_progression(&page_text);
        entry.effort_values = extract_effort_values(&page_text);
        entry.damage_taken = extract_damage_taken(doc, self.damage_pairing);
        entry.foreign_names = extract_foreign_names(doc);
        entry.locations = extract_locations(doc);
        entry.evolutions = extract_evolutions(doc, &entry.id);
        entry.level_up_moves = learnsets.level_up;
        entry.tm_moves = learnsets.tm_hm;

        if entry.types.is_empty() {
            tracing::debug!("#{} has no type icons", entry.id);
        }
        entry
    }
}
