// src/serebii/models.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The five Generation I stats, in the order the dex tables list them.
/// Declaration order drives `Ord`, which drives JSON key order in stat maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    Special,
    Speed,
}

impl Stat {
    pub const ALL: [Stat; 5] = [Stat::Hp, Stat::Attack, Stat::Defense, Stat::Special, Stat::Speed];

    /// Label used for this stat in page text.
    pub fn label(self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::Special => "Special",
            Stat::Speed => "Speed",
        }
    }
}

/// A full stat line: either all five stats or nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatLine(BTreeMap<Stat, u32>);

impl StatLine {
    pub fn from_values(values: [u32; 5]) -> Self {
        Self(Stat::ALL.into_iter().zip(values).collect())
    }

    pub fn get(&self, stat: Stat) -> Option<u32> {
        self.0.get(&stat).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An imperial/metric pair, kept as written on the page (e.g. `2'04"` / `0.7m`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    pub imperial: String,
    pub metric: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Physical {
    pub height: Option<Measurement>,
    pub weight: Option<Measurement>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    pub growth_rate: Option<String>,
    pub experience_points: Option<u32>,
}

/// Where an entry can be obtained: game label(s) and location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub game: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Evolution {
    pub level: u32,
    pub successor: String,
}

/// One learnable move. `learned_at` is the level (level-up list) or the TM/HM number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub learned_at: String,
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: Option<String>,
    pub power: String,
    pub accuracy: String,
    pub pp: String,
    pub effect: String,
    pub description: Option<String>,
}

/// The assembled record for one dex page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: Option<String>,
    pub types: Vec<String>,
    pub classification: Option<String>,
    pub physical: Physical,
    pub base_stats: StatLine,
    pub base_stat_total: Option<u32>,
    pub stats_lv50: StatLine,
    pub stats_lv100: StatLine,
    pub capture_rate: Option<u8>,
    pub progression: Progression,
    pub effort_values: BTreeMap<Stat, u32>,
    pub damage_taken: BTreeMap<String, f64>,
    pub foreign_names: BTreeMap<String, String>,
    pub locations: Vec<Location>,
    pub evolutions: Vec<Evolution>,
    pub level_up_moves: Vec<Move>,
    pub tm_moves: Vec<Move>,
}

impl CatalogEntry {
    /// An entry with every field at its zero value.
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            types: Vec::new(),
            classification: None,
            physical: Physical::default(),
            base_stats: StatLine::default(),
            base_stat_total: None,
            stats_lv50: StatLine::default(),
            stats_lv100: StatLine::default(),
            capture_rate: None,
            progression: Progression::default(),
            effort_values: BTreeMap::new(),
            damage_taken: BTreeMap::new(),
            foreign_names: BTreeMap::new(),
            locations: Vec::new(),
            evolutions: Vec::new(),
            level_up_moves: Vec::new(),
            tm_moves: Vec::new(),
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

/// Formats a dex number as the fixed-width identifier used in paths and records.
pub fn format_id(number: u16) -> String {
    format!("{:03}", number)
}
