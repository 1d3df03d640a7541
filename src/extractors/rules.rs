// src/extractors/rules.rs
//! Layout contracts of the Generation I dex pages.
//!
//! The pages carry no semantic markup, so every extractor leans on table
//! classes, header texts and row/column positions. They are collected here as
//! data so a layout change is a one-line edit with a failing test next to it.

use crate::extractors::document::{self, Document, Filter};
use crate::serebii::models::Stat;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::ElementRef;

// --- Classes ---
pub const DEX_TABLE_CLASS: &str = "dextable";
pub const INFO_CELL_CLASS: &str = "fooinfo";
pub const HEADER_CELL_CLASS: &str = "fooevo";

/// Region scanned by the last-resort name strategy.
pub const MAIN_CONTENT_SELECTOR: &str = "#content, main";
pub const SITE_LABEL: &str = "Serebii";

// --- Profile table (types) ---
/// Zero-based position of the profile table among `dextable` tables.
pub const PROFILE_TABLE_INDEX: usize = 1;
/// Row holding name/other names/number/type values.
pub const PROFILE_ROW_INDEX: usize = 1;
/// Column of that row holding the type icons.
pub const TYPE_COLUMN_INDEX: usize = 3;

// --- Icon and sprite paths ---
// Compiled once; patterns are constants so failure is a programming error.
pub static TYPE_ICON_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/pokedex-bw/type/([a-z]+)\.gif$").expect("Failed to compile TYPE_ICON_RE")
});
pub static DAMAGE_ICON_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/games/type/([a-z]+)\.gif$").expect("Failed to compile DAMAGE_ICON_RE")
});
pub static EVOLUTION_ICON_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"evoicon/l(\d+)\.png$").expect("Failed to compile EVOLUTION_ICON_RE")
});
pub static SPRITE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/(?:icon|sprites(?:/[a-z]+)?)/(\d{3})\.png$").expect("Failed to compile SPRITE_RE")
});

/// Locates a `class` table whose first row contains `header_marker`.
/// First match in document order wins.
#[derive(Debug, Clone, Copy)]
pub struct TableLocator {
    pub class: &'static str,
    pub header_marker: &'static str,
}

impl TableLocator {
    pub const fn dex(header_marker: &'static str) -> Self {
        Self { class: DEX_TABLE_CLASS, header_marker }
    }

    pub fn matches(&self, table: ElementRef<'_>) -> bool {
        document::rows(table)
            .first()
            .is_some_and(|header| document::text(*header, true).contains(self.header_marker))
    }

    pub fn locate<'a>(&self, doc: &'a Document) -> Option<ElementRef<'a>> {
        doc.find_all("table", Some(Filter::Class(self.class)))
            .into_iter()
            .find(|table| self.matches(*table))
    }

    pub fn locate_all<'a>(&self, doc: &'a Document) -> Vec<ElementRef<'a>> {
        doc.find_all("table", Some(Filter::Class(self.class)))
            .into_iter()
            .filter(|table| self.matches(*table))
            .collect()
    }
}

pub const STATS_TABLE: TableLocator = TableLocator::dex("Stats");
pub const DAMAGE_TABLE: TableLocator = TableLocator::dex("Damage Taken");
pub const LOCATIONS_TABLE: TableLocator = TableLocator::dex("Locations");
pub const EVOLUTION_TABLE: TableLocator = TableLocator::dex("Evolutionary Chain");
pub const LEVEL_UP_TABLE: TableLocator = TableLocator::dex("Level Up");
pub const TM_HM_TABLE: TableLocator = TableLocator::dex("TM & HM");

// --- Stats rows ---
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatRowKind {
    Base,
    Level50,
    Level100,
}

/// Which row of the stats table feeds which stat line, and where its values start.
#[derive(Debug, Clone, Copy)]
pub struct StatRowRule {
    pub kind: StatRowKind,
    pub marker: &'static str,
    pub exclude: Option<&'static str>,
    pub first_value_column: usize,
}

impl StatRowRule {
    pub fn matches(&self, row_text: &str) -> bool {
        row_text.contains(self.marker) && self.exclude.map_or(true, |ex| !row_text.contains(ex))
    }
}

/// Checked in order; the first matching rule claims a row.
pub const STAT_ROW_RULES: [StatRowRule; 3] = [
    StatRowRule { kind: StatRowKind::Base, marker: "Base Stats - Total", exclude: None, first_value_column: 1 },
    // "Max Stats" spans two rows; its own row carries an extra "Lv. 50" cell.
    StatRowRule { kind: StatRowKind::Level50, marker: "Max Stats", exclude: Some("Lv. 100"), first_value_column: 2 },
    StatRowRule { kind: StatRowKind::Level100, marker: "Lv. 100", exclude: None, first_value_column: 1 },
];

pub static BASE_TOTAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Total:\s*(\d+)").expect("Failed to compile BASE_TOTAL_RE")
});

// --- Damage Taken ---
/// Rows relative to the header row: icons first, multipliers right after.
#[derive(Debug, Clone, Copy)]
pub struct PairedRowsRule {
    pub table: TableLocator,
    pub label_row_offset: usize,
    pub value_row_offset: usize,
}

pub const DAMAGE_ROWS: PairedRowsRule = PairedRowsRule {
    table: DAMAGE_TABLE,
    label_row_offset: 1,
    value_row_offset: 2,
};

pub const ALLOWED_MULTIPLIERS: [f64; 6] = [0.0, 0.25, 0.5, 1.0, 2.0, 4.0];

// --- Locations ---
pub const LOCATION_PLACEHOLDERS: [&str; 2] = ["Game", "Location"];
pub const ALTERNATE_GAME_SEPARATOR: &str = "/";

// --- Moves ---
#[derive(Debug, Clone, Copy)]
pub struct MoveColumns {
    pub learned_at: usize,
    pub name: usize,
    pub move_type: usize,
    pub power: usize,
    pub accuracy: usize,
    pub pp: usize,
    pub effect: usize,
    pub min_cells: usize,
}

pub const MOVE_COLUMNS: MoveColumns = MoveColumns {
    learned_at: 0,
    name: 1,
    move_type: 2,
    power: 3,
    accuracy: 4,
    pp: 5,
    effect: 6,
    min_cells: 7,
};

/// Column-header texts that mark a header row rather than a move.
pub const MOVE_PLACEHOLDERS: [&str; 4] = ["Level", "TM/HM #", "TM/HM", "Attack Name"];

// --- Foreign names ---
/// Marker and output key per language, in page order.
pub const FOREIGN_NAME_MARKERS: [(&str, &str); 4] = [
    ("Japan:", "japanese"),
    ("French:", "french"),
    ("German:", "german"),
    ("Korean:", "korean"),
];
pub const ROMANIZED_JAPANESE_KEY: &str = "japanese_romaji";

// --- Physical ---
pub static HEIGHT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(\d+'\d+")(\d+(?:\.\d+)?m)$"#).expect("Failed to compile HEIGHT_RE")
});
pub static WEIGHT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?lbs)(\d+(?:\.\d+)?kg)$").expect("Failed to compile WEIGHT_RE")
});

// --- Profile labels ---
pub const CLASSIFICATION_LABEL: &str = "Classification";
pub const CAPTURE_RATE_LABEL: &str = "Capture Rate";

// --- Progression & effort values (page text) ---
const GROWTH_RATES: &str = "Medium Slow|Medium Fast|Fluctuating|Erratic|Fast|Slow";

/// Tried in order; the first to match wins.
pub static GROWTH_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        format!(r"([\d,]+) Points({})", GROWTH_RATES),
        format!(r"([\d,]+) Points ({})", GROWTH_RATES),
    ]
    .iter()
    .map(|pat| Regex::new(pat).expect("Failed to compile GROWTH_PATTERNS"))
    .collect()
});
pub static POINTS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([\d,]+)\s*Points").expect("Failed to compile POINTS_RE")
});
pub static GROWTH_RATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("({})", GROWTH_RATES)).expect("Failed to compile GROWTH_RATE_RE")
});

/// One pattern per stat, for layouts that scatter the rewards.
pub static EFFORT_VALUE_PATTERNS: Lazy<Vec<(Stat, Regex)>> = Lazy::new(|| {
    Stat::ALL
        .iter()
        .map(|stat| {
            let re = Regex::new(&format!(r"(\d+)\s*{}\s*Point", stat.label()))
                .expect("Failed to compile EFFORT_VALUE_PATTERNS");
            (*stat, re)
        })
        .collect()
});
/// All five rewards listed contiguously in dex order.
pub static EFFORT_VALUES_COMBINED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*HP\s*(\d+)\s*Attack\s*(\d+)\s*Defense\s*(\d+)\s*Special\s*(\d+)\s*Speed")
        .expect("Failed to compile EFFORT_VALUES_COMBINED_RE")
});

pub static LEADING_INT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+").expect("Failed to compile LEADING_INT_RE")
});

/// First run of digits in `text`.
pub fn leading_int(text: &str) -> Option<u32> {
    LEADING_INT_RE.find(text).and_then(|m| m.as_str().parse().ok())
}

/// `"grass"` -> `"Grass"`.
pub fn title_case(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
