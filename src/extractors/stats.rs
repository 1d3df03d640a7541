// src/extractors/stats.rs
use crate::extractors::document::{self, Document, Filter};
use crate::extractors::rules::{
    leading_int, StatRowKind, BASE_TOTAL_RE, HEIGHT_RE, INFO_CELL_CLASS, STATS_TABLE, STAT_ROW_RULES, WEIGHT_RE,
};
use crate::serebii::models::{Measurement, Physical, StatLine};
use regex::Regex;
use scraper::ElementRef;

#[derive(Debug, Default, PartialEq)]
pub struct StatsTable {
    pub base: StatLine,
    pub base_total: Option<u32>,
    pub level_50: StatLine,
    pub level_100: StatLine,
}

/// Height and weight from the first info cells holding an imperial+metric pair.
pub fn extract_physical(doc: &Document) -> Physical {
    let texts: Vec<String> = doc
        .find_all("td", Some(Filter::Class(INFO_CELL_CLASS)))
        .into_iter()
        .map(|cell| document::text(cell, true))
        .collect();

    Physical {
        height: texts.iter().find_map(|t| split_measurement(&HEIGHT_RE, t)),
        weight: texts.iter().find_map(|t| split_measurement(&WEIGHT_RE, t)),
    }
}

fn split_measurement(re: &Regex, text: &str) -> Option<Measurement> {
    let caps = re.captures(text)?;
    Some(Measurement {
        imperial: caps[1].to_string(),
        metric: caps[2].to_string(),
    })
}

/// Base, Lv. 50 and Lv. 100 stat lines from the first stats table.
/// Each row kind is taken from the first row it matches.
pub fn extract_stats(doc: &Document) -> StatsTable {
    let mut stats = StatsTable::default();
    let Some(table) = STATS_TABLE.locate(doc) else {
        tracing::debug!("No stats table found");
        return stats;
    };

    for row in document::rows(table) {
        let cells = document::cells(row);
        let row_text: String = cells.iter().map(|c| document::text(*c, true)).collect::<Vec<_>>().join(" ");
        let Some(rule) = STAT_ROW_RULES.iter().find(|rule| rule.matches(&row_text)) else {
            continue;
        };

        let target = match rule.kind {
            StatRowKind::Base => &mut stats.base,
            StatRowKind::Level50 => &mut stats.level_50,
            StatRowKind::Level100 => &mut stats.level_100,
        };
        if !target.is_empty() {
            continue;
        }
        *target = stat_line(&cells, rule.first_value_column);

        if rule.kind == StatRowKind::Base && stats.base_total.is_none() {
            stats.base_total = BASE_TOTAL_RE
                .captures(&row_text)
                .and_then(|caps| caps[1].parse().ok());
        }
    }
    stats
}

/// Five values starting at `first`; all or nothing.
fn stat_line(cells: &[ElementRef<'_>], first: usize) -> StatLine {
    let values: Option<Vec<u32>> = cells
        .iter()
        .skip(first)
        .take(5)
        .map(|cell| leading_int(&document::text(*cell, true)))
        .collect();
    match values.and_then(|v| <[u32; 5]>::try_from(v).ok()) {
        Some(values) => StatLine::from_values(values),
        None => StatLine::default(),
    }
}
