// src/extractors/moves.rs
use crate::extractors::document::{self, Document};
use crate::extractors::rules::{TableLocator, LEVEL_UP_TABLE, MOVE_COLUMNS, MOVE_PLACEHOLDERS, TM_HM_TABLE};
use crate::extractors::taxonomy::type_labels;
use crate::serebii::models::Move;
use scraper::ElementRef;

#[derive(Debug, Default, PartialEq)]
pub struct Learnsets {
    pub level_up: Vec<Move>,
    pub tm_hm: Vec<Move>,
}

pub fn extract_moves(doc: &Document) -> Learnsets {
    Learnsets {
        level_up: moves_from(doc, LEVEL_UP_TABLE),
        tm_hm: moves_from(doc, TM_HM_TABLE),
    }
}

fn moves_from(doc: &Document, locator: TableLocator) -> Vec<Move> {
    locator
        .locate_all(doc)
        .into_iter()
        .flat_map(document::rows)
        .filter_map(parse_move_row)
        .collect()
}

fn parse_move_row(row: ElementRef<'_>) -> Option<Move> {
    let cells = document::cells(row);
    if cells.len() < MOVE_COLUMNS.min_cells {
        return None;
    }
    let cell_text = |i: usize| document::text(cells[i], true);

    let learned_at = cell_text(MOVE_COLUMNS.learned_at);
    let name = cell_text(MOVE_COLUMNS.name);
    if name.is_empty()
        || MOVE_PLACEHOLDERS.contains(&learned_at.as_str())
        || MOVE_PLACEHOLDERS.contains(&name.as_str())
    {
        return None;
    }

    Some(Move {
        learned_at,
        name,
        move_type: type_labels(cells[MOVE_COLUMNS.move_type]).into_iter().next(),
        power: cell_text(MOVE_COLUMNS.power),
        accuracy: cell_text(MOVE_COLUMNS.accuracy),
        pp: cell_text(MOVE_COLUMNS.pp),
        effect: cell_text(MOVE_COLUMNS.effect),
        description: continuation_text(row),
    })
}

/// Long description from the row after a move. That row only counts as a
/// continuation when it is not itself a move row.
fn continuation_text(row: ElementRef<'_>) -> Option<String> {
    let next = document::next_row(row)?;
    let cells = document::cells(next);
    if cells.is_empty() || cells.len() >= MOVE_COLUMNS.min_cells {
        return None;
    }
    let text = document::text(cells[0], true);
    (!text.is_empty()).then_some(text)
}
