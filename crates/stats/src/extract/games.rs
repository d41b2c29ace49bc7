// ABOUTME: Game results extraction from the table#games layout.
// ABOUTME: Reads the row data-time attribute and splits "Home vs Away" / "3 - 2" cells.

use std::collections::HashSet;

use crate::error::ExtractError;
use crate::models::{PageContext, RecordTable, SERIES_COLUMN, YEAR_COLUMN};
use crate::page::{Locator, Page};

use super::{require_table, split_header};

const GAMES_TABLE: Locator<'static> = Locator::Id {
    tag: "table",
    id: "games",
};

const GAME_COLUMNS: [&str; 8] = [
    "Index",
    "Time",
    "Home",
    "Away",
    "HomeGoals",
    "AwayGoals",
    YEAR_COLUMN,
    SERIES_COLUMN,
];

const INDEX_CELL: usize = 0;
const MATCHUP_CELL: usize = 3;
const SCORE_CELL: usize = 5;

pub(crate) fn extract_games(page: &Page, context: &PageContext) -> Result<RecordTable, ExtractError> {
    let table = require_table(page, &GAMES_TABLE)?;
    let (_header, body) = split_header(&table, "games")?;

    let columns = GAME_COLUMNS.iter().map(|c| c.to_string()).collect();
    let mut out = RecordTable::new(context.kind, columns);
    let mut seen = HashSet::new();

    for (idx, row) in body.iter().enumerate() {
        let line = idx + 1;
        let cells = row.cells();
        if cells.len() <= SCORE_CELL {
            return Err(ExtractError::extraction(format!(
                "games row {line} has {} cells, expected at least {}",
                cells.len(),
                SCORE_CELL + 1
            )));
        }

        let index = cells[INDEX_CELL].text();
        if !seen.insert(index.clone()) {
            return Err(ExtractError::extraction(format!(
                "duplicate game index {index:?} in games row {line}"
            )));
        }

        let time = row
            .attr("data-time")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                ExtractError::extraction(format!("games row {line} has no data-time attribute"))
            })?;

        let matchup = cells[MATCHUP_CELL].text();
        let (home, away) = split_composite(&matchup)?;
        let score = cells[SCORE_CELL].text();
        let (home_goals, away_goals) = split_composite(&score)?;

        out.push_row(vec![
            index,
            time.to_string(),
            home.to_string(),
            away.to_string(),
            home_goals.to_string(),
            away_goals.to_string(),
            context.year.clone(),
            context.series.clone(),
        ])?;
    }

    Ok(out)
}

/// Splits a `"<left> <separator> <right>"` cell into its outer tokens.
///
/// Used for both `"Tappara vs HIFK"` and `"3 - 2"`. The text must split on
/// whitespace into exactly three tokens; the middle one is not inspected.
pub fn split_composite(text: &str) -> Result<(&str, &str), ExtractError> {
    match text.split_whitespace().collect::<Vec<_>>().as_slice() {
        [left, _, right] => Ok((*left, *right)),
        tokens => Err(ExtractError::extraction(format!(
            "composite cell {text:?} splits into {} tokens, expected 3",
            tokens.len()
        ))),
    }
}
