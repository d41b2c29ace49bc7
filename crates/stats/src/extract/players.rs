// ABOUTME: Player statistics extraction from the table#stats layout.
// ABOUTME: Keeps header titles verbatim, drops the row index cell, and appends Year.

use crate::error::ExtractError;
use crate::models::{PageContext, RecordTable, YEAR_COLUMN};
use crate::page::{Locator, Page};

use super::{
    cell_texts, check_unique_columns, check_width, header_titles, require_table, split_header,
};

const PLAYERS_TABLE: Locator<'static> = Locator::Id {
    tag: "table",
    id: "stats",
};

/// The name and team columns are untitled in the header row.
const LEADING_COLUMNS: [&str; 2] = ["Name", "Team"];

pub(crate) fn extract_players(
    page: &Page,
    context: &PageContext,
) -> Result<RecordTable, ExtractError> {
    let table = require_table(page, &PLAYERS_TABLE)?;
    let (header, body) = split_header(&table, "player stats")?;

    let mut columns: Vec<String> = LEADING_COLUMNS.iter().map(|c| c.to_string()).collect();
    columns.extend(header_titles(&header).into_iter().map(|t| t.trim().to_string()));
    let width = columns.len();
    columns.push(YEAR_COLUMN.to_string());
    check_unique_columns("player stats", &columns)?;

    let mut out = RecordTable::new(context.kind, columns);
    for (idx, row) in body.iter().enumerate() {
        let mut values = cell_texts(row);
        if values.is_empty() {
            return Err(ExtractError::extraction(format!(
                "player stats row {} has no cells",
                idx + 1
            )));
        }
        // first cell is the running row number
        values.remove(0);
        check_width("player stats", idx + 1, values.len(), width)?;
        values.push(context.year.clone());
        out.push_row(values)?;
    }

    Ok(out)
}
