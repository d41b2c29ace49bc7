// ABOUTME: Series standings extraction from the team-table layout.
// ABOUTME: Translates titled header labels and appends Year and Series columns.

use crate::columns::translate_label;
use crate::error::ExtractError;
use crate::models::{PageContext, RecordTable, SERIES_COLUMN, YEAR_COLUMN};
use crate::page::{Locator, Page};

use super::{
    cell_texts, check_unique_columns, check_width, header_titles, require_table, split_header,
};

const STANDINGS_TABLE: Locator<'static> = Locator::Class {
    tag: "table",
    class: "team-table",
};

/// Untitled leading columns of every standings row.
const LEADING_COLUMNS: [&str; 2] = ["Rank", "Team"];

pub(crate) fn extract_standings(
    page: &Page,
    context: &PageContext,
) -> Result<RecordTable, ExtractError> {
    let table = require_table(page, &STANDINGS_TABLE)?;
    let (header, body) = split_header(&table, "standings")?;

    let mut columns: Vec<String> = LEADING_COLUMNS.iter().map(|c| c.to_string()).collect();
    for label in header_titles(&header) {
        columns.push(translate_label(label)?.to_string());
    }
    let width = columns.len();
    columns.push(YEAR_COLUMN.to_string());
    columns.push(SERIES_COLUMN.to_string());
    check_unique_columns("standings", &columns)?;

    let mut out = RecordTable::new(context.kind, columns);
    for (idx, row) in body.iter().enumerate() {
        let mut values = cell_texts(row);
        check_width("standings", idx + 1, values.len(), width)?;
        values.push(context.year.clone());
        values.push(context.series.clone());
        out.push_row(values)?;
    }

    Ok(out)
}
