// ABOUTME: Kind-specific table extraction dispatch and shared row helpers.
// ABOUTME: Exposes extract() and scrape_page(); per-layout logic lives in the submodules.

//! Table extraction.
//!
//! Each page layout has its own routine:
//! - `standings` reads `table.team-table` and translates the titled headers.
//! - `players` reads `table#stats` and keeps the headers as-is.
//! - `games` reads `table#games` and splits the composite matchup/score cells.
//!
//! All routines are pure functions of the page and its context.

mod games;
mod players;
mod standings;

pub use games::split_composite;

use std::collections::HashSet;

use tracing::debug;

use crate::classify::classify;
use crate::error::ExtractError;
use crate::models::{PageContext, PageKind, RecordTable};
use crate::page::{Locator, Node, Page};

/// Extracts the record table for an already classified page.
///
/// # Returns
/// * `Ok(RecordTable)` - Every data row of the page's table plus context columns
/// * `Err(ExtractError)` - Missing table, malformed row, or unmapped standings label
pub fn extract(page: &Page, context: &PageContext) -> Result<RecordTable, ExtractError> {
    let table = match context.kind {
        PageKind::SeriesStandings => standings::extract_standings(page, context)?,
        PageKind::PlayerStats => players::extract_players(page, context)?,
        PageKind::GameResults => games::extract_games(page, context)?,
    };
    debug!(kind = %context.kind, year = %context.year, rows = table.len(), "extracted table");
    Ok(table)
}

/// Classifies the page and extracts its table in one step.
pub fn scrape_page(page: &Page) -> Result<RecordTable, ExtractError> {
    let context = classify(page)?;
    extract(page, &context)
}

/// Locates a required table or fails with a descriptive Extraction error.
fn require_table<'a>(page: &'a Page, locator: &Locator<'_>) -> Result<Node<'a>, ExtractError> {
    page.find(locator)
        .ok_or_else(|| ExtractError::extraction(format!("no table matching {locator:?}")))
}

/// Splits a table into its header row and data rows.
fn split_header<'a>(
    table: &Node<'a>,
    what: &str,
) -> Result<(Node<'a>, Vec<Node<'a>>), ExtractError> {
    let mut rows = table.rows();
    if rows.is_empty() {
        return Err(ExtractError::extraction(format!("{what} table has no rows")));
    }
    let header = rows.remove(0);
    Ok((header, rows))
}

/// Raw `title` attributes of the titled cells in a header row.
fn header_titles<'a>(header: &Node<'a>) -> Vec<&'a str> {
    header
        .titled_cells()
        .iter()
        .filter_map(|cell| cell.attr("title"))
        .collect()
}

/// Trimmed visible text of every data cell, left to right.
fn cell_texts(row: &Node<'_>) -> Vec<String> {
    row.cells().iter().map(Node::text).collect()
}

/// Fails unless a data row has exactly the expected number of values.
fn check_width(what: &str, row: usize, actual: usize, expected: usize) -> Result<(), ExtractError> {
    if actual != expected {
        return Err(ExtractError::extraction(format!(
            "{what} row {row} has {actual} cells, expected {expected}"
        )));
    }
    Ok(())
}

/// Fails if two output columns share a name, e.g. a header carrying both
/// aliases of one standings label.
fn check_unique_columns(what: &str, columns: &[String]) -> Result<(), ExtractError> {
    let mut seen = HashSet::new();
    match columns.iter().find(|name| !seen.insert(name.as_str())) {
        Some(name) => Err(ExtractError::extraction(format!(
            "{what} header yields column {name:?} more than once"
        ))),
        None => Ok(()),
    }
}
