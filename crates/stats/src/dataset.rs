// ABOUTME: Multi-page accumulation of record tables of one kind.
// ABOUTME: Concatenates yearly tables, taking the union of their columns in first-seen order.

use crate::error::ExtractError;
use crate::models::{PageKind, RecordTable};

/// Rows from several pages of the same kind, e.g. one standings table per season.
///
/// Older seasons lack some statistic columns (power play percentages, points
/// per game). Columns are merged by name in first-seen order and cells a page
/// did not provide are left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    kind: PageKind,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    pages: usize,
}

impl Dataset {
    pub fn new(kind: PageKind) -> Self {
        Self {
            kind,
            columns: Vec::new(),
            rows: Vec::new(),
            pages: 0,
        }
    }

    /// Appends every row of `table` after the rows already collected.
    ///
    /// Fails with an Extraction error if the table is of a different kind.
    pub fn push(&mut self, table: RecordTable) -> Result<(), ExtractError> {
        if table.kind() != self.kind {
            return Err(ExtractError::extraction(format!(
                "cannot add a {} table to a {} dataset",
                table.kind(),
                self.kind
            )));
        }

        let (_, columns, rows) = table.into_parts();
        if let Some(dup) = columns
            .iter()
            .enumerate()
            .find(|(i, c)| columns[..*i].contains(*c))
            .map(|(_, c)| c)
        {
            return Err(ExtractError::extraction(format!(
                "{} table repeats column {dup:?}",
                self.kind
            )));
        }
        let positions: Vec<usize> = columns.iter().map(|c| self.column_position(c)).collect();
        let width = self.columns.len();

        for row in rows {
            let mut merged = vec![String::new(); width];
            for (&pos, value) in positions.iter().zip(row) {
                merged[pos] = value;
            }
            self.rows.push(merged);
        }
        self.pages += 1;
        Ok(())
    }

    fn column_position(&mut self, name: &str) -> usize {
        if let Some(pos) = self.columns.iter().position(|c| c == name) {
            return pos;
        }
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.columns.len() - 1
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    /// Number of tables pushed so far.
    pub fn pages(&self) -> usize {
        self.pages
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Finishes accumulation, returning one combined table.
    pub fn into_table(self) -> RecordTable {
        RecordTable::from_parts(self.kind, self.columns, self.rows)
    }
}
