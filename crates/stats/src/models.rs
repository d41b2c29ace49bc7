// ABOUTME: Rust models for classified pages and extracted record tables.
// ABOUTME: Defines PageKind, PageContext, and RecordTable with a row-object JSON shape.

use std::fmt;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::error::ExtractError;

/// Column carrying the season start year, appended to every kind.
pub const YEAR_COLUMN: &str = "Year";
/// Column carrying the series token, appended to standings and game results.
pub const SERIES_COLUMN: &str = "Series";

/// The three page layouts the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    /// Team standings table (`/tilastot/<season>/<series>/joukkueet/`).
    SeriesStandings,
    /// Player statistics table (`/tilastot/<season>/<series>/pelaajat/`).
    PlayerStats,
    /// Game results list (`/ottelut/<season>/<series>/`).
    GameResults,
}

impl PageKind {
    pub const ALL: [PageKind; 3] = [
        PageKind::SeriesStandings,
        PageKind::PlayerStats,
        PageKind::GameResults,
    ];

    /// Maps the subsection token of a `tilastot` URL to a kind.
    pub fn from_stats_subsection(token: &str) -> Option<Self> {
        match token {
            "joukkueet" => Some(PageKind::SeriesStandings),
            "pelaajat" => Some(PageKind::PlayerStats),
            _ => None,
        }
    }

    /// Short name used in output file names and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            PageKind::SeriesStandings => "standings",
            PageKind::PlayerStats => "players",
            PageKind::GameResults => "games",
        }
    }

    /// Whether tables of this kind carry the `Series` context column.
    pub fn has_series_column(self) -> bool {
        !matches!(self, PageKind::PlayerStats)
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Context derived once per page from its canonical URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContext {
    /// Season start year, always four ASCII digits.
    pub year: String,
    /// Series token, e.g. `runkosarja` for the regular season.
    pub series: String,
    pub kind: PageKind,
}

/// An ordered table of string records with a fixed column list.
///
/// Rows are only appended while a page is being extracted (or while a
/// [`Dataset`](crate::Dataset) is accumulated); callers receive it read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTable {
    kind: PageKind,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RecordTable {
    pub(crate) fn new(kind: PageKind, columns: Vec<String>) -> Self {
        Self {
            kind,
            columns,
            rows: Vec::new(),
        }
    }

    pub(crate) fn from_parts(kind: PageKind, columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            kind,
            columns,
            rows,
        }
    }

    /// Appends a row, rejecting it if its width differs from the column list.
    pub(crate) fn push_row(&mut self, row: Vec<String>) -> Result<(), ExtractError> {
        if row.len() != self.columns.len() {
            return Err(ExtractError::extraction(format!(
                "row has {} values but the {} table has {} columns",
                row.len(),
                self.kind,
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub(crate) fn into_parts(self) -> (PageKind, Vec<String>, Vec<Vec<String>>) {
        (self.kind, self.columns, self.rows)
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by its canonical name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All values of one column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// Single cell lookup by row position and column name.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| r[idx].as_str())
    }

    /// Iterates rows as `(column, value)` records.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(move |values| Record {
            columns: &self.columns,
            values,
        })
    }
}

/// Borrowed view of one table row paired with its column names.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    columns: &'a [String],
    values: &'a [String],
}

impl<'a> Record<'a> {
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|idx| self.values[idx].as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// Serializes as `{kind, columns, rows: [{column: value}], total_rows}` with
/// row keys kept in column order.
impl Serialize for RecordTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let records: Vec<Record<'_>> = self.records().collect();
        let mut state = serializer.serialize_struct("RecordTable", 4)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("columns", &self.columns)?;
        state.serialize_field("rows", &records)?;
        state.serialize_field("total_rows", &self.rows.len())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> RecordTable {
        let mut table = RecordTable::new(
            PageKind::PlayerStats,
            vec!["Name".into(), "Team".into(), YEAR_COLUMN.into()],
        );
        table
            .push_row(vec!["Jari Kurri".into(), "Jokerit".into(), "1980".into()])
            .unwrap();
        table
    }

    #[test]
    fn push_row_rejects_wrong_width() {
        let mut table = sample();
        let err = table.push_row(vec!["only".into()]).unwrap_err();
        assert!(err.is_extraction());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn lookup_by_column_name() {
        let table = sample();
        assert_eq!(table.get(0, "Team"), Some("Jokerit"));
        assert_eq!(table.column("Year"), Some(vec!["1980"]));
        assert_eq!(table.get(0, "Missing"), None);
        assert_eq!(table.records().next().unwrap().get("Name"), Some("Jari Kurri"));
    }

    #[test]
    fn serializes_rows_as_ordered_objects() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"player_stats","columns":["Name","Team","Year"],"rows":[{"Name":"Jari Kurri","Team":"Jokerit","Year":"1980"}],"total_rows":1}"#
        );
    }

    #[test]
    fn only_player_stats_skip_series() {
        assert!(PageKind::SeriesStandings.has_series_column());
        assert!(PageKind::GameResults.has_series_column());
        assert!(!PageKind::PlayerStats.has_series_column());
    }
}
