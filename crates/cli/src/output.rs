// ABOUTME: JSON rendering and output file naming for extracted tables.
// ABOUTME: Default file names follow liiga_stats_<kind>_<YYYYmmdd_HHMMSS>.json.

use chrono::{DateTime, TimeZone};
use liiga_stats::{PageKind, RecordTable};

/// Serializes a table as pretty (default) or compact JSON.
pub fn render(table: &RecordTable, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(table)
    } else {
        serde_json::to_string_pretty(table)
    }
}

/// File name used by `--save` when no explicit output path is given.
pub fn default_output_name<Tz>(kind: PageKind, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("liiga_stats_{}_{}.json", kind, now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn default_name_has_kind_and_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(
            default_output_name(PageKind::GameResults, &now),
            "liiga_stats_games_20240309_070501.json"
        );
    }
}
