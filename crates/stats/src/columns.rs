// ABOUTME: Translation of Finnish standings column labels to canonical English names.
// ABOUTME: A closed StandingsLabel enum with a total lookup; unknown labels are an explicit error.

use crate::error::ExtractError;

/// Statistic columns recognized in the standings table header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandingsLabel {
    Matches,
    Wins,
    Draws,
    Losses,
    Goals,
    ConcededGoals,
    OvertimeWins,
    Points,
    PointsPerGame,
    PowerPlay,
    PenaltyKill,
}

impl StandingsLabel {
    pub const ALL: [StandingsLabel; 11] = [
        StandingsLabel::Matches,
        StandingsLabel::Wins,
        StandingsLabel::Draws,
        StandingsLabel::Losses,
        StandingsLabel::Goals,
        StandingsLabel::ConcededGoals,
        StandingsLabel::OvertimeWins,
        StandingsLabel::Points,
        StandingsLabel::PointsPerGame,
        StandingsLabel::PowerPlay,
        StandingsLabel::PenaltyKill,
    ];

    /// Looks up the label read from a header cell's `title` attribute.
    ///
    /// "Lisäpisteet" and "Jatkoaikavoitot" are both accepted for
    /// [`StandingsLabel::OvertimeWins`]; the site has used either title for
    /// that column depending on the season.
    pub fn from_source(label: &str) -> Option<Self> {
        let label = match label.trim() {
            "Ottelut" => StandingsLabel::Matches,
            "Voitot" => StandingsLabel::Wins,
            "Tasapelit" => StandingsLabel::Draws,
            "Häviöt" => StandingsLabel::Losses,
            "Tehdyt maalit" => StandingsLabel::Goals,
            "Päästetyt maalit" => StandingsLabel::ConcededGoals,
            "Lisäpisteet" | "Jatkoaikavoitot" => StandingsLabel::OvertimeWins,
            "Pisteet" => StandingsLabel::Points,
            "Pisteitä per ottelu" => StandingsLabel::PointsPerGame,
            "Ylivoimaprosentti" => StandingsLabel::PowerPlay,
            "Alivoimaprosentti" => StandingsLabel::PenaltyKill,
            _ => return None,
        };
        Some(label)
    }

    /// Canonical output column name.
    pub fn canonical(self) -> &'static str {
        match self {
            StandingsLabel::Matches => "Matches",
            StandingsLabel::Wins => "Wins",
            StandingsLabel::Draws => "Draws",
            StandingsLabel::Losses => "Losses",
            StandingsLabel::Goals => "Goals",
            StandingsLabel::ConcededGoals => "ConcededGoals",
            StandingsLabel::OvertimeWins => "OvertimeWins",
            StandingsLabel::Points => "Points",
            StandingsLabel::PointsPerGame => "PointsPerGame",
            StandingsLabel::PowerPlay => "PP",
            StandingsLabel::PenaltyKill => "PK",
        }
    }

    /// Every source label that translates to this column.
    pub fn source_labels(self) -> &'static [&'static str] {
        match self {
            StandingsLabel::Matches => &["Ottelut"],
            StandingsLabel::Wins => &["Voitot"],
            StandingsLabel::Draws => &["Tasapelit"],
            StandingsLabel::Losses => &["Häviöt"],
            StandingsLabel::Goals => &["Tehdyt maalit"],
            StandingsLabel::ConcededGoals => &["Päästetyt maalit"],
            StandingsLabel::OvertimeWins => &["Lisäpisteet", "Jatkoaikavoitot"],
            StandingsLabel::Points => &["Pisteet"],
            StandingsLabel::PointsPerGame => &["Pisteitä per ottelu"],
            StandingsLabel::PowerPlay => &["Ylivoimaprosentti"],
            StandingsLabel::PenaltyKill => &["Alivoimaprosentti"],
        }
    }
}

/// Translates a standings header label into its canonical column name.
///
/// # Returns
/// * `Ok(name)` - The label is in the recognized set
/// * `Err(ExtractError::UnmappedColumn)` - Any other label; there is no fallback name
pub fn translate_label(label: &str) -> Result<&'static str, ExtractError> {
    StandingsLabel::from_source(label)
        .map(StandingsLabel::canonical)
        .ok_or_else(|| ExtractError::unmapped_column(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_source_label_round_trips_to_its_variant() {
        for label in StandingsLabel::ALL {
            for source in label.source_labels() {
                assert_eq!(StandingsLabel::from_source(source), Some(label));
                assert_eq!(translate_label(source).unwrap(), label.canonical());
            }
        }
    }

    #[test]
    fn overtime_aliases_share_a_column() {
        assert_eq!(translate_label("Lisäpisteet").unwrap(), "OvertimeWins");
        assert_eq!(translate_label("Jatkoaikavoitot").unwrap(), "OvertimeWins");
    }

    #[test]
    fn canonical_names_are_unique() {
        let names: HashSet<&str> = StandingsLabel::ALL.iter().map(|l| l.canonical()).collect();
        assert_eq!(names.len(), StandingsLabel::ALL.len());
    }

    #[test]
    fn unknown_label_is_an_error_not_a_default() {
        let err = translate_label("Maalierotus").unwrap_err();
        assert_eq!(err, ExtractError::UnmappedColumn("Maalierotus".to_string()));
        // case matters
        assert!(translate_label("voitot").unwrap_err().is_unmapped_column());
        assert!(translate_label("").unwrap_err().is_unmapped_column());
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(translate_label("  Pisteet \n").unwrap(), "Points");
    }
}
