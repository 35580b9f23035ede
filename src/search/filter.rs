//! Structured constraint filtering
//!
//! Every field of a [`FilterSet`] is optional and absence means "no
//! constraint on that dimension". A record is admitted only when all the
//! given constraints hold.

use super::SearchError;
use crate::catalog::{Difficulty, FileFormat, Genre, Period, Record};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Required file format(s) of a record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatRequirement {
    Midi,
    MusicXml,
    /// Record must provide both MIDI and MusicXML.
    Both,
}

impl FormatRequirement {
    fn is_met_by(&self, record: &Record) -> bool {
        match self {
            FormatRequirement::Midi => record.has_format(FileFormat::Midi),
            FormatRequirement::MusicXml => record.has_format(FileFormat::MusicXml),
            FormatRequirement::Both => {
                record.has_format(FileFormat::Midi) && record.has_format(FileFormat::MusicXml)
            }
        }
    }
}

impl FromStr for FormatRequirement {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "midi" => Ok(FormatRequirement::Midi),
            "musicxml" => Ok(FormatRequirement::MusicXml),
            "both" => Ok(FormatRequirement::Both),
            _ => Err(SearchError::InvalidInput(format!(
                "unknown file format requirement \"{s}\""
            ))),
        }
    }
}

/// Constraints a record must satisfy to appear in search results.
///
/// Allow-lists that are absent or empty impose no constraint. Numeric bounds
/// are inclusive, and `Some(0)` is a real bound, distinct from `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    pub difficulty: Option<Vec<Difficulty>>,
    pub genre: Option<Vec<Genre>>,
    /// Records without a period are rejected when this is set.
    pub period: Option<Vec<Period>>,
    pub tempo_min: Option<u32>,
    pub tempo_max: Option<u32>,
    pub duration_min: Option<f64>,
    pub duration_max: Option<f64>,
    pub file_format: Option<FormatRequirement>,
    pub min_quality: Option<f64>,
}

/// `Some(empty)` is treated the same as `None`.
fn allow_list<T>(list: &Option<Vec<T>>) -> Option<&[T]> {
    list.as_deref().filter(|l| !l.is_empty())
}

fn within<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    min.map_or(true, |min| value >= min) && max.map_or(true, |max| value <= max)
}

impl FilterSet {
    /// True when no dimension is constrained.
    pub fn is_empty(&self) -> bool {
        allow_list(&self.difficulty).is_none()
            && allow_list(&self.genre).is_none()
            && allow_list(&self.period).is_none()
            && self.tempo_min.is_none()
            && self.tempo_max.is_none()
            && self.duration_min.is_none()
            && self.duration_max.is_none()
            && self.file_format.is_none()
            && self.min_quality.is_none()
    }

    /// Rejects filters that can never be satisfied or are not numbers.
    pub fn validate(&self) -> Result<(), SearchError> {
        if let (Some(min), Some(max)) = (self.tempo_min, self.tempo_max) {
            if min > max {
                return Err(SearchError::InvalidInput(format!(
                    "tempo_min {min} is greater than tempo_max {max}"
                )));
            }
        }
        for (name, value) in [
            ("duration_min", self.duration_min),
            ("duration_max", self.duration_max),
            ("min_quality", self.min_quality),
        ] {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(SearchError::InvalidInput(format!(
                        "{name} must be a non-negative number, got {value}"
                    )));
                }
            }
        }
        if let (Some(min), Some(max)) = (self.duration_min, self.duration_max) {
            if min > max {
                return Err(SearchError::InvalidInput(format!(
                    "duration_min {min} is greater than duration_max {max}"
                )));
            }
        }
        Ok(())
    }
}

/// Whether `record` satisfies every constraint in `filters`.
pub fn passes(record: &Record, filters: &FilterSet) -> bool {
    if let Some(allowed) = allow_list(&filters.difficulty) {
        if !allowed.contains(&record.difficulty) {
            return false;
        }
    }

    if let Some(allowed) = allow_list(&filters.genre) {
        if !allowed.contains(&record.genre) {
            return false;
        }
    }

    if let Some(allowed) = allow_list(&filters.period) {
        match record.period {
            Some(period) if allowed.contains(&period) => {}
            _ => return false,
        }
    }

    if !within(record.tempo, filters.tempo_min, filters.tempo_max) {
        return false;
    }

    if !within(record.duration, filters.duration_min, filters.duration_max) {
        return false;
    }

    if let Some(requirement) = filters.file_format {
        if !requirement.is_met_by(record) {
            return false;
        }
    }

    if let Some(min_quality) = filters.min_quality {
        if record.quality_score < min_quality {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        let mut record = Record::new("1", "Für Elise", "Ludwig van Beethoven");
        record.genre = Genre::Classical;
        record.period = Some(Period::Romantic);
        record.difficulty = Difficulty::Beginner;
        record.tempo = 120;
        record.duration = 3.5;
        record.quality_score = 9.2;
        record.file_formats = [FileFormat::Midi, FileFormat::MusicXml].into();
        record
    }

    #[test]
    fn empty_filter_admits_everything() {
        let filters = FilterSet::default();
        assert!(filters.is_empty());
        assert!(passes(&sample(), &filters));
        assert!(passes(&Record::new("2", "x", "y"), &filters));
    }

    #[test]
    fn empty_allow_lists_impose_no_constraint() {
        let filters = FilterSet {
            difficulty: Some(vec![]),
            genre: Some(vec![]),
            period: Some(vec![]),
            ..Default::default()
        };
        assert!(filters.is_empty());
        assert!(passes(&Record::new("2", "x", "y"), &filters));
    }

    #[test]
    fn difficulty_allow_list() {
        let filters = FilterSet {
            difficulty: Some(vec![Difficulty::Beginner, Difficulty::Intermediate]),
            ..Default::default()
        };
        assert!(passes(&sample(), &filters));

        let filters = FilterSet {
            difficulty: Some(vec![Difficulty::Expert]),
            ..Default::default()
        };
        assert!(!passes(&sample(), &filters));
    }

    #[test]
    fn genre_allow_list() {
        let filters = FilterSet {
            genre: Some(vec![Genre::Jazz, Genre::Classical]),
            ..Default::default()
        };
        assert!(passes(&sample(), &filters));

        let filters = FilterSet {
            genre: Some(vec![Genre::Game]),
            ..Default::default()
        };
        assert!(!passes(&sample(), &filters));
    }

    #[test]
    fn period_filter_rejects_records_without_period() {
        let filters = FilterSet {
            period: Some(vec![Period::Romantic]),
            ..Default::default()
        };
        assert!(passes(&sample(), &filters));

        let mut no_period = sample();
        no_period.period = None;
        assert!(!passes(&no_period, &filters));

        let filters = FilterSet {
            period: Some(vec![Period::Baroque]),
            ..Default::default()
        };
        assert!(!passes(&sample(), &filters));
    }

    #[test]
    fn tempo_bounds_are_inclusive() {
        let filters = FilterSet {
            tempo_min: Some(120),
            tempo_max: Some(120),
            ..Default::default()
        };
        assert!(passes(&sample(), &filters));

        let filters = FilterSet {
            tempo_min: Some(121),
            ..Default::default()
        };
        assert!(!passes(&sample(), &filters));

        let filters = FilterSet {
            tempo_max: Some(119),
            ..Default::default()
        };
        assert!(!passes(&sample(), &filters));
    }

    #[test]
    fn duration_bounds() {
        let filters = FilterSet {
            duration_max: Some(5.0),
            ..Default::default()
        };
        assert!(passes(&sample(), &filters));

        let filters = FilterSet {
            duration_min: Some(4.0),
            ..Default::default()
        };
        assert!(!passes(&sample(), &filters));
    }

    #[test]
    fn zero_bounds_are_real_constraints() {
        // A zero upper bound only admits zero values, unlike an absent bound.
        let filters = FilterSet {
            tempo_max: Some(0),
            ..Default::default()
        };
        assert!(!passes(&sample(), &filters));
        assert!(passes(&Record::new("2", "x", "y"), &filters));

        let filters = FilterSet {
            duration_max: Some(0.0),
            ..Default::default()
        };
        assert!(!passes(&sample(), &filters));

        // A zero quality floor admits every valid record.
        let filters = FilterSet {
            min_quality: Some(0.0),
            ..Default::default()
        };
        assert!(!filters.is_empty());
        assert!(passes(&Record::new("2", "x", "y"), &filters));
    }

    #[test]
    fn file_format_requirements() {
        let mut midi_only = sample();
        midi_only.file_formats = [FileFormat::Midi].into();

        let both = FilterSet {
            file_format: Some(FormatRequirement::Both),
            ..Default::default()
        };
        assert!(passes(&sample(), &both));
        assert!(!passes(&midi_only, &both));

        let midi = FilterSet {
            file_format: Some(FormatRequirement::Midi),
            ..Default::default()
        };
        assert!(passes(&midi_only, &midi));

        let xml = FilterSet {
            file_format: Some(FormatRequirement::MusicXml),
            ..Default::default()
        };
        assert!(!passes(&midi_only, &xml));
        assert!(passes(&sample(), &xml));
    }

    #[test]
    fn min_quality_threshold() {
        let filters = FilterSet {
            min_quality: Some(9.2),
            ..Default::default()
        };
        assert!(passes(&sample(), &filters));

        let filters = FilterSet {
            min_quality: Some(9.3),
            ..Default::default()
        };
        assert!(!passes(&sample(), &filters));
    }

    #[test]
    fn all_dimensions_are_combined_with_and() {
        let filters = FilterSet {
            difficulty: Some(vec![Difficulty::Beginner]),
            genre: Some(vec![Genre::Classical]),
            duration_max: Some(5.0),
            min_quality: Some(9.5),
            ..Default::default()
        };
        assert!(!passes(&sample(), &filters));
    }

    #[test]
    fn validate_rejects_inverted_ranges() {
        let filters = FilterSet {
            tempo_min: Some(140),
            tempo_max: Some(60),
            ..Default::default()
        };
        assert!(matches!(
            filters.validate(),
            Err(SearchError::InvalidInput(_))
        ));

        let filters = FilterSet {
            duration_min: Some(10.0),
            duration_max: Some(2.0),
            ..Default::default()
        };
        assert!(filters.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_numbers() {
        let filters = FilterSet {
            min_quality: Some(f64::NAN),
            ..Default::default()
        };
        assert!(filters.validate().is_err());

        let filters = FilterSet {
            duration_min: Some(-1.0),
            ..Default::default()
        };
        assert!(filters.validate().is_err());

        assert!(FilterSet::default().validate().is_ok());
    }

    #[test]
    fn parses_format_requirement() {
        assert_eq!("both".parse::<FormatRequirement>().unwrap(), FormatRequirement::Both);
        assert_eq!(
            "MusicXML".parse::<FormatRequirement>().unwrap(),
            FormatRequirement::MusicXml
        );
        assert!("pdf".parse::<FormatRequirement>().is_err());
    }

    #[test]
    fn deserializes_from_json() {
        let filters: FilterSet = serde_json::from_str(
            r#"{"difficulty": ["beginner"], "file_format": "both", "min_quality": 0}"#,
        )
        .unwrap();
        assert_eq!(filters.difficulty, Some(vec![Difficulty::Beginner]));
        assert_eq!(filters.file_format, Some(FormatRequirement::Both));
        assert_eq!(filters.min_quality, Some(0.0));
        assert_eq!(filters.tempo_min, None);
    }
}
