use crate::search::SearchError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Classical,
    Pop,
    Jazz,
    Rock,
    Folk,
    Game,
    Movie,
    Hymn,
    Other,
}

impl Genre {
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Classical => "classical",
            Genre::Pop => "pop",
            Genre::Jazz => "jazz",
            Genre::Rock => "rock",
            Genre::Folk => "folk",
            Genre::Game => "game",
            Genre::Movie => "movie",
            Genre::Hymn => "hymn",
            Genre::Other => "other",
        }
    }
}

impl Default for Genre {
    fn default() -> Self {
        Genre::Other
    }
}

impl FromStr for Genre {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classical" => Ok(Genre::Classical),
            "pop" => Ok(Genre::Pop),
            "jazz" => Ok(Genre::Jazz),
            "rock" => Ok(Genre::Rock),
            "folk" => Ok(Genre::Folk),
            "game" => Ok(Genre::Game),
            "movie" => Ok(Genre::Movie),
            "hymn" => Ok(Genre::Hymn),
            "other" => Ok(Genre::Other),
            _ => Err(SearchError::InvalidInput(format!("unknown genre \"{s}\""))),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Baroque,
    Classical,
    Romantic,
    Modern,
    Contemporary,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Baroque => "baroque",
            Period::Classical => "classical",
            Period::Romantic => "romantic",
            Period::Modern => "modern",
            Period::Contemporary => "contemporary",
        }
    }
}

impl FromStr for Period {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "baroque" => Ok(Period::Baroque),
            "classical" => Ok(Period::Classical),
            "romantic" => Ok(Period::Romantic),
            "modern" => Ok(Period::Modern),
            "contemporary" => Ok(Period::Contemporary),
            _ => Err(SearchError::InvalidInput(format!("unknown period \"{s}\""))),
        }
    }
}

/// Playing difficulty, ordered from easiest to hardest.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner = 1,
    Intermediate = 2,
    Advanced = 3,
    Expert = 4,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Expert => "expert",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Intermediate
    }
}

impl FromStr for Difficulty {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(SearchError::InvalidInput(format!(
                "unknown difficulty \"{s}\""
            ))),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FileFormat {
    #[serde(rename = "midi")]
    Midi,
    #[serde(rename = "musicxml")]
    MusicXml,
}

impl FileFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Midi => "midi",
            FileFormat::MusicXml => "musicxml",
        }
    }
}

impl FromStr for FileFormat {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "midi" => Ok(FileFormat::Midi),
            "musicxml" => Ok(FileFormat::MusicXml),
            _ => Err(SearchError::InvalidInput(format!(
                "unknown file format \"{s}\""
            ))),
        }
    }
}

macro_rules! display_as_str {
    ($($t:ty),*) => {
        $(impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Genre, Period, Difficulty, FileFormat);

/// Metadata of one score file in the catalog.
///
/// Records are produced by ingestion and handed to the search functions as
/// an immutable snapshot; the search core never mutates them.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Record {
    pub id: String,
    pub title: String,
    pub composer: String,
    #[serde(default)]
    pub genre: Genre,
    #[serde(default)]
    pub period: Option<Period>,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Beats per minute.
    #[serde(default)]
    pub tempo: u32,
    /// Minutes.
    #[serde(default)]
    pub duration: f64,
    /// 0-10
    #[serde(default)]
    pub quality_score: f64,
    /// Notes per second.
    #[serde(default)]
    pub note_density: f64,
    #[serde(default)]
    pub download_count: u64,
    /// 0-5
    #[serde(default)]
    pub user_rating: f64,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub file_formats: BTreeSet<FileFormat>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub date_added: DateTime<Utc>,
}

impl Record {
    pub const MAX_QUALITY_SCORE: f64 = 10.0;
    pub const MAX_USER_RATING: f64 = 5.0;

    /// Creates a record with the same defaults ingestion applies to missing fields.
    pub fn new<I, T, C>(id: I, title: T, composer: C) -> Record
    where
        I: Into<String>,
        T: Into<String>,
        C: Into<String>,
    {
        Record {
            id: id.into(),
            title: title.into(),
            composer: composer.into(),
            genre: Genre::default(),
            period: None,
            difficulty: Difficulty::default(),
            tempo: 0,
            duration: 0.0,
            quality_score: 0.0,
            note_density: 0.0,
            download_count: 0,
            user_rating: 0.0,
            tags: BTreeSet::new(),
            file_formats: BTreeSet::new(),
            source: String::new(),
            date_added: DateTime::<Utc>::default(),
        }
    }

    pub fn has_format(&self, format: FileFormat) -> bool {
        self.file_formats.contains(&format)
    }

    /// Checks the invariants the scoring formulas rely on.
    ///
    /// Meant to run at ingestion time, search never re-validates records.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.id.trim().is_empty() {
            return Err(SearchError::InvalidInput("record id is empty".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(SearchError::InvalidInput(format!(
                "record {} has an empty title",
                self.id
            )));
        }
        if self.composer.trim().is_empty() {
            return Err(SearchError::InvalidInput(format!(
                "record {} has an empty composer",
                self.id
            )));
        }
        if !(0.0..=Self::MAX_QUALITY_SCORE).contains(&self.quality_score) {
            return Err(SearchError::InvalidInput(format!(
                "record {} has quality_score {} outside [0, {}]",
                self.id,
                self.quality_score,
                Self::MAX_QUALITY_SCORE
            )));
        }
        if !(0.0..=Self::MAX_USER_RATING).contains(&self.user_rating) {
            return Err(SearchError::InvalidInput(format!(
                "record {} has user_rating {} outside [0, {}]",
                self.id,
                self.user_rating,
                Self::MAX_USER_RATING
            )));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(SearchError::InvalidInput(format!(
                "record {} has invalid duration {}",
                self.id, self.duration
            )));
        }
        if !self.note_density.is_finite() || self.note_density < 0.0 {
            return Err(SearchError::InvalidInput(format!(
                "record {} has invalid note_density {}",
                self.id, self.note_density
            )));
        }
        Ok(())
    }
}
