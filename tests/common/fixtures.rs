//! Test fixture creation

use chrono::{TimeZone, Utc};
use midi_score_search::{Difficulty, FileFormat, Genre, Period, Record};
use std::io::Write;
use tempfile::NamedTempFile;

use super::constants::*;

fn tags(values: &[&str]) -> std::collections::BTreeSet<String> {
    values.iter().map(|t| t.to_string()).collect()
}

/// The three-record catalog every integration test starts from.
pub fn sample_catalog() -> Vec<Record> {
    let mut elise = Record::new(FUR_ELISE_ID, "Für Elise", BEETHOVEN);
    elise.genre = Genre::Classical;
    elise.period = Some(Period::Romantic);
    elise.difficulty = Difficulty::Beginner;
    elise.tempo = 120;
    elise.duration = 3.5;
    elise.quality_score = 9.2;
    elise.note_density = 2.5;
    elise.download_count = 5420;
    elise.user_rating = 4.8;
    elise.tags = tags(&["piano", "famous", "easy"]);
    elise.file_formats = [FileFormat::Midi, FileFormat::MusicXml].into();
    elise.source = "musescore".to_string();
    elise.date_added = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();

    let mut moonlight = Record::new(MOONLIGHT_SONATA_ID, "Moonlight Sonata", BEETHOVEN);
    moonlight.genre = Genre::Classical;
    moonlight.period = Some(Period::Romantic);
    moonlight.difficulty = Difficulty::Advanced;
    moonlight.tempo = 60;
    moonlight.duration = 15.2;
    moonlight.quality_score = 9.5;
    moonlight.note_density = 4.8;
    moonlight.download_count = 8920;
    moonlight.user_rating = 4.9;
    moonlight.tags = tags(&["piano", "famous", "sonata", "advanced"]);
    moonlight.file_formats = [FileFormat::Midi, FileFormat::MusicXml].into();
    moonlight.source = "imslp".to_string();
    moonlight.date_added = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();

    let mut nachtmusik = Record::new(NACHTMUSIK_ID, "Eine Kleine Nachtmusik", MOZART);
    nachtmusik.genre = Genre::Classical;
    nachtmusik.period = Some(Period::Classical);
    nachtmusik.difficulty = Difficulty::Intermediate;
    nachtmusik.tempo = 140;
    nachtmusik.duration = 6.0;
    nachtmusik.quality_score = 8.8;
    nachtmusik.note_density = 3.2;
    nachtmusik.download_count = 3200;
    nachtmusik.user_rating = 4.5;
    nachtmusik.tags = tags(&["piano", "mozart", "serenade"]);
    nachtmusik.file_formats = [FileFormat::Midi].into();
    nachtmusik.source = "musescore".to_string();
    nachtmusik.date_added = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();

    vec![elise, moonlight, nachtmusik]
}

/// Writes `records` as a JSON snapshot to a temporary file.
#[allow(dead_code)]
pub fn write_catalog_file(records: &[Record]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp catalog");
    let json = serde_json::to_string_pretty(records).expect("Failed to serialize catalog");
    file.write_all(json.as_bytes())
        .expect("Failed to write temp catalog");
    file
}

#[allow(dead_code)]
pub fn write_config_file(toml_text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp config");
    file.write_all(toml_text.as_bytes())
        .expect("Failed to write temp config");
    file
}
