//! Catalog snapshot loading
//!
//! A snapshot is a JSON array of records. Records that break the ingestion
//! invariants are dropped and reported, so the search core only ever sees
//! validated data.

use super::Record;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadCatalogProblem {
    /// Entry at the given position could not be deserialized as a record.
    MalformedRecord { index: usize, reason: String },
    /// Record deserialized but failed validation.
    InvalidRecord { id: String, reason: String },
    /// A record with the same id was already loaded; the later one is dropped.
    DuplicateId(String),
}

/// Parses a catalog snapshot from JSON text.
///
/// Returns the accepted records in file order, plus the problems found.
pub fn parse_catalog(json: &str) -> Result<(Vec<Record>, Vec<LoadCatalogProblem>)> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(json).context("Catalog must be a JSON array of records")?;

    let mut records = Vec::with_capacity(entries.len());
    let mut problems = vec![];
    let mut seen_ids = HashSet::new();

    for (index, entry) in entries.into_iter().enumerate() {
        let record: Record = match serde_json::from_value(entry) {
            Ok(record) => record,
            Err(err) => {
                problems.push(LoadCatalogProblem::MalformedRecord {
                    index,
                    reason: err.to_string(),
                });
                continue;
            }
        };
        if let Err(err) = record.validate() {
            problems.push(LoadCatalogProblem::InvalidRecord {
                id: record.id.clone(),
                reason: err.to_string(),
            });
            continue;
        }
        if !seen_ids.insert(record.id.clone()) {
            problems.push(LoadCatalogProblem::DuplicateId(record.id));
            continue;
        }
        records.push(record);
    }

    Ok((records, problems))
}

pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {:?}", path))?;
    let (records, problems) =
        parse_catalog(&text).with_context(|| format!("Failed to parse catalog: {:?}", path))?;

    if problems.is_empty() {
        info!("Catalog checked, no issues found.");
    } else {
        warn!("Found {} problems:", problems.len());
        for problem in problems.iter() {
            warn!("- {:?}", problem);
        }
    }
    info!("Catalog has {} records", records.len());

    Ok(records)
}
