//! Autocomplete suggestions
//!
//! Plain substring recall over titles, composers and tags, no scoring.

use crate::catalog::Record;
use std::collections::BTreeSet;
use tracing::debug;

/// Queries shorter than this (in chars) get no suggestions.
pub const MIN_SUGGEST_QUERY_LEN: usize = 2;

/// Titles, composers and tags containing `query`, case-insensitively.
///
/// Suggestions are deduplicated, sorted lexicographically and truncated to
/// `limit`.
pub fn suggest(records: &[Record], query: &str, limit: usize) -> Vec<String> {
    if query.chars().count() < MIN_SUGGEST_QUERY_LEN {
        return vec![];
    }

    let query_lower = query.to_lowercase();
    let matches = |text: &str| text.to_lowercase().contains(&query_lower);

    let mut suggestions: BTreeSet<&str> = BTreeSet::new();
    for record in records {
        if matches(record.title.as_str()) {
            suggestions.insert(record.title.as_str());
        }
        if matches(record.composer.as_str()) {
            suggestions.insert(record.composer.as_str());
        }
        for tag in record.tags.iter().filter(|t| matches(t.as_str())) {
            suggestions.insert(tag.as_str());
        }
    }

    debug!(
        "Autocomplete {:?}: {} distinct suggestions, returning up to {}",
        query,
        suggestions.len(),
        limit
    );
    suggestions
        .into_iter()
        .take(limit)
        .map(str::to_string)
        .collect()
}
