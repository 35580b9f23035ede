//! Search pipeline: filter, score, highlight, sort, paginate
//!
//! Every call works from the snapshot it is given and keeps no state
//! between calls. Filtering and scoring fan out over records with rayon;
//! the collected results keep snapshot order, so the stable sort that
//! follows breaks ties by snapshot position.

use super::scorer::{match_fields, score, score_matches, FieldMatches};
use super::{
    passes, ComposerAliasTable, HighlightField, ScoredResult, SearchError, SearchRequest,
    SortMode,
};
use crate::catalog::Record;
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::debug;

fn highlights(record: &Record, matches: &FieldMatches<'_>) -> BTreeMap<HighlightField, String> {
    let mut highlights = BTreeMap::new();
    if matches.title_matched() {
        highlights.insert(HighlightField::Title, record.title.clone());
    }
    if matches.composer_matched() {
        highlights.insert(HighlightField::Composer, record.composer.clone());
    }
    if let Some(tag) = matches.matched_tag() {
        highlights.insert(HighlightField::Tags, tag.to_string());
    }
    highlights
}

fn score_record<'a>(
    record: &'a Record,
    request: &SearchRequest,
    aliases: &ComposerAliasTable,
) -> ScoredResult<'a> {
    if !request.has_query() {
        return ScoredResult {
            record,
            relevance_score: score(record, &request.query, request.sort, aliases),
            highlights: BTreeMap::new(),
        };
    }

    let matches = match_fields(record, &request.query, aliases);
    ScoredResult {
        record,
        relevance_score: score_matches(record, &request.query, request.sort, &matches),
        highlights: highlights(record, &matches),
    }
}

/// Orders results in place. All sorts are stable.
fn sort_results(results: &mut [ScoredResult<'_>], mode: SortMode) {
    match mode {
        SortMode::Relevance => {
            results.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score))
        }
        SortMode::Popularity => {
            results.sort_by(|a, b| b.record.download_count.cmp(&a.record.download_count))
        }
        SortMode::Rating => {
            results.sort_by(|a, b| b.record.user_rating.total_cmp(&a.record.user_rating))
        }
        SortMode::Quality => {
            results.sort_by(|a, b| b.record.quality_score.total_cmp(&a.record.quality_score))
        }
        SortMode::Title => results.sort_by_cached_key(|r| r.record.title.to_lowercase()),
        SortMode::Composer => results.sort_by_cached_key(|r| r.record.composer.to_lowercase()),
        SortMode::Recent => results.sort_by(|a, b| b.record.date_added.cmp(&a.record.date_added)),
    }
}

/// Runs one search over `records`.
///
/// Fails only on an invalid request (for instance an inverted tempo range);
/// a request nothing matches yields an empty page.
pub fn search<'a>(
    records: &'a [Record],
    aliases: &ComposerAliasTable,
    request: &SearchRequest,
) -> Result<Vec<ScoredResult<'a>>, SearchError> {
    request.filters.validate()?;

    let mut results: Vec<ScoredResult<'a>> = records
        .par_iter()
        .filter(|record| passes(record, &request.filters))
        .map(|record| score_record(record, request, aliases))
        .collect();
    let matched = results.len();

    sort_results(&mut results, request.sort);
    let page = request.page.apply(results);

    debug!(
        "Search {:?} sorted by {}: {} of {} records passed filters, returning {} from offset {}",
        request.query,
        request.sort,
        matched,
        records.len(),
        page.len(),
        request.page.offset
    );
    Ok(page)
}
