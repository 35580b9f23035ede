//! Relevance scoring
//!
//! With a query, a record scores a gated, weighted sum of field matches,
//! scaled by quality, popularity and rating boosts. Without a query the
//! score comes straight from the attribute the sort mode names.

use super::similarity::similarity;
use super::{ComposerAliasTable, SortMode};
use crate::catalog::Record;

/// Field similarities at or below this contribute nothing.
pub const MATCH_GATE: f64 = 0.6;

const TITLE_WEIGHT: f64 = 40.0;
const COMPOSER_WEIGHT: f64 = 30.0;
const TAG_WEIGHT: f64 = 15.0;
const GENRE_BONUS: f64 = 10.0;
const PERIOD_BONUS: f64 = 5.0;

const MAX_POPULARITY_BOOST: f64 = 0.2;
const POPULARITY_BOOST_DOWNLOADS: f64 = 10_000.0;
const MAX_RATING_BOOST: f64 = 0.1;

// Recency has no content signal, the sort stage orders by date_added instead.
const RECENT_PLACEHOLDER_SCORE: f64 = 50.0;

/// Similarities of a query against the text fields of one record.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMatches<'a> {
    pub title: f64,
    /// Against the composer, after alias normalization of the query.
    pub composer: f64,
    /// Best matching tag and its similarity, first in tag order on ties.
    pub best_tag: Option<(&'a str, f64)>,
}

impl FieldMatches<'_> {
    pub fn title_matched(&self) -> bool {
        self.title > MATCH_GATE
    }

    pub fn composer_matched(&self) -> bool {
        self.composer > MATCH_GATE
    }

    pub fn matched_tag(&self) -> Option<&str> {
        self.best_tag
            .filter(|(_, sim)| *sim > MATCH_GATE)
            .map(|(tag, _)| tag)
    }
}

pub fn match_fields<'a>(
    record: &'a Record,
    query: &str,
    aliases: &ComposerAliasTable,
) -> FieldMatches<'a> {
    let title = similarity(query, &record.title);
    let composer = similarity(aliases.normalize(query), &record.composer);

    let mut best_tag: Option<(&str, f64)> = None;
    for tag in record.tags.iter() {
        let sim = similarity(query, tag);
        if best_tag.map_or(true, |(_, best)| sim > best) {
            best_tag = Some((tag.as_str(), sim));
        }
    }

    FieldMatches {
        title,
        composer,
        best_tag,
    }
}

fn gated(similarity: f64, weight: f64) -> f64 {
    if similarity > MATCH_GATE {
        similarity * weight
    } else {
        0.0
    }
}

fn quality_factor(record: &Record) -> f64 {
    0.5 + record.quality_score / 20.0
}

fn popularity_factor(record: &Record) -> f64 {
    1.0 + (record.download_count as f64 / POPULARITY_BOOST_DOWNLOADS).min(MAX_POPULARITY_BOOST)
}

fn rating_factor(record: &Record) -> f64 {
    1.0 + (record.user_rating / Record::MAX_USER_RATING) * MAX_RATING_BOOST
}

fn empty_query_score(record: &Record, mode: SortMode) -> f64 {
    match mode {
        SortMode::Popularity => record.download_count as f64 / 100.0,
        SortMode::Rating => record.user_rating * 20.0,
        SortMode::Recent => RECENT_PLACEHOLDER_SCORE,
        SortMode::Quality | SortMode::Relevance | SortMode::Title | SortMode::Composer => {
            record.quality_score * 10.0
        }
    }
}

/// Relevance score from already computed field matches.
pub(super) fn score_matches(
    record: &Record,
    query: &str,
    mode: SortMode,
    matches: &FieldMatches<'_>,
) -> f64 {
    if query.trim().is_empty() {
        return empty_query_score(record, mode);
    }

    let query_lower = query.to_lowercase();
    let mut base = gated(matches.title, TITLE_WEIGHT) + gated(matches.composer, COMPOSER_WEIGHT);
    if let Some((_, sim)) = matches.best_tag {
        base += gated(sim, TAG_WEIGHT);
    }
    if record.genre.as_str().contains(&query_lower) {
        base += GENRE_BONUS;
    }
    if let Some(period) = record.period {
        if period.as_str().contains(&query_lower) {
            base += PERIOD_BONUS;
        }
    }

    base * quality_factor(record) * popularity_factor(record) * rating_factor(record)
}

/// Relevance of `record` for `query` under `mode`.
pub fn score(record: &Record, query: &str, mode: SortMode, aliases: &ComposerAliasTable) -> f64 {
    if query.trim().is_empty() {
        return empty_query_score(record, mode);
    }
    let matches = match_fields(record, query, aliases);
    score_matches(record, query, mode, &matches)
}
