//! Search request and result types

use super::{FilterSet, SearchError};
use crate::catalog::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// How results are ordered, and which signal drives empty-query scoring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Computed relevance score, descending.
    #[default]
    Relevance,
    /// Download count, descending.
    Popularity,
    /// User rating, descending.
    Rating,
    /// Quality score, descending.
    Quality,
    /// Title, case-insensitive ascending.
    Title,
    /// Composer, case-insensitive ascending.
    Composer,
    /// Date added, newest first.
    Recent,
}

impl SortMode {
    pub const ALL: [SortMode; 7] = [
        SortMode::Relevance,
        SortMode::Popularity,
        SortMode::Rating,
        SortMode::Quality,
        SortMode::Title,
        SortMode::Composer,
        SortMode::Recent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Relevance => "relevance",
            SortMode::Popularity => "popularity",
            SortMode::Rating => "rating",
            SortMode::Quality => "quality",
            SortMode::Title => "title",
            SortMode::Composer => "composer",
            SortMode::Recent => "recent",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| SearchError::InvalidInput(format!("unknown sort mode \"{s}\"")))
    }
}

/// Window of the ranked results to return.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: usize,
    pub offset: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Pagination {
    pub const DEFAULT_LIMIT: usize = 50;

    /// Builds a window from caller-supplied values, rejecting negatives.
    pub fn new(limit: i64, offset: i64) -> Result<Self, SearchError> {
        let limit = usize::try_from(limit)
            .map_err(|_| SearchError::InvalidInput(format!("negative limit {limit}")))?;
        let offset = usize::try_from(offset)
            .map_err(|_| SearchError::InvalidInput(format!("negative offset {offset}")))?;
        Ok(Pagination { limit, offset })
    }

    /// Keeps items in `[offset, offset + limit)`.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .collect()
    }
}

/// One search call: query text, constraints, ordering and window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub query: String,
    pub filters: FilterSet,
    pub sort: SortMode,
    pub page: Pagination,
}

impl SearchRequest {
    pub fn new<Q: Into<String>>(query: Q) -> Self {
        SearchRequest {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    pub fn sorted_by(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    pub fn paginated(mut self, page: Pagination) -> Self {
        self.page = page;
        self
    }

    /// Queries made only of whitespace count as empty.
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightField {
    Title,
    Composer,
    Tags,
}

/// A record that survived filtering, with its relevance score and the
/// field values that matched the query.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredResult<'a> {
    pub record: &'a Record,
    pub relevance_score: f64,
    pub highlights: BTreeMap<HighlightField, String>,
}
