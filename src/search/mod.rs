mod autocomplete;
mod composer_alias;
mod error;
mod filter;
mod ranker;
mod scorer;
mod similarity;
mod types;

pub use autocomplete::{suggest, MIN_SUGGEST_QUERY_LEN};
pub use composer_alias::ComposerAliasTable;
pub use error::SearchError;
pub use filter::{passes, FilterSet, FormatRequirement};
pub use ranker::search;
pub use scorer::{match_fields, score, FieldMatches, MATCH_GATE};
pub use similarity::{levenshtein_distance, similarity, CONTAINS_SCORE};
pub use types::{HighlightField, Pagination, ScoredResult, SearchRequest, SortMode};
