//! MIDI/MusicXML score search library
//!
//! Ranks and filters an in-memory snapshot of score metadata records against
//! free-text queries and structured constraints, and produces autocomplete
//! suggestions. Nothing in `search` performs I/O: loading a snapshot and the
//! composer alias configuration is done by `catalog` and `config`.

pub mod catalog;
pub mod config;
pub mod search;

// Re-export commonly used types for convenience
pub use catalog::{find_record, load_catalog, Difficulty, FileFormat, Genre, Period, Record};
pub use search::{
    search, suggest, ComposerAliasTable, FilterSet, FormatRequirement, Pagination, ScoredResult,
    SearchError, SearchRequest, SortMode,
};
