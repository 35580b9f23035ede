use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Conflicting composer aliases: {0}")]
    AliasConflict(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),
}
