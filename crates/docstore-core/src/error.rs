use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocStoreError {
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("unknown search type '{0}' (expected content, type or date)")]
    UnknownSearchMode(String),
}

pub type DocStoreResult<T> = Result<T, DocStoreError>;
