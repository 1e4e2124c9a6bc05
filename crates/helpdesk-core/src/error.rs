use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HelpDeskError {
    #[error("unknown ticket category '{0}' (expected HARDWARE, SOFTWARE or NETWORK)")]
    UnknownCategory(String),

    #[error("invalid ticket priority '{0}': not an integer")]
    InvalidPriority(String),
}

pub type HelpDeskResult<T> = Result<T, HelpDeskError>;
