use chrono::{Local, NaiveDate};
use tracing::warn;

use crate::error::{DocStoreError, DocStoreResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(input: &str) -> DocStoreResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| DocStoreError::InvalidDate(input.to_string()))
}

/// A date read from user input, possibly replaced by a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LenientDate {
    pub date: NaiveDate,
    pub substituted: bool,
}

pub fn parse_date_or(input: &str, fallback: NaiveDate) -> LenientDate {
    match parse_date(input) {
        Ok(date) => LenientDate {
            date,
            substituted: false,
        },
        Err(_) => LenientDate {
            date: fallback,
            substituted: true,
        },
    }
}

/// Parse `input`, falling back to the local current date when it is not a
/// valid `YYYY-MM-DD` string.
pub fn parse_date_or_today(input: &str) -> LenientDate {
    let parsed = parse_date_or(input, Local::now().date_naive());
    if parsed.substituted {
        warn!(input, fallback = %parsed.date, "invalid date, using current date");
    }
    parsed
}
