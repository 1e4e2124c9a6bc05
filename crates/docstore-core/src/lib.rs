//! Document storage for the `docstore` console.
//!
//! [`InMemoryStorage`] holds documents keyed by id. Callers normally reach it
//! through [`DocumentStorageProxy`], which forwards every call unchanged.

pub mod date;
pub mod document;
pub mod error;
pub mod proxy;
pub mod storage;
pub mod user;

pub use chrono::NaiveDate;
pub use date::{parse_date, parse_date_or, parse_date_or_today, LenientDate, DATE_FORMAT};
pub use document::Document;
pub use error::{DocStoreError, DocStoreResult};
pub use proxy::DocumentStorageProxy;
pub use storage::{DocumentStorage, InMemoryStorage, SearchMode};
pub use user::{authenticate, Credentials, User};
