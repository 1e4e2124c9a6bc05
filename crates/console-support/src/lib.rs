//! Console plumbing shared by the `helpdesk` and `docstore` binaries.
//!
//! Sessions talk to any `BufRead`/`Write` pair so tests can script a whole
//! conversation in memory. Diagnostics go through `tracing` to stderr and
//! never mix with the conversation on stdout.

mod logging;
mod prompt;

pub use logging::{default_directive, init_logging};
pub use prompt::{is_yes, Prompter};
