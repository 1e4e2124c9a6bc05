mod session;

use std::io;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use console_support::Prompter;
use docstore_core::{Credentials, InMemoryStorage};

pub use session::{run_session, SessionEnd};

#[derive(Parser, Debug)]
#[command(author, version, about = "Search and upload documents through an access layer", long_about = None)]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Entry point for CLI execution. Returns the desired exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    console_support::init_logging(cli.verbose).context("failed to install log subscriber")?;

    let mut storage = InMemoryStorage::new();
    let credentials = Credentials::default();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Prompter::new(stdin.lock(), stdout.lock());

    let end = run_session(&mut console, &mut storage, &credentials)?;
    tracing::info!(?end, documents = storage.len(), "session finished");
    Ok(0)
}
