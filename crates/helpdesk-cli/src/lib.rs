mod session;

use std::io;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use console_support::Prompter;
use helpdesk_core::{HelpDesk, TicketFactory};

pub use session::run_session;

#[derive(Parser, Debug)]
#[command(author, version, about = "Route support tickets to the right team", long_about = None)]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Entry point for CLI execution. Returns the desired exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    console_support::init_logging(cli.verbose).context("failed to install log subscriber")?;

    let desk = HelpDesk::with_default_teams();
    let mut factory = TicketFactory::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Prompter::new(stdin.lock(), stdout.lock());

    run_session(&mut console, &desk, &mut factory)?;
    tracing::info!(tickets = factory.issued(), "session finished");
    Ok(0)
}
