use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use console_support::{is_yes, Prompter};
use docstore_core::{
    authenticate, parse_date_or_today, Credentials, Document, DocumentStorage,
    DocumentStorageProxy, InMemoryStorage, NaiveDate, User,
};

const DATE_FALLBACK_NOTICE: &str = "Invalid date format. Using current date instead.";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    AuthenticationFailed,
    Exited,
    InputClosed,
}

/// Log in, then serve the search/upload menu until the user exits or input
/// runs out. Searches go through the access layer; uploads go straight to
/// `storage`.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Prompter<R, W>,
    storage: &mut InMemoryStorage,
    credentials: &Credentials,
) -> Result<SessionEnd> {
    let Some(user) = login(console, credentials)? else {
        console.say("Authentication failed.")?;
        console.flush()?;
        return Ok(SessionEnd::AuthenticationFailed);
    };

    let end = loop {
        show_options(console)?;
        let Some(choice) = console.ask("Enter your choice: ")? else {
            break SessionEnd::InputClosed;
        };

        let step = match choice.trim().parse::<u32>() {
            Ok(1) => search(console, storage, &user)?,
            Ok(2) => upload(console, storage)?,
            Ok(3) => {
                console.say("Exiting...")?;
                break SessionEnd::Exited;
            }
            _ => {
                console.say("Invalid choice.")?;
                Step::Continue
            }
        };

        if step == Step::InputClosed {
            break SessionEnd::InputClosed;
        }
    };

    console.flush().context("failed to flush console output")?;
    Ok(end)
}

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    InputClosed,
}

fn login<R: BufRead, W: Write>(
    console: &mut Prompter<R, W>,
    credentials: &Credentials,
) -> Result<Option<User>> {
    console.blank()?;
    let username = console.ask("Enter username: ")?.unwrap_or_default();
    let password = console.ask("Enter password: ")?.unwrap_or_default();
    Ok(authenticate(&username, &password, credentials))
}

fn show_options<R: BufRead, W: Write>(console: &mut Prompter<R, W>) -> Result<()> {
    console.blank()?;
    console.say("Options:")?;
    console.say("1. Search Documents")?;
    console.say("2. Upload Document")?;
    console.say("3. Exit")?;
    Ok(())
}

fn search<R: BufRead, W: Write>(
    console: &mut Prompter<R, W>,
    storage: &InMemoryStorage,
    user: &User,
) -> Result<Step> {
    let proxy = DocumentStorageProxy::new(storage);

    console.blank()?;
    let Some(search_type) = console.ask("Enter search type (content, type, or date): ")? else {
        return Ok(Step::InputClosed);
    };

    match search_type.to_lowercase().as_str() {
        mode @ ("content" | "type") => {
            let Some(query) = console.ask(&format!("Enter {mode} to search: "))? else {
                return Ok(Step::InputClosed);
            };
            let results = proxy.search_documents(&query, mode, user);
            show_results(console, &results)?;
        }
        "date" => {
            let Some(start) = console.ask("Enter start date (YYYY-MM-DD): ")? else {
                return Ok(Step::InputClosed);
            };
            let Some(end) = console.ask("Enter end date (YYYY-MM-DD): ")? else {
                return Ok(Step::InputClosed);
            };
            let start = read_date(console, &start)?;
            let end = read_date(console, &end)?;
            let results = proxy.search_documents_by_date(start, end, user);
            show_results(console, &results)?;
        }
        _ => console.say("Invalid search criteria.")?,
    }

    Ok(Step::Continue)
}

fn upload<R: BufRead, W: Write>(
    console: &mut Prompter<R, W>,
    storage: &mut InMemoryStorage,
) -> Result<Step> {
    loop {
        console.blank()?;
        console.say("Upload Document:")?;

        let Some(id) = console.ask("ID: ")? else {
            return Ok(Step::InputClosed);
        };
        let Some(title) = console.ask("Title: ")? else {
            return Ok(Step::InputClosed);
        };
        let Some(content) = console.ask("Content: ")? else {
            return Ok(Step::InputClosed);
        };
        let Some(doc_type) = console.ask("Type: ")? else {
            return Ok(Step::InputClosed);
        };
        let Some(date) = console.ask("Upload Date (YYYY-MM-DD): ")? else {
            return Ok(Step::InputClosed);
        };

        let uploaded_on = read_date(console, &date)?;
        storage.add_document(Document::new(id, title, content, doc_type, uploaded_on));

        console.blank()?;
        console.say("Document uploaded successfully.")?;
        console.blank()?;

        let answer = console.ask("Do you want to upload more documents? (yes/no): ")?;
        console.blank()?;
        match answer {
            Some(answer) if is_yes(&answer) => continue,
            Some(_) => return Ok(Step::Continue),
            None => return Ok(Step::InputClosed),
        }
    }
}

fn read_date<R: BufRead, W: Write>(
    console: &mut Prompter<R, W>,
    input: &str,
) -> Result<NaiveDate> {
    let parsed = parse_date_or_today(input);
    if parsed.substituted {
        console.say(DATE_FALLBACK_NOTICE)?;
    }
    Ok(parsed.date)
}

fn show_results<R: BufRead, W: Write>(
    console: &mut Prompter<R, W>,
    results: &[&Document],
) -> Result<()> {
    console.blank()?;
    if results.is_empty() {
        console.say("No documents found.")?;
    } else {
        console.say("Search results:")?;
        for doc in results {
            console.say(doc.title())?;
        }
    }
    console.blank()?;
    Ok(())
}
