use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use console_support::{is_yes, Prompter};
use helpdesk_core::{parse_priority, Category, HelpDesk, TicketFactory};

/// Drive the ticket conversation until the user declines another ticket or
/// input runs out.
///
/// A priority that is not a number or a category outside the known set ends
/// the session with an error.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Prompter<R, W>,
    desk: &HelpDesk,
    factory: &mut TicketFactory,
) -> Result<()> {
    console.blank()?;
    console.say("Welcome to the Help Desk!")?;

    loop {
        let Some(description) = console.ask_line("Enter ticket description:")? else {
            break;
        };
        let Some(priority) = console.ask_line("Enter ticket priority (1-3):")? else {
            break;
        };
        let priority = parse_priority(&priority)?;
        let Some(category) =
            console.ask_line("Enter ticket type (HARDWARE, SOFTWARE, NETWORK):")?
        else {
            break;
        };
        let category: Category = category.parse()?;

        let ticket = factory.create(description, priority, category);
        let outcome = desk.dispatch(&ticket);

        console.blank()?;
        console.say(&outcome)?;
        console.blank()?;

        let answer = console.ask_line("Do you want to create another ticket? (yes/no)")?;
        if !answer.as_deref().is_some_and(is_yes) {
            break;
        }
    }

    console.flush().context("failed to flush console output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpdesk_core::HelpDeskError;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn transcript(input: &str, desk: &HelpDesk) -> (Result<()>, String) {
        let mut console = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut factory = TicketFactory::new();
        let result = run_session(&mut console, desk, &mut factory);
        let output = String::from_utf8(console.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn single_ticket_transcript() {
        let desk = HelpDesk::with_default_teams();
        let (result, output) = transcript("Printer jammed\n2\nhardware\nno\n", &desk);

        result.unwrap();
        assert_eq!(
            output,
            "\nWelcome to the Help Desk!\n\
             Enter ticket description:\n\
             Enter ticket priority (1-3):\n\
             Enter ticket type (HARDWARE, SOFTWARE, NETWORK):\n\
             \nHardware team is handling ticket #1: Printer jammed\n\n\
             Do you want to create another ticket? (yes/no)\n"
        );
    }

    #[test]
    fn yes_keeps_numbering_going() {
        let desk = HelpDesk::with_default_teams();
        let (result, output) =
            transcript("App crash\n1\nSOFTWARE\nYES\nNo wifi\n3\nNetwork\nno\n", &desk);

        result.unwrap();
        assert!(output.contains("Software team is handling ticket #1: App crash"));
        assert!(output.contains("Network team is handling ticket #2: No wifi"));
    }

    #[test]
    fn unknown_category_is_fatal() {
        let desk = HelpDesk::with_default_teams();
        let (result, output) = transcript("Coffee machine\n1\nKITCHEN\n", &desk);

        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<HelpDeskError>(),
            Some(&HelpDeskError::UnknownCategory("KITCHEN".into()))
        );
        assert!(!output.contains("team is handling"));
    }

    #[test]
    fn non_numeric_priority_is_fatal() {
        let desk = HelpDesk::with_default_teams();
        let (result, _) = transcript("Slow laptop\nurgent\nHARDWARE\n", &desk);

        assert!(matches!(
            result.unwrap_err().downcast_ref::<HelpDeskError>(),
            Some(HelpDeskError::InvalidPriority(_))
        ));
    }

    #[test]
    fn end_of_input_ends_quietly() {
        let desk = HelpDesk::with_default_teams();
        let (result, output) = transcript("Half a ticket\n", &desk);

        result.unwrap();
        assert!(output.ends_with("Enter ticket priority (1-3):\n"));
    }

    #[test]
    fn unregistered_team_prints_fallback() {
        let desk = HelpDesk::new();
        let (result, output) = transcript("Disk full\n2\nhardware\nno\n", &desk);

        result.unwrap();
        assert!(output.contains("\nNo handler available for ticket #1\n"));
    }
}
