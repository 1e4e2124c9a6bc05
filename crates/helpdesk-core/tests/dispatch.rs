use helpdesk_core::{
    Category, Dispatch, HelpDesk, SupportHandler, TeamHandler, Ticket, TicketFactory,
};
use pretty_assertions::assert_eq;

struct Escalation;

impl SupportHandler for Escalation {
    fn category(&self) -> Category {
        Category::Network
    }

    fn handle(&self, ticket: &Ticket) -> Dispatch {
        Dispatch::Handled {
            team: "Escalation",
            ticket_id: ticket.id(),
            description: ticket.description().to_string(),
        }
    }
}

#[test]
fn every_category_reaches_its_own_team() {
    let desk = HelpDesk::with_default_teams();
    let mut factory = TicketFactory::new();

    for category in Category::ALL {
        let ticket = factory.create("Something broke", 2, category);
        let dispatch = desk.dispatch(&ticket);

        assert_eq!(
            dispatch.to_string(),
            format!(
                "{} team is handling ticket #{}: Something broke",
                category.team_name(),
                ticket.id()
            )
        );
        for other in Category::ALL.into_iter().filter(|c| *c != category) {
            assert!(!dispatch.to_string().starts_with(other.team_name()));
        }
    }
}

#[test]
fn missing_handler_falls_back_to_message() {
    let mut desk = HelpDesk::new();
    desk.add_handler(TeamHandler::hardware());
    desk.add_handler(TeamHandler::software());

    let mut factory = TicketFactory::new();
    let ticket = factory.create("Router rebooting", 3, Category::Network);

    let dispatch = desk.dispatch(&ticket);
    assert!(!dispatch.is_handled());
    assert_eq!(dispatch.to_string(), "No handler available for ticket #1");
}

#[test]
fn later_registration_overwrites_earlier() {
    let mut desk = HelpDesk::with_default_teams();
    let replaced = desk.register(Category::Network, Box::new(Escalation));
    assert!(replaced.is_some());
    assert_eq!(desk.categories().len(), 3);

    let mut factory = TicketFactory::new();
    let ticket = factory.create("Switch on fire", 1, Category::Network);
    assert_eq!(
        desk.dispatch(&ticket).to_string(),
        "Escalation team is handling ticket #1: Switch on fire"
    );
}

#[test]
fn registered_chain_forwards_foreign_categories() {
    let mut desk = HelpDesk::new();
    desk.register(
        Category::Hardware,
        Box::new(TeamHandler::software().with_next(TeamHandler::hardware())),
    );

    let mut factory = TicketFactory::new();
    let ticket = factory.create("Fan noise", 2, Category::Hardware);

    assert_eq!(
        desk.dispatch(&ticket).to_string(),
        "Hardware team is handling ticket #1: Fan noise"
    );
}

#[test]
fn ticket_ids_follow_creation_order() {
    let desk = HelpDesk::with_default_teams();
    let mut factory = TicketFactory::new();

    let ids: Vec<u32> = (0..4)
        .map(|_| factory.create("x", 1, Category::Software))
        .map(|ticket| desk.dispatch(&ticket).ticket_id())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}
