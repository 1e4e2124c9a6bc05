use std::collections::HashMap;

use tracing::debug;

use crate::handler::{Dispatch, SupportHandler, TeamHandler};
use crate::ticket::{Category, Ticket};

/// Routes tickets to the handler registered for their category.
///
/// Lookup is direct: a handler's own successor chain is only walked when the
/// registered handler decides to forward.
#[derive(Default)]
pub struct HelpDesk {
    order: Vec<Category>,
    handlers: HashMap<Category, Box<dyn SupportHandler>>,
}

impl HelpDesk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Desk with one unlinked team handler per category.
    pub fn with_default_teams() -> Self {
        let mut desk = Self::new();
        desk.add_handler(TeamHandler::hardware());
        desk.add_handler(TeamHandler::software());
        desk.add_handler(TeamHandler::network());
        desk
    }

    /// Register `handler` for `category`, returning whatever it replaced.
    pub fn register(
        &mut self,
        category: Category,
        handler: Box<dyn SupportHandler>,
    ) -> Option<Box<dyn SupportHandler>> {
        let previous = self.handlers.insert(category, handler);
        if previous.is_none() {
            self.order.push(category);
        }
        debug!(%category, replaced = previous.is_some(), "registered handler");
        previous
    }

    /// Register under the category the handler declares.
    pub fn add_handler(&mut self, handler: impl SupportHandler + 'static) {
        let category = handler.category();
        self.register(category, Box::new(handler));
    }

    pub fn remove_handler(&mut self, category: Category) -> Option<Box<dyn SupportHandler>> {
        let removed = self.handlers.remove(&category);
        if removed.is_some() {
            self.order.retain(|registered| *registered != category);
            debug!(%category, "removed handler");
        }
        removed
    }

    pub fn dispatch(&self, ticket: &Ticket) -> Dispatch {
        let outcome = match self.handlers.get(&ticket.category()) {
            Some(handler) => handler.handle(ticket),
            None => Dispatch::Unhandled {
                ticket_id: ticket.id(),
            },
        };

        debug!(
            ticket = ticket.id(),
            category = %ticket.category(),
            priority = ticket.priority(),
            handled = outcome.is_handled(),
            "dispatched ticket"
        );
        outcome
    }

    /// Registered categories in first-registration order.
    pub fn categories(&self) -> &[Category] {
        &self.order
    }

    pub fn is_registered(&self, category: Category) -> bool {
        self.handlers.contains_key(&category)
    }
}
