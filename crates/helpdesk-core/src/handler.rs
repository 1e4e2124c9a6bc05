use std::fmt;

use crate::ticket::{Category, Ticket};

/// Result of routing a ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Handled {
        team: &'static str,
        ticket_id: u32,
        description: String,
    },
    Unhandled {
        ticket_id: u32,
    },
}

impl Dispatch {
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled { .. })
    }

    pub fn ticket_id(&self) -> u32 {
        match self {
            Self::Handled { ticket_id, .. } | Self::Unhandled { ticket_id } => *ticket_id,
        }
    }
}

impl fmt::Display for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handled {
                team,
                ticket_id,
                description,
            } => write!(f, "{team} team is handling ticket #{ticket_id}: {description}"),
            Self::Unhandled { ticket_id } => {
                write!(f, "No handler available for ticket #{ticket_id}")
            }
        }
    }
}

pub trait SupportHandler {
    /// Category this handler is responsible for.
    fn category(&self) -> Category;

    fn handle(&self, ticket: &Ticket) -> Dispatch;
}

/// Handler for one team, optionally linked to a successor that receives
/// tickets of other categories.
pub struct TeamHandler {
    category: Category,
    next: Option<Box<dyn SupportHandler>>,
}

impl TeamHandler {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            next: None,
        }
    }

    pub fn hardware() -> Self {
        Self::new(Category::Hardware)
    }

    pub fn software() -> Self {
        Self::new(Category::Software)
    }

    pub fn network() -> Self {
        Self::new(Category::Network)
    }

    pub fn with_next(mut self, next: impl SupportHandler + 'static) -> Self {
        self.next = Some(Box::new(next));
        self
    }

    pub fn team_name(&self) -> &'static str {
        self.category.team_name()
    }
}

impl SupportHandler for TeamHandler {
    fn category(&self) -> Category {
        self.category
    }

    fn handle(&self, ticket: &Ticket) -> Dispatch {
        if ticket.category() == self.category {
            return Dispatch::Handled {
                team: self.team_name(),
                ticket_id: ticket.id(),
                description: ticket.description().to_string(),
            };
        }

        match &self.next {
            Some(next) => next.handle(ticket),
            None => Dispatch::Unhandled {
                ticket_id: ticket.id(),
            },
        }
    }
}

impl fmt::Debug for TeamHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TeamHandler")
            .field("category", &self.category)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}
