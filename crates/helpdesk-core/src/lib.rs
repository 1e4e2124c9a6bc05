pub mod desk;
pub mod error;
pub mod handler;
pub mod ticket;

pub use desk::HelpDesk;
pub use error::{HelpDeskError, HelpDeskResult};
pub use handler::{Dispatch, SupportHandler, TeamHandler};
pub use ticket::{parse_priority, Category, Ticket, TicketFactory};
