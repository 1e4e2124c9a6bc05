use std::fmt;
use std::str::FromStr;

use crate::error::{HelpDeskError, HelpDeskResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Hardware,
    Software,
    Network,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Hardware, Category::Software, Category::Network];

    /// Name of the team that owns tickets of this category.
    pub fn team_name(self) -> &'static str {
        match self {
            Self::Hardware => "Hardware",
            Self::Software => "Software",
            Self::Network => "Network",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hardware => "HARDWARE",
            Self::Software => "SOFTWARE",
            Self::Network => "NETWORK",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = HelpDeskError;

    /// Matches the upper-cased input exactly; surrounding whitespace is not
    /// forgiven.
    fn from_str(raw: &str) -> HelpDeskResult<Self> {
        match raw.to_uppercase().as_str() {
            "HARDWARE" => Ok(Self::Hardware),
            "SOFTWARE" => Ok(Self::Software),
            "NETWORK" => Ok(Self::Network),
            _ => Err(HelpDeskError::UnknownCategory(raw.to_string())),
        }
    }
}

/// Priority is read as a plain integer. The 1-3 range shown to users is not
/// enforced.
pub fn parse_priority(raw: &str) -> HelpDeskResult<i32> {
    raw.trim()
        .parse()
        .map_err(|_| HelpDeskError::InvalidPriority(raw.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    id: u32,
    description: String,
    priority: i32,
    category: Category,
}

impl Ticket {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

/// Hands out tickets with ids 1, 2, 3, ... in creation order.
#[derive(Debug, Default)]
pub struct TicketFactory {
    issued: u32,
}

impl TicketFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(
        &mut self,
        description: impl Into<String>,
        priority: i32,
        category: Category,
    ) -> Ticket {
        self.issued += 1;
        Ticket {
            id: self.issued,
            description: description.into(),
            priority,
            category,
        }
    }

    pub fn issued(&self) -> u32 {
        self.issued
    }
}
