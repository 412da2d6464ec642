//! Presentation model for the history list.

use super::types::Location;
use serde::{Deserialize, Serialize};

/// Order in which the move list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl DisplayOrder {
    /// The other order.
    pub fn reversed(self) -> Self {
        match self {
            DisplayOrder::Ascending => DisplayOrder::Descending,
            DisplayOrder::Descending => DisplayOrder::Ascending,
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveListEntry {
    /// Step this entry jumps to.
    pub step: usize,
    /// Location of the play at this step.
    pub location: Option<Location>,
    /// Whether this is the step currently shown.
    pub selected: bool,
}

impl MoveListEntry {
    /// Button text for the entry.
    pub fn label(&self) -> String {
        if self.step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.step)
        }
    }
}

impl std::fmt::Display for MoveListEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.location {
            Some(location) => write!(f, "{} {}", self.label(), location),
            None => write!(f, "{}", self.label()),
        }
    }
}
