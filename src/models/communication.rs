use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A log entry attached to a mission.
///
/// Entries are **append-only**. `log_id` is assigned at insertion as the
/// mission's communication count plus one and is never renumbered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommunicationEntry {
    pub log_id: u32,
    /// When the message was sent, `YYYY-MM-DD HH:MM`.
    pub timestamp: String,
    pub priority: Priority,
    pub message: String,
    /// Always false at creation.
    pub acknowledged: bool,
}

/// Severity of a communication.
///
/// - `Routine`: Standard operational messages
/// - `Urgent`: Messages requiring prompt attention
/// - `Emergency`: Messages requiring immediate response
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Routine = 1,
    Urgent = 2,
    Emergency = 3,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Self::Routine, Self::Urgent, Self::Emergency];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Routine => "routine",
            Self::Urgent => "urgent",
            Self::Emergency => "emergency",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "routine" => Some(Self::Routine),
            "urgent" => Some(Self::Urgent),
            "emergency" => Some(Self::Emergency),
            _ => None,
        }
    }

    /// Human-readable name used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Routine => "Routine",
            Self::Urgent => "Urgent",
            Self::Emergency => "Emergency",
        }
    }

    /// Numeric code as supplied by callers (1, 2 or 3).
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl TryFrom<i32> for Priority {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Routine),
            2 => Ok(Self::Urgent),
            3 => Ok(Self::Emergency),
            other => Err(Error::invalid(format!("unknown priority code {other}"))),
        }
    }
}

/// Input for appending a communication to a mission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommunicationInput {
    /// `YYYY-MM-DD HH:MM`; only the shape is checked.
    pub timestamp: String,
    pub priority: Priority,
    /// Non-empty and shorter than [`MAX_MESSAGE_LENGTH`](super::MAX_MESSAGE_LENGTH)
    /// characters. The limit counts `char`s, not bytes.
    pub message: String,
}

/// Per-priority communication counts for one mission.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriorityBreakdown {
    pub routine: usize,
    pub urgent: usize,
    pub emergency: usize,
}

impl PriorityBreakdown {
    pub fn record(&mut self, priority: Priority) {
        match priority {
            Priority::Routine => self.routine += 1,
            Priority::Urgent => self.urgent += 1,
            Priority::Emergency => self.emergency += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.routine + self.urgent + self.emergency
    }
}
