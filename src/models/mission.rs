use serde::{Deserialize, Serialize};

use super::communication::{CommunicationEntry, PriorityBreakdown};
use crate::slots::Slots;

/// A mission and its communication log.
///
/// Missions are created only by
/// [`MissionControl::create_mission`](crate::control::MissionControl::create_mission)
/// and live until the owning system is torn down. The log starts with room
/// for [`INITIAL_COMM_CAPACITY`](super::INITIAL_COMM_CAPACITY) entries and
/// doubles whenever an append finds it full.
#[derive(Debug, Serialize)]
pub struct Mission {
    /// Unique within a system, always positive.
    pub id: i32,
    pub name: String,
    /// Launch date, `YYYY-MM-DD`.
    pub launch_date: String,
    pub status: MissionStatus,
    pub(crate) communications: Slots<CommunicationEntry>,
}

impl Mission {
    pub fn communications(&self) -> &[CommunicationEntry] {
        self.communications.as_slice()
    }

    pub fn communication_count(&self) -> usize {
        self.communications.len()
    }

    pub fn communication_capacity(&self) -> usize {
        self.communications.capacity()
    }

    /// Count communications by priority with a full scan of the log.
    pub fn priority_breakdown(&self) -> PriorityBreakdown {
        let mut breakdown = PriorityBreakdown::default();
        for entry in &self.communications {
            breakdown.record(entry.priority);
        }
        breakdown
    }
}

/// The lifecycle status of a mission.
///
/// - `Planned`: In planning; every mission starts here
/// - `Active`: Currently in progress
/// - `Completed`: Finished successfully
/// - `Aborted`: Ended early
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MissionStatus {
    Planned,
    Active,
    Completed,
    Aborted,
}

impl MissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Aborted => "aborted",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "planned" => Some(Self::Planned),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "aborted" => Some(Self::Aborted),
            _ => None,
        }
    }

    /// Human-readable name used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Planned => "Planned",
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Aborted => "Aborted",
        }
    }
}

/// Input for creating a new mission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMissionInput {
    pub id: i32,
    /// Non-empty. Names longer than `MAX_NAME_LENGTH - 1` characters (`char`s,
    /// not bytes) are cut.
    pub name: String,
    /// `YYYY-MM-DD`, checked against the calendar.
    pub launch_date: String,
}

impl CreateMissionInput {
    pub fn new(id: i32, name: impl Into<String>, launch_date: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            launch_date: launch_date.into(),
        }
    }
}
