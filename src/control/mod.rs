//! The mission control system: root of ownership for every mission and
//! communication.
//!
//! All mutating operations validate their input before touching storage, so
//! a failed call leaves the system exactly as it was. Bulk loading is the one
//! exception, see [`MissionControl::load_missions`].

mod bulk;
mod report;
mod teardown;

pub use teardown::teardown;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::*;
use crate::slots::Slots;
use crate::validation::{is_valid_date, is_valid_timestamp};

#[derive(Debug)]
pub struct MissionControl {
    missions: Slots<Mission>,
}

impl MissionControl {
    /// Create an empty system with room for `initial_capacity` missions.
    ///
    /// Fails with [`Error::InvalidArgument`] if the capacity is not positive.
    pub fn new(initial_capacity: i32) -> Result<Self> {
        if initial_capacity <= 0 {
            return Err(Error::invalid(format!(
                "initial capacity must be positive, got {initial_capacity}"
            )));
        }
        let missions = Slots::with_capacity(initial_capacity as usize)?;
        debug!(capacity = initial_capacity, "Created mission control system");
        Ok(Self { missions })
    }

    // ============================================================
    // Read access
    // ============================================================

    /// Missions in insertion order.
    pub fn missions(&self) -> &[Mission] {
        self.missions.as_slice()
    }

    pub fn mission(&self, id: i32) -> Option<&Mission> {
        self.missions.find(|m| m.id == id)
    }

    pub fn mission_count(&self) -> usize {
        self.missions.len()
    }

    pub fn capacity(&self) -> usize {
        self.missions.capacity()
    }

    pub fn total_communications(&self) -> usize {
        self.missions.iter().map(Mission::communication_count).sum()
    }

    // ============================================================
    // Mission operations
    // ============================================================

    /// Add a new mission in `Planned` status with an empty communication log.
    ///
    /// Checks run in order and the first failure is returned: non-empty name,
    /// valid launch date, positive id, then uniqueness of the id.
    pub fn create_mission(&mut self, input: CreateMissionInput) -> Result<&Mission> {
        if input.name.is_empty() {
            return Err(Error::invalid("mission name must not be empty"));
        }
        if !is_valid_date(&input.launch_date) {
            return Err(Error::invalid(format!(
                "invalid launch date {:?}",
                input.launch_date
            )));
        }
        if input.id <= 0 {
            return Err(Error::invalid(format!(
                "mission id must be positive, got {}",
                input.id
            )));
        }
        if self.mission(input.id).is_some() {
            return Err(Error::DuplicateKey(input.id));
        }

        // Both allocations happen before anything is appended.
        let communications = Slots::with_capacity(INITIAL_COMM_CAPACITY)?;
        if self.missions.reserve_slot()? {
            debug!(capacity = self.missions.capacity(), "Grew mission storage");
        }

        let mission = Mission {
            id: input.id,
            name: input.name.chars().take(MAX_NAME_LENGTH - 1).collect(),
            launch_date: input.launch_date,
            status: MissionStatus::Planned,
            communications,
        };
        debug!(id = mission.id, name = %mission.name, "Created mission");
        self.missions.push(mission)?;

        Ok(&self.missions.as_slice()[self.missions.len() - 1])
    }

    // ============================================================
    // Communication operations
    // ============================================================

    /// Append a communication to the mission with `mission_id`.
    ///
    /// The entry is numbered `count + 1` and starts unacknowledged.
    pub fn add_communication(
        &mut self,
        mission_id: i32,
        input: CreateCommunicationInput,
    ) -> Result<&CommunicationEntry> {
        if mission_id <= 0 {
            return Err(Error::invalid(format!(
                "mission id must be positive, got {mission_id}"
            )));
        }
        if input.message.is_empty() {
            return Err(Error::invalid("message must not be empty"));
        }
        if input.message.chars().count() >= MAX_MESSAGE_LENGTH {
            return Err(Error::invalid(format!(
                "message must be shorter than {MAX_MESSAGE_LENGTH} characters"
            )));
        }
        if !is_valid_timestamp(&input.timestamp) {
            return Err(Error::invalid(format!(
                "invalid timestamp {:?}",
                input.timestamp
            )));
        }

        let mission = self
            .missions
            .find_mut(|m| m.id == mission_id)
            .ok_or(Error::NotFound(mission_id))?;

        if mission.communications.reserve_slot()? {
            debug!(
                mission_id,
                capacity = mission.communications.capacity(),
                "Grew communication log"
            );
        }

        let entry = CommunicationEntry {
            log_id: mission.communications.len() as u32 + 1,
            timestamp: input.timestamp,
            priority: input.priority,
            message: input.message,
            acknowledged: false,
        };
        mission.communications.push(entry)?;

        let log = mission.communications.as_slice();
        Ok(&log[log.len() - 1])
    }
}
