//! In-memory mission control records.
//!
//! A [`MissionControl`] owns a growable list of [`Mission`]s, and each mission
//! owns a growable log of [`CommunicationEntry`]s. Both lists start at a fixed
//! capacity and double when full. Missions can be bulk-loaded from text and
//! the whole system exported as a plain-text report.
//!
//! ```no_run
//! use mission_control::{CreateCommunicationInput, CreateMissionInput, MissionControl, Priority};
//!
//! let mut system = MissionControl::new(3)?;
//! system.create_mission(CreateMissionInput::new(1, "Apollo", "2024-01-01"))?;
//! system.add_communication(1, CreateCommunicationInput {
//!     timestamp: "2024-01-01 09:30".to_string(),
//!     priority: Priority::Routine,
//!     message: "Systems nominal".to_string(),
//! })?;
//! system.save_report("report.txt")?;
//! # Ok::<(), mission_control::Error>(())
//! ```

pub mod config;
pub mod control;
pub mod error;
pub mod models;
pub mod slots;
pub mod validation;

pub use control::{teardown, MissionControl};
pub use error::{Error, Result};
pub use models::*;
