//! Domain models for mission control.
//!
//! # Core Concepts
//!
//! - [`Mission`]: A named, dated record with a lifecycle status. Each mission
//!   owns its log of communications; nothing is shared between missions.
//! - [`CommunicationEntry`]: A timestamped, prioritized message attached to a
//!   mission. Entries are append-only and numbered from 1 in insertion order.
//!
//! Both are created only through [`MissionControl`](crate::control::MissionControl),
//! which owns the whole tree.

mod communication;
mod mission;

pub use communication::*;
pub use mission::*;

/// Buffer size for mission names. Stored names hold at most one less.
pub const MAX_NAME_LENGTH: usize = 50;
/// Messages must be strictly shorter than this.
pub const MAX_MESSAGE_LENGTH: usize = 200;
/// Communication capacity every new mission starts with.
pub const INITIAL_COMM_CAPACITY: usize = 5;
/// Default mission capacity for a new system.
pub const INITIAL_MISSION_CAPACITY: i32 = 3;
