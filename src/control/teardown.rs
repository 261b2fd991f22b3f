use tracing::debug;

use super::MissionControl;

/// Release a system and everything it owns, leaving `handle` empty.
///
/// Dropping the system frees each mission's communication log before the
/// mission storage that held it, and the mission storage before the system.
/// An empty handle is a no-op, so calling this twice is safe.
pub fn teardown(handle: &mut Option<MissionControl>) {
    let Some(system) = handle.take() else {
        return;
    };
    let missions = system.mission_count();
    let communications = system.total_communications();
    drop(system);

    debug!(missions, communications, "Tore down mission control system");
}
