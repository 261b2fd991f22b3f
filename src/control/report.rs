//! Plain-text mission status report.
//!
//! Example output:
//! ```text
//! ===============================================
//! SPACE MISSION CONTROL REPORT
//! ===============================================
//! Total Missions in System: 1
//! Mission ID: 1
//! Mission Name: Apollo
//! Launch Date: 2024-01-01
//! Status: Planned
//! Communications: 3
//! -------------------
//! Communication Summary:
//!   Routine: 2, Urgent: 1, Emergency: 0
//!
//! ===============================================
//! SYSTEM TOTALS:
//! Total Communications: 3
//! ===============================================
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use super::MissionControl;
use crate::error::Result;

const BANNER: &str = "===============================================";
const SEPARATOR: &str = "-------------------";

impl MissionControl {
    /// Write the report to a newly created (or truncated) file at `path`.
    pub fn save_report(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        self.write_report(&mut out)?;
        out.flush()?;
        info!(path = %path.display(), missions = self.mission_count(), "Saved mission report");
        Ok(())
    }

    /// Write the report to `out`. Output depends only on the system's state.
    pub fn write_report<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{BANNER}")?;
        writeln!(out, "SPACE MISSION CONTROL REPORT")?;
        writeln!(out, "{BANNER}")?;
        writeln!(out, "Total Missions in System: {}", self.mission_count())?;

        for (i, mission) in self.missions().iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            let breakdown = mission.priority_breakdown();
            writeln!(out, "Mission ID: {}", mission.id)?;
            writeln!(out, "Mission Name: {}", mission.name)?;
            writeln!(out, "Launch Date: {}", mission.launch_date)?;
            writeln!(out, "Status: {}", mission.status.label())?;
            writeln!(out, "Communications: {}", mission.communication_count())?;
            writeln!(out, "{SEPARATOR}")?;
            writeln!(out, "Communication Summary:")?;
            writeln!(
                out,
                "  Routine: {}, Urgent: {}, Emergency: {}",
                breakdown.routine, breakdown.urgent, breakdown.emergency
            )?;
        }

        writeln!(out)?;
        writeln!(out, "{BANNER}")?;
        writeln!(out, "SYSTEM TOTALS:")?;
        writeln!(out, "Total Communications: {}", self.total_communications())?;
        writeln!(out, "{BANNER}")?;
        Ok(())
    }

    /// Render the report into a `String`.
    pub fn render_report(&self) -> String {
        let mut buf = Vec::new();
        self.write_report(&mut buf).expect("writing to a Vec cannot fail");
        String::from_utf8(buf).expect("report is built from UTF-8 strings")
    }
}
