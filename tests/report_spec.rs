use std::fs;

use mission_control::*;
use speculate2::speculate;

fn comm(priority: Priority) -> CreateCommunicationInput {
    CreateCommunicationInput {
        timestamp: "2024-01-01 08:00".to_string(),
        priority,
        message: "Status update".to_string(),
    }
}

fn new_system() -> MissionControl {
    MissionControl::new(3).expect("Failed to create system")
}

speculate! {
    describe "write_report" {
        it "reports an empty system" {
            let system = new_system();
            let report = system.render_report();
            assert_eq!(
                report,
                "===============================================\n\
                 SPACE MISSION CONTROL REPORT\n\
                 ===============================================\n\
                 Total Missions in System: 0\n\
                 \n\
                 ===============================================\n\
                 SYSTEM TOTALS:\n\
                 Total Communications: 0\n\
                 ===============================================\n"
            );
        }

        it "breaks communications down by priority" {
            let mut system = new_system();
            system
                .create_mission(CreateMissionInput::new(1, "Apollo", "2024-01-01"))
                .expect("Failed to create mission");
            for priority in [Priority::Routine, Priority::Urgent, Priority::Routine] {
                system.add_communication(1, comm(priority)).expect("Failed to add communication");
            }

            let report = system.render_report();

            assert!(report.contains("Mission ID: 1\n"));
            assert!(report.contains("Mission Name: Apollo\n"));
            assert!(report.contains("Launch Date: 2024-01-01\n"));
            assert!(report.contains("Status: Planned\n"));
            assert!(report.contains("Communications: 3\n"));
            assert!(report.contains("  Routine: 2, Urgent: 1, Emergency: 0\n"));
            assert!(report.contains("Total Communications: 3\n"));
        }

        it "lists missions in storage order separated by blank lines" {
            let mut system = new_system();
            for (id, name) in [(3, "Gamma"), (1, "Alpha")] {
                system
                    .create_mission(CreateMissionInput::new(id, name, "2024-06-01"))
                    .expect("Failed to create mission");
            }
            system.add_communication(1, comm(Priority::Emergency)).expect("Failed to add communication");

            let report = system.render_report();

            assert!(report.contains("Total Missions in System: 2\n"));
            let gamma = report.find("Mission Name: Gamma").expect("Gamma missing");
            let alpha = report.find("Mission Name: Alpha").expect("Alpha missing");
            assert!(gamma < alpha);
            assert!(report.contains("Emergency: 0\n\nMission ID: 1\n"));
            assert!(report.contains("  Routine: 0, Urgent: 0, Emergency: 1\n"));
            assert!(report.contains("Total Communications: 1\n"));
        }

        it "is deterministic" {
            let mut system = new_system();
            system
                .create_mission(CreateMissionInput::new(1, "Apollo", "2024-01-01"))
                .expect("Failed to create mission");
            assert_eq!(system.render_report(), system.render_report());
        }
    }

    describe "save_report" {
        it "writes the rendered report to disk" {
            let mut system = new_system();
            system
                .create_mission(CreateMissionInput::new(1, "Apollo", "2024-01-01"))
                .expect("Failed to create mission");
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("report.txt");

            system.save_report(&path).expect("Failed to save report");

            let written = fs::read_to_string(&path).expect("Failed to read report");
            assert_eq!(written, system.render_report());
        }

        it "fails with an IO error when the file cannot be created" {
            let system = new_system();
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("no-such-dir").join("report.txt");

            let result = system.save_report(&path);

            assert!(matches!(result, Err(Error::Io(_))));
        }
    }
}
