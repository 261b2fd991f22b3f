use std::io::Write;

use mission_control::*;
use speculate2::speculate;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).expect("Failed to write temp file");
    file
}

speculate! {
    before {
        let mut system = MissionControl::new(1).expect("Failed to create system");
    }

    describe "load_missions_from_path" {
        it "loads every record in order" {
            let file = write_temp("2\n1 Apollo 2024-01-01\n2 Gemini 2024-02-02\n");

            let loaded = system.load_missions_from_path(file.path()).expect("Load failed");

            assert_eq!(loaded, 2);
            assert_eq!(system.mission_count(), 2);
            let apollo = &system.missions()[0];
            assert_eq!((apollo.id, apollo.name.as_str(), apollo.launch_date.as_str()), (1, "Apollo", "2024-01-01"));
            let gemini = &system.missions()[1];
            assert_eq!((gemini.id, gemini.name.as_str(), gemini.launch_date.as_str()), (2, "Gemini", "2024-02-02"));
            for mission in system.missions() {
                assert_eq!(mission.status, MissionStatus::Planned);
                assert_eq!(mission.communication_count(), 0);
            }
        }

        it "accepts a zero count" {
            let file = write_temp("0\n");
            let loaded = system.load_missions_from_path(file.path()).expect("Load failed");
            assert_eq!(loaded, 0);
            assert_eq!(system.mission_count(), 0);
        }

        it "fails with an IO error when the file is missing" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let result = system.load_missions_from_path(dir.path().join("missing.txt"));

            assert!(matches!(result, Err(Error::Io(_))));
            assert_eq!(system.mission_count(), 0);
        }
    }

    describe "load_missions" {
        it "ignores how records are split across lines" {
            let loaded = system
                .load_missions("2 1 Apollo\n2024-01-01   2\tGemini 2024-02-02".as_bytes())
                .expect("Load failed");
            assert_eq!(loaded, 2);
            assert_eq!(system.mission(2).unwrap().name, "Gemini");
        }

        it "rejects a missing or malformed count without creating anything" {
            for input in ["", "abc\n1 Apollo 2024-01-01\n", "-1\n"] {
                let result = system.load_missions(input.as_bytes());
                assert!(matches!(result, Err(Error::Format(_))), "input {input:?}");
            }
            assert_eq!(system.mission_count(), 0);
        }

        it "rejects a truncated record" {
            let result = system.load_missions("2\n1 Apollo 2024-01-01\n2 Gemini\n".as_bytes());
            assert!(matches!(result, Err(Error::Format(_))));
        }

        it "rejects a non-numeric id" {
            let result = system.load_missions("1\nx Apollo 2024-01-01\n".as_bytes());
            assert!(matches!(result, Err(Error::Format(_))));
            assert_eq!(system.mission_count(), 0);
        }

        it "keeps missions created before a bad record" {
            let result = system.load_missions(
                "3\n1 Apollo 2024-01-01\n2 Gemini 2024-02-30\n3 Artemis 2024-03-03\n".as_bytes(),
            );

            assert!(matches!(result, Err(Error::InvalidArgument(_))));
            assert_eq!(system.mission_count(), 1);
            assert_eq!(system.missions()[0].name, "Apollo");
        }

        it "rejects a non-positive id" {
            let result = system.load_missions("1\n0 Apollo 2024-01-01\n".as_bytes());
            assert!(matches!(result, Err(Error::InvalidArgument(_))));
        }

        it "fails on an id already in the system" {
            system
                .create_mission(CreateMissionInput::new(1, "Existing", "2020-01-01"))
                .expect("Failed to create mission");

            let result = system.load_missions("2\n2 Gemini 2024-02-02\n1 Apollo 2024-01-01\n".as_bytes());

            assert!(matches!(result, Err(Error::DuplicateKey(1))));
            assert_eq!(system.mission_count(), 2);
            assert_eq!(system.mission(1).unwrap().name, "Existing");
        }

        it "fails only the record holding undecodable bytes" {
            let result = system.load_missions(
                &b"3\n1 Apollo 2024-01-01\n2 Caf\xE9 2024-02-02\n3 Artemis 2024-03-03\n"[..],
            );

            assert!(matches!(result, Err(Error::Format(_))));
            assert_eq!(system.mission_count(), 1);
            assert_eq!(system.missions()[0].name, "Apollo");
        }

        it "rejects an undecodable count" {
            let result = system.load_missions(&b"\xFF\n1 Apollo 2024-01-01\n"[..]);
            assert!(matches!(result, Err(Error::Format(_))));
            assert_eq!(system.mission_count(), 0);
        }

        it "grows mission storage as records arrive" {
            let loaded = system
                .load_missions("5 1 A 2024-01-01 2 B 2024-01-02 3 C 2024-01-03 4 D 2024-01-04 5 E 2024-01-05".as_bytes())
                .expect("Load failed");
            assert_eq!(loaded, 5);
            assert_eq!(system.capacity(), 8);
        }
    }
}
