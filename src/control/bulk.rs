//! Bulk loading of missions from whitespace-delimited text.
//!
//! ```text
//! 2
//! 1 Apollo 2024-01-01
//! 2 Gemini 2024-02-02
//! ```
//!
//! The first token is the number of records. Each record is three tokens:
//! id, name and launch date. Names therefore cannot contain whitespace.
//!
//! Tokens are split on ASCII whitespace over raw bytes and decoded one at a
//! time, so an undecodable token fails only the record it belongs to.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{info, warn};

use super::MissionControl;
use crate::error::{Error, Result};
use crate::models::CreateMissionInput;
use crate::validation::is_valid_date;

impl MissionControl {
    /// Open `path` and load its missions. See [`Self::load_missions`].
    ///
    /// If the file cannot be opened nothing is created.
    pub fn load_missions_from_path(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "Could not open mission file")
        })?;
        self.load_missions(BufReader::new(file))
    }

    /// Create one mission per record read from `reader`, returning how many
    /// were created.
    ///
    /// Loading is **not** atomic. Records are created in order and the first
    /// bad record aborts the load, but missions created from earlier records
    /// stay in the system.
    pub fn load_missions<R: Read>(&mut self, mut reader: R) -> Result<usize> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let mut tokens = bytes
            .split(u8::is_ascii_whitespace)
            .filter(|token| !token.is_empty());
        let count = parse_count(tokens.next())?;

        for index in 0..count {
            let input = next_record(&mut tokens, index)?;
            if input.id <= 0 {
                warn!(record = index + 1, id = input.id, "Rejected mission record");
                return Err(Error::invalid(format!(
                    "record {}: mission id must be positive, got {}",
                    index + 1,
                    input.id
                )));
            }
            if !is_valid_date(&input.launch_date) {
                warn!(record = index + 1, date = %input.launch_date, "Rejected mission record");
                return Err(Error::invalid(format!(
                    "record {}: invalid launch date {:?}",
                    index + 1,
                    input.launch_date
                )));
            }
            self.create_mission(input).inspect_err(
                |e| warn!(record = index + 1, error = %e, "Failed to create mission"),
            )?;
        }

        info!(count, total = self.mission_count(), "Loaded missions");
        Ok(count)
    }
}

fn parse_count(token: Option<&[u8]>) -> Result<usize> {
    let token = token.ok_or_else(|| Error::format("missing mission count"))?;
    let token = std::str::from_utf8(token)
        .map_err(|_| Error::format("mission count is not valid UTF-8"))?;
    let count: i64 = token
        .parse()
        .map_err(|_| Error::format(format!("mission count is not an integer: {token:?}")))?;
    usize::try_from(count)
        .map_err(|_| Error::format(format!("mission count must not be negative, got {count}")))
}

fn next_record<'a>(
    tokens: &mut impl Iterator<Item = &'a [u8]>,
    index: usize,
) -> Result<CreateMissionInput> {
    let record = index + 1;
    let (Some(id), Some(name), Some(launch_date)) = (tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(Error::format(format!("record {record}: expected `id name date`")));
    };
    let field = |token: &'a [u8], what: &str| {
        std::str::from_utf8(token)
            .map_err(|_| Error::format(format!("record {record}: {what} is not valid UTF-8")))
    };
    let (id, name, launch_date) = (
        field(id, "mission id")?,
        field(name, "mission name")?,
        field(launch_date, "launch date")?,
    );
    let id = id.parse().map_err(|_| {
        Error::format(format!("record {record}: mission id is not an integer: {id:?}"))
    })?;
    Ok(CreateMissionInput::new(id, name, launch_date))
}
