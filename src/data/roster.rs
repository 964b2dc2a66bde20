//! Roster loading from JSON. The engine itself never authors fighter records;
//! this loader exists for embedding callers and tests that want a file-backed
//! roster instead of a database.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::data::fighter::Fighter;

pub const DEFAULT_ROSTER_PATH: &str = "data/roster.json";

#[derive(Debug)]
pub enum RosterError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// One or more profiles carry gamified attributes outside 0-100.
    Invalid(Vec<String>),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "roster read failed: {err}"),
            Self::Parse(err) => write!(f, "roster parse failed: {err}"),
            Self::Invalid(issues) => {
                write!(f, "roster has invalid profiles: {}", issues.join(", "))
            }
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

/// Load and validate a fighter roster. Rejects the whole file when any
/// profile violates the 0-100 attribute invariant.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<Fighter>, RosterError> {
    let raw = fs::read_to_string(path).map_err(RosterError::Io)?;
    let fighters: Vec<Fighter> = serde_json::from_str(&raw).map_err(RosterError::Parse)?;

    let issues: Vec<String> = fighters
        .iter()
        .flat_map(|fighter| {
            fighter
                .attribute_violations()
                .into_iter()
                .map(move |violation| format!("{} {violation}", fighter.name))
        })
        .collect();
    if !issues.is_empty() {
        return Err(RosterError::Invalid(issues));
    }

    Ok(fighters)
}
