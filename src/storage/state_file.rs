//! JSON files for progression states and member lists.

use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

use crate::leaderboard::Member;
use crate::progression::types::{ProgressionError, UserProgressionState};

/// Load a single user's progression state.
///
/// A file that parses but breaks a state invariant is rejected.
pub fn load_state(path: &Path) -> Result<UserProgressionState, StorageError> {
    let state: UserProgressionState = read_json(path)?;
    state.validate()?;
    Ok(state)
}

/// Save a single user's progression state.
pub fn save_state(path: &Path, state: &UserProgressionState) -> Result<(), StorageError> {
    write_json(path, state)
}

/// Load a member list for the leaderboard.
pub fn load_members(path: &Path) -> Result<Vec<Member>, StorageError> {
    let members: Vec<Member> = read_json(path)?;
    for member in &members {
        member.state.validate().map_err(|e| {
            tracing::warn!(member = %member.name, "Rejected member state: {}", e);
            e
        })?;
    }
    Ok(members)
}

/// Save a member list.
pub fn save_members(path: &Path, members: &[Member]) -> Result<(), StorageError> {
    write_json(path, &members)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| StorageError::IoError(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| StorageError::ParseError(e.to_string()))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StorageError::IoError(e.to_string()))?;
    }

    let content = serde_json::to_string_pretty(value)
        .map_err(|e| StorageError::SerializeError(e.to_string()))?;

    // Write to a sibling file first so a crash never leaves half a state.
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, content).map_err(|e| StorageError::IoError(e.to_string()))?;
    std::fs::rename(&tmp, path).map_err(|e| StorageError::IoError(e.to_string()))?;

    Ok(())
}

/// State file errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Invalid state: {0}")]
    InvalidState(#[from] ProgressionError),
}
