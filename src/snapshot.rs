//! This module provides snapshot functionality for persisting a tape mid-run
//! and restoring it later: JSON encoding/decoding of the full tape state
//! (head coordinate and materialized cells), plus save/load to files.

use std::fs;
use std::path::Path;

use crate::tape::Tape;
use crate::types::TapeError;

/// Encodes the tape's full state as a JSON string.
pub fn encode(tape: &Tape) -> Result<String, TapeError> {
    Ok(serde_json::to_string(tape)?)
}

/// Decodes a tape from a JSON string produced by [`encode`].
pub fn decode(content: &str) -> Result<Tape, TapeError> {
    Ok(serde_json::from_str(content)?)
}

/// Saves the tape's state to the file at `path`.
///
/// # Returns
///
/// * `Ok(())` if the snapshot was written successfully.
/// * `Err(TapeError::FileError)` if the file cannot be written.
pub fn save(tape: &Tape, path: &Path) -> Result<(), TapeError> {
    let content = encode(tape)?;

    fs::write(path, content).map_err(|e| {
        TapeError::FileError(format!("Failed to write file {}: {}", path.display(), e))
    })
}

/// Loads a tape from the snapshot file at `path`.
///
/// # Returns
///
/// * `Ok(Tape)` if the file is successfully read and decoded.
/// * `Err(TapeError::FileError)` if the file cannot be read.
/// * `Err(TapeError::Snapshot)` if the content is not a valid snapshot.
pub fn load(path: &Path) -> Result<Tape, TapeError> {
    let content = fs::read_to_string(path).map_err(|e| {
        TapeError::FileError(format!("Failed to read file {}: {}", path.display(), e))
    })?;

    decode(&content)
}
