//! This module defines the shared constants and types used by the tape:
//! the blank symbol, the initial tape size, head movement directions, and
//! the error type returned by snapshot operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The symbol held by every tape cell that has not been explicitly written.
pub const BLANK_SYMBOL: u8 = b'$';
/// The number of cells a freshly created tape materializes up front.
pub const INITIAL_TAPE_SIZE: usize = 1000;

/// Represents the possible directions a tape head can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left.
    Left,
    /// Move the head one position to the right.
    Right,
    /// Keep the head in the same position.
    Stay,
}

/// Represents errors that can occur while persisting or restoring a tape.
///
/// The tape operations themselves are total functions and never return these;
/// only the snapshot boundary does.
#[derive(Debug, Error)]
pub enum TapeError {
    /// Indicates that a snapshot could not be encoded or decoded.
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
    /// Indicates an error related to file system operations, such as reading
    /// or writing snapshot files.
    #[error("File error: {0}")]
    FileError(String),
}
