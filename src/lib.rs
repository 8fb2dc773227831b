//! This crate provides the tape storage primitive for a Turing Machine simulator:
//! a dynamically growing, conceptually unbounded tape addressed by a signed head
//! coordinate, with a read-only capability trait and snapshot persistence.

pub mod snapshot;
pub mod tape;
pub mod types;

/// Re-exports the `Tape` struct and the read-only `ReadTape` trait from the tape module.
pub use tape::{ReadTape, Tape};
/// Re-exports the shared constants, `Direction`, and `TapeError` from the types module.
pub use types::{Direction, TapeError, BLANK_SYMBOL, INITIAL_TAPE_SIZE};
