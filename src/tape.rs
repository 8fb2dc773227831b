//! This module defines the `Tape` struct, a dynamically growing, conceptually
//! unbounded tape with a read/write head. The head is a signed coordinate:
//! moving it never fails, and writing beyond the materialized cells grows the
//! buffer in the overflowed direction.

use serde::{Deserialize, Serialize};

use crate::types::{Direction, BLANK_SYMBOL, INITIAL_TAPE_SIZE};

/// A read-only view of a tape, supporting head movement and reads but no writes.
///
/// Useful for components that must traverse the tape without being able to
/// mutate it, such as a verifier or a lookahead scanner. Implemented by `Tape`.
pub trait ReadTape {
    /// Moves the head one cell to the right.
    fn move_right(&mut self);
    /// Moves the head one cell to the left.
    fn move_left(&mut self);
    /// Returns the symbol under the head.
    fn read_symbol(&self) -> u8;
}

/// Represents an "infinite" tape for a Turing machine with a head control.
///
/// The tape owns a contiguous buffer of symbols and a signed head coordinate.
/// The head may wander arbitrarily far beyond the buffer in either direction;
/// reads outside the materialized cells return [`BLANK_SYMBOL`], and writes
/// outside them grow the buffer first. Growth may reallocate the buffer and
/// shift the mapping between the head coordinate and physical indices, so
/// callers must never cache physical indices across writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tape {
    head: i64,
    cells: Vec<u8>,
}

impl Tape {
    /// Creates a new tape with [`INITIAL_TAPE_SIZE`] blank cells and the head
    /// positioned at the midpoint, so initial excursions in either direction
    /// are symmetric.
    pub fn new() -> Self {
        Self {
            head: (INITIAL_TAPE_SIZE / 2) as i64,
            cells: vec![BLANK_SYMBOL; INITIAL_TAPE_SIZE],
        }
    }

    /// Creates a new tape seeded with `input`, written left to right starting
    /// at the head position. The head is left on the first input symbol.
    ///
    /// Input bytes are stored verbatim; the tape does not interpret symbols,
    /// so a blank byte in the input is indistinguishable from an unwritten cell.
    pub fn with_input(input: &[u8]) -> Self {
        let mut tape = Self::new();

        for &symbol in input {
            tape.write_symbol(symbol);
            tape.move_right();
        }

        // Seeding only ever appends to the right, which never re-anchors,
        // so the starting coordinate is still the initial midpoint.
        tape.head = (INITIAL_TAPE_SIZE / 2) as i64;
        tape
    }

    /// Moves the head one cell to the right. Never touches the buffer.
    pub fn move_right(&mut self) {
        self.head += 1;
    }

    /// Moves the head one cell to the left. The head coordinate may become
    /// negative; the buffer is untouched until the next write there.
    pub fn move_left(&mut self) {
        self.head -= 1;
    }

    /// Moves the head according to `direction`. `Stay` is a no-op.
    pub fn move_head(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Stay => {}
        }
    }

    /// Returns the symbol under the head, or [`BLANK_SYMBOL`] if the head is
    /// outside the materialized cells. Never grows the buffer.
    pub fn read_symbol(&self) -> u8 {
        if !self.is_head_on_buffer() {
            return BLANK_SYMBOL;
        }

        self.cells[self.head as usize]
    }

    /// Writes `symbol` at the head position, growing the buffer first if the
    /// head is outside the materialized cells. Always succeeds.
    pub fn write_symbol(&mut self, symbol: u8) {
        if !self.is_head_on_buffer() {
            self.increase_tape_size();
        }

        let index = self.head as usize;
        self.cells[index] = symbol;
    }

    /// Returns the current head coordinate.
    pub fn head(&self) -> i64 {
        self.head
    }

    /// Returns the number of materialized cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cells are materialized.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the materialized cells as a slice.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Returns the blank symbol used by this tape.
    pub fn blank(&self) -> u8 {
        BLANK_SYMBOL
    }

    /// Returns the symbols at coordinates `head - radius ..= head + radius`,
    /// with [`BLANK_SYMBOL`] standing in for unmaterialized cells.
    ///
    /// This is the rendering primitive for displaying the tape around the
    /// head; it never grows the buffer.
    pub fn window(&self, radius: i64) -> Vec<u8> {
        (self.head - radius..=self.head + radius)
            .map(|coordinate| {
                if coordinate >= 0 && coordinate < self.cells.len() as i64 {
                    self.cells[coordinate as usize]
                } else {
                    BLANK_SYMBOL
                }
            })
            .collect()
    }

    fn is_head_on_buffer(&self) -> bool {
        self.head >= 0 && self.head < self.cells.len() as i64
    }

    /// Grows the buffer so the head coordinate becomes addressable.
    ///
    /// The extension doubles the overflow magnitude (or matches the current
    /// length, whichever is larger), which amortizes repeated growth when the
    /// head sweeps monotonically in one direction.
    fn increase_tape_size(&mut self) {
        if self.is_head_on_buffer() {
            return;
        }

        let len = self.cells.len() as i64;

        if self.head < 0 {
            let extension = (2 * self.head.abs()).max(len);

            let mut grown = vec![BLANK_SYMBOL; extension as usize];
            grown.extend_from_slice(&self.cells);
            self.cells = grown;

            // Every old cell shifted right by `extension`; re-anchor the head.
            self.head += extension;
        } else {
            let extension = (2 * (self.head - len + 1)).max(len);
            self.cells.resize((len + extension) as usize, BLANK_SYMBOL);
        }
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadTape for Tape {
    fn move_right(&mut self) {
        Tape::move_right(self)
    }

    fn move_left(&mut self) {
        Tape::move_left(self)
    }

    fn read_symbol(&self) -> u8 {
        Tape::read_symbol(self)
    }
}
