//! The machine's memory: a row of byte cells that starts with one zero cell
//! and grows to the right on demand.

/// Zeroed cells allocated ahead of the high-water mark at a time.
const CHUNK: usize = 256;

/// Growable byte tape.
///
/// The backing buffer is zeroed a chunk at a time, while `high_water` counts
/// the cells that have actually been materialized. Only
/// `cells[..high_water]` is part of the tape. A cell comes into existence
/// only when the pointer steps exactly one past the current end; any other
/// out-of-range index is a bug in the caller, never a reason to grow.
#[derive(Debug, Clone)]
pub struct Tape {
    cells: Vec<u8>,
    high_water: usize,
}

impl PartialEq for Tape {
    fn eq(&self, other: &Self) -> bool {
        self.cells() == other.cells()
    }
}

impl Eq for Tape {}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// A tape of one zero cell.
    pub fn new() -> Self {
        Self {
            cells: vec![0; CHUNK],
            high_water: 1,
        }
    }

    /// Number of materialized cells.
    pub fn len(&self) -> usize {
        self.high_water
    }

    /// A tape always holds at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The materialized cells, from index 0 to the high-water mark.
    pub fn cells(&self) -> &[u8] {
        &self.cells[..self.high_water]
    }

    /// Value of a materialized cell.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.cells().get(index).copied()
    }

    /// Make sure the cell at `index` exists, growing by one cell if `index`
    /// is exactly the current end. Returns `false` for any index further out.
    pub fn ensure(&mut self, index: usize) -> bool {
        if index < self.high_water {
            return true;
        }
        if index == self.high_water {
            if self.high_water == self.cells.len() {
                self.cells.resize(self.cells.len() + CHUNK, 0);
            }
            self.high_water += 1;
            debug_assert!(self.high_water <= self.cells.len());
            return true;
        }
        false
    }

    pub(crate) fn cell(&self, index: usize) -> u8 {
        debug_assert!(index < self.high_water, "read of unmaterialized cell {index}");
        self.cells[index]
    }

    pub(crate) fn set(&mut self, index: usize, value: u8) {
        debug_assert!(index < self.high_water, "write to unmaterialized cell {index}");
        self.cells[index] = value;
    }

    /// Add one to a cell, wrapping 255 to 0. Returns the new value.
    pub(crate) fn increment(&mut self, index: usize) -> u8 {
        debug_assert!(index < self.high_water);
        let cell = &mut self.cells[index];
        *cell = cell.wrapping_add(1);
        *cell
    }

    /// Subtract one from a cell, wrapping 0 to 255. Returns the new value.
    pub(crate) fn decrement(&mut self, index: usize) -> u8 {
        debug_assert!(index < self.high_water);
        let cell = &mut self.cells[index];
        *cell = cell.wrapping_sub(1);
        *cell
    }
}
