//! Snake body
//!
//! The body is an ordered sequence of cells with the oldest segment at the
//! front and the head at the back. An occupancy bitset is kept in lockstep
//! with the sequence so membership tests are O(1).

use heapless::Deque;

use crate::grid::{Cell, Grid, Occupancy, MAX_CELLS};

/// Snake body with O(1) head push, tail pop and membership
pub struct Snake {
    body: Deque<Cell, MAX_CELLS>,
    occupied: Occupancy,
    grid: Grid,
}

impl Snake {
    /// Create an empty snake on `grid`
    pub const fn new(grid: Grid) -> Self {
        Self {
            body: Deque::new(),
            occupied: Occupancy::new(),
            grid,
        }
    }

    /// Replace the body with `cells`, listed tail first
    ///
    /// Returns false and leaves the snake empty if a cell is outside the grid
    /// or listed twice.
    pub fn reset(&mut self, cells: impl IntoIterator<Item = Cell>) -> bool {
        self.clear();
        for cell in cells {
            if self.push_head(cell).is_err() {
                self.clear();
                return false;
            }
        }
        true
    }

    pub fn clear(&mut self) {
        self.body.clear();
        self.occupied.clear();
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Newest segment
    pub fn head(&self) -> Option<Cell> {
        self.body.back().copied()
    }

    /// Oldest segment
    pub fn tail(&self) -> Option<Cell> {
        self.body.front().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Check whether a cell is part of the body
    pub fn contains(&self, cell: Cell) -> bool {
        self.grid.contains(cell) && self.occupied.is_set(self.grid.index(cell))
    }

    /// Append a new head
    ///
    /// Fails without modifying the body if the cell is outside the grid or
    /// already occupied, so the body never holds duplicates.
    pub fn push_head(&mut self, cell: Cell) -> Result<(), Cell> {
        if !self.grid.contains(cell) || self.contains(cell) {
            return Err(cell);
        }
        self.body.push_back(cell)?;
        self.occupied.set(self.grid.index(cell));
        Ok(())
    }

    /// Remove and return the oldest segment
    pub fn pop_tail(&mut self) -> Option<Cell> {
        let tail = self.body.pop_front()?;
        self.occupied.unset(self.grid.index(tail));
        Some(tail)
    }

    /// Iterate from tail to head
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
