//! Toroidal grid geometry and occupancy tracking

use crate::direction::Direction;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest supported grid width (one cell per pixel on a 128 px panel)
pub const MAX_GRID_WIDTH: u8 = 128;

/// Largest supported grid height (one cell per pixel on a 64 px panel)
pub const MAX_GRID_HEIGHT: u8 = 64;

/// Number of cells on the largest supported grid
pub const MAX_CELLS: usize = MAX_GRID_WIDTH as usize * MAX_GRID_HEIGHT as usize;

const OCCUPANCY_WORDS: usize = MAX_CELLS / 32;

/// A grid-addressable cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub x: u8,
    pub y: u8,
}

impl Cell {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// Grid dimensions in cells
///
/// Opposite edges are adjacent: every step wraps modulo the dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Grid {
    width: u8,
    height: u8,
}

impl Grid {
    /// Create a grid, or `None` if a dimension is zero or above the maximum
    pub const fn new(width: u8, height: u8) -> Option<Self> {
        if width == 0 || height == 0 || width > MAX_GRID_WIDTH || height > MAX_GRID_HEIGHT {
            None
        } else {
            Some(Self { width, height })
        }
    }

    pub const fn width(&self) -> u8 {
        self.width
    }

    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check whether a cell lies inside the grid
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Move one cell in `direction`, wrapping around the edges
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: wrap(cell.x, dx, self.width),
            y: wrap(cell.y, dy, self.height),
        }
    }

    /// Row-major index of a cell
    pub(crate) fn index(&self, cell: Cell) -> usize {
        cell.y as usize * self.width as usize + cell.x as usize
    }
}

fn wrap(value: u8, delta: i8, modulus: u8) -> u8 {
    (i16::from(value) + i16::from(delta)).rem_euclid(i16::from(modulus)) as u8
}

/// One bit per cell of the largest grid
#[derive(Clone)]
pub struct Occupancy {
    bits: [u32; OCCUPANCY_WORDS],
    count: usize,
}

impl Default for Occupancy {
    fn default() -> Self {
        Self::new()
    }
}

impl Occupancy {
    pub const fn new() -> Self {
        Self {
            bits: [0; OCCUPANCY_WORDS],
            count: 0,
        }
    }

    pub fn clear(&mut self) {
        self.bits = [0; OCCUPANCY_WORDS];
        self.count = 0;
    }

    /// Number of occupied cells
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_set(&self, index: usize) -> bool {
        index < MAX_CELLS && self.bits[index / 32] & (1 << (index % 32)) != 0
    }

    /// Mark a cell occupied. Returns false if it already was.
    pub fn set(&mut self, index: usize) -> bool {
        if index >= MAX_CELLS || self.is_set(index) {
            return false;
        }
        self.bits[index / 32] |= 1 << (index % 32);
        self.count += 1;
        true
    }

    /// Mark a cell free. Returns false if it already was.
    pub fn unset(&mut self, index: usize) -> bool {
        if !self.is_set(index) {
            return false;
        }
        self.bits[index / 32] &= !(1 << (index % 32));
        self.count -= 1;
        true
    }
}
