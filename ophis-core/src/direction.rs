//! Snake heading

use crate::input::Turn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Heading of the snake, in clockwise order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions, indexed clockwise from Up
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit vector (dx, dy) with y growing downwards
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Direction for a clockwise index, taken modulo 4
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % 4) as usize]
    }

    /// Rotate by a relative turn. Reversal is impossible by construction.
    pub const fn turned(self, turn: Turn) -> Self {
        match turn {
            Turn::None => self,
            Turn::Clockwise => Self::from_index(self.index() + 1),
            Turn::CounterClockwise => Self::from_index(self.index() + 3),
        }
    }
}
