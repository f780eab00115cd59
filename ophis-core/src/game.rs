//! Per-tick game state
//!
//! Holds the snake, the food and the heading, and resolves one move at a
//! time. Resolution order is fixed: food first, then self-collision, then a
//! plain move. Food never lies on the snake, so the first two are exclusive.

use rand::RngCore;

use crate::config::{ConfigError, GameConfig};
use crate::direction::Direction;
use crate::food::place_food;
use crate::grid::{Cell, Grid};
use crate::input::Turn;
use crate::snake::Snake;

/// Result of advancing the snake by one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Head moved and the tail was released
    Moved { head: Cell, tail: Cell },
    /// Head landed on food; the snake grew and new food was placed
    Ate { head: Cell, food: Cell },
    /// Head landed on the body
    Collided { head: Cell },
    /// Snake grew to cover the whole grid
    BoardFull { head: Cell },
}

impl TickOutcome {
    /// Check if this outcome ends the game
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TickOutcome::Collided { .. } | TickOutcome::BoardFull { .. }
        )
    }
}

/// Starting body: a vertical column centred on the grid, listed tail first,
/// with the head on top so the first move (Up) is into free space
pub fn initial_body(grid: Grid, length: u8) -> impl Iterator<Item = Cell> {
    let x = grid.width() / 2;
    let top = grid.height().saturating_sub(length) / 2;
    (0..length).rev().map(move |i| Cell::new(x, top + i))
}

/// Snake, food and heading for one game
pub struct GameState {
    snake: Snake,
    food: Cell,
    direction: Direction,
    initial_length: u8,
}

impl GameState {
    /// Create a freshly reset game
    pub fn new<R: RngCore>(config: &GameConfig, rng: &mut R) -> Result<Self, ConfigError> {
        let grid = config.grid()?;
        if config.initial_length == 0 || config.initial_length >= grid.height() {
            return Err(ConfigError::InvalidInitialLength);
        }

        let mut state = Self {
            snake: Snake::new(grid),
            food: Cell::default(),
            direction: Direction::Up,
            initial_length: config.initial_length,
        };
        state.reset(rng);
        Ok(state)
    }

    /// Build a game from an explicit body (tail first), heading and food
    pub fn from_parts(
        grid: Grid,
        body: &[Cell],
        direction: Direction,
        food: Cell,
        initial_length: u8,
    ) -> Result<Self, ConfigError> {
        let mut snake = Snake::new(grid);
        if body.is_empty() || !snake.reset(body.iter().copied()) {
            return Err(ConfigError::InvalidBody);
        }
        if !grid.contains(food) || snake.contains(food) {
            return Err(ConfigError::InvalidFood);
        }

        Ok(Self {
            snake,
            food,
            direction,
            initial_length,
        })
    }

    /// Restore the starting body and heading and place new food
    pub fn reset<R: RngCore>(&mut self, rng: &mut R) {
        let grid = self.snake.grid();
        self.snake.reset(initial_body(grid, self.initial_length));
        self.direction = Direction::Up;
        // The starting column never fills the grid
        self.food = place_food(rng, &self.snake).unwrap_or_default();
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn grid(&self) -> Grid {
        self.snake.grid()
    }

    /// Snake length beyond the starting length
    pub fn score(&self) -> u16 {
        self.snake
            .len()
            .saturating_sub(usize::from(self.initial_length)) as u16
    }

    /// Apply a relative turn to the heading
    pub fn turn(&mut self, turn: Turn) {
        self.direction = self.direction.turned(turn);
    }

    /// Cell the head moves into on the next tick
    pub fn next_head(&self) -> Cell {
        // The body is never empty once constructed
        let head = self.snake.head().unwrap_or_default();
        self.grid().step(head, self.direction)
    }

    /// Advance the snake one cell and resolve what it ran into
    pub fn advance<R: RngCore>(&mut self, rng: &mut R) -> TickOutcome {
        let head = self.next_head();

        if head == self.food {
            if self.snake.push_head(head).is_err() {
                return TickOutcome::BoardFull { head };
            }
            return match place_food(rng, &self.snake) {
                Some(food) => {
                    self.food = food;
                    TickOutcome::Ate { head, food }
                }
                None => TickOutcome::BoardFull { head },
            };
        }

        // The tail has not moved yet, so it still counts as occupied
        if self.snake.contains(head) {
            return TickOutcome::Collided { head };
        }

        if self.snake.push_head(head).is_err() {
            return TickOutcome::Collided { head };
        }
        let tail = self.snake.pop_tail().unwrap_or(head);
        TickOutcome::Moved { head, tail }
    }
}
