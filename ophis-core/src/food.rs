//! Food placement

use rand::{Rng, RngCore};

use crate::grid::Cell;
use crate::snake::Snake;

/// Pick a uniformly random free cell by rejection sampling
///
/// Returns `None` when the snake covers the whole grid. Otherwise the loop
/// terminates with probability 1, since at least one cell is free.
pub fn place_food<R: RngCore>(rng: &mut R, snake: &Snake) -> Option<Cell> {
    let grid = snake.grid();
    if snake.len() >= grid.cell_count() {
        return None;
    }

    loop {
        let candidate = Cell::new(
            rng.gen_range(0..grid.width()),
            rng.gen_range(0..grid.height()),
        );
        if !snake.contains(candidate) {
            return Some(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_food_avoids_snake() {
        let grid = Grid::new(4, 4).unwrap();
        let mut snake = Snake::new(grid);
        // Leave only (3, 3) free
        for y in 0..4 {
            for x in 0..4 {
                if (x, y) != (3, 3) {
                    snake.push_head(Cell::new(x, y)).unwrap();
                }
            }
        }

        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(place_food(&mut rng, &snake), Some(Cell::new(3, 3)));
        }
    }

    #[test]
    fn test_full_grid_has_no_food() {
        let grid = Grid::new(2, 2).unwrap();
        let mut snake = Snake::new(grid);
        snake.reset([
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(1, 1),
            Cell::new(0, 1),
        ]);

        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(place_food(&mut rng, &snake), None);
    }

    #[test]
    fn test_food_inside_grid() {
        let grid = Grid::new(54, 32).unwrap();
        let snake = Snake::new(grid);
        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..200 {
            let food = place_food(&mut rng, &snake).unwrap();
            assert!(grid.contains(food));
        }
    }
}
