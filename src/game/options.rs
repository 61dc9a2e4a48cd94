use super::cell::Cell;
use super::direction::Direction;
use super::snake::Snake;
use crate::consts;
use std::collections::HashSet;
use thiserror::Error;

/// Parameters for setting up a game: the grid dimension, the cells initially
/// occupied by the snake (head first), and the direction the snake starts out
/// moving in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Options {
    pub(crate) grid_size: u16,
    pub(crate) snake: Vec<Cell>,
    pub(crate) direction: Direction,
}

impl Options {
    /// Standard setup for a `grid_size` × `grid_size` grid: a single-cell
    /// snake at the center, heading east.
    pub(crate) fn new(grid_size: u16) -> Options {
        let center = Cell::new(grid_size / 2, grid_size / 2);
        Options {
            grid_size,
            snake: vec![center],
            direction: Direction::East,
        }
    }

    /// Validate the options and build the starting snake from them.
    ///
    /// The grid must be nonempty, every snake cell must lie on it, no cell
    /// may appear twice, and at least one cell must be left over for food.
    pub(crate) fn new_snake(&self) -> Result<Snake, OptionsError> {
        if self.grid_size == 0 {
            return Err(OptionsError::ZeroGridSize);
        }
        let Some((&head, rest)) = self.snake.split_first() else {
            return Err(OptionsError::EmptySnake);
        };
        let mut seen = HashSet::with_capacity(self.snake.len());
        for &cell in &self.snake {
            if cell.x >= self.grid_size || cell.y >= self.grid_size {
                return Err(OptionsError::OutOfBounds(cell));
            }
            if !seen.insert(cell) {
                return Err(OptionsError::Overlap(cell));
            }
        }
        if self.snake.len() >= self.area() {
            return Err(OptionsError::NoRoomForFood);
        }
        Ok(Snake::new(head, rest))
    }

    fn area(&self) -> usize {
        usize::from(self.grid_size) * usize::from(self.grid_size)
    }
}

impl Default for Options {
    fn default() -> Options {
        Options::new(consts::GRID_SIZE)
    }
}

/// Error returned when game options fail validation
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum OptionsError {
    #[error("grid size must be positive")]
    ZeroGridSize,
    #[error("initial snake must occupy at least one cell")]
    EmptySnake,
    #[error("initial snake cell {0} lies outside the grid")]
    OutOfBounds(Cell),
    #[error("initial snake occupies cell {0} more than once")]
    Overlap(Cell),
    #[error("initial snake leaves no cell free for food")]
    NoRoomForFood,
}
