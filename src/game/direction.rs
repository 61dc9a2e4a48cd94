use super::cell::Cell;

/// A compass direction of travel on the grid.  North is towards the top of
/// the grid (decreasing `y`), east towards increasing `x`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Return the cell one step from `cell` in this direction, or `None` if
    /// the step would leave a `grid_size` × `grid_size` grid.
    pub(crate) fn step(self, cell: Cell, grid_size: u16) -> Option<Cell> {
        let Cell { mut x, mut y } = cell;
        match self {
            Direction::North => {
                y = y.checked_sub(1)?;
            }
            Direction::East => {
                x = x.checked_add(1).filter(|&x2| x2 < grid_size)?;
            }
            Direction::South => {
                y = y.checked_add(1).filter(|&y2| y2 < grid_size)?;
            }
            Direction::West => {
                x = x.checked_sub(1)?;
            }
        }
        Some(Cell { x, y })
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}
