use std::fmt;

/// A square of the play grid.  `(0, 0)` is the top-left corner; `x` grows
/// eastward and `y` grows southward.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: u16,
    pub(crate) y: u16,
}

impl Cell {
    pub(crate) fn new(x: u16, y: u16) -> Cell {
        Cell { x, y }
    }

    /// Iterate over every cell of a `size` × `size` grid in row-major order.
    pub(crate) fn grid(size: u16) -> impl Iterator<Item = Cell> {
        (0..size).flat_map(move |y| (0..size).map(move |x| Cell::new(x, y)))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
