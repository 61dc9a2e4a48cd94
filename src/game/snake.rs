use super::cell::Cell;
use std::collections::VecDeque;

/// The snake's body, an ordered sequence of distinct cells.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The cell occupied by the snake's head
    pub(super) head: Cell,

    /// The cells of the rest of the body, with the tail at the front and the
    /// cell adjacent to the head at the end
    pub(super) body: VecDeque<Cell>,
}

impl Snake {
    /// Create a snake from its head and the remaining cells in head-to-tail
    /// order.
    pub(crate) fn new(head: Cell, rest: &[Cell]) -> Snake {
        Snake {
            head,
            body: rest.iter().rev().copied().collect(),
        }
    }

    /// Return the cell occupied by the snake's head
    pub(crate) fn head(&self) -> Cell {
        self.head
    }

    /// Return the cells of the snake's body, tail first
    pub(crate) fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    /// Return the number of cells the snake occupies
    pub(crate) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Iterate over all of the snake's cells, head first
    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        std::iter::once(self.head).chain(self.body.iter().rev().copied())
    }

    /// Does the snake occupy `cell`?
    pub(crate) fn contains(&self, cell: Cell) -> bool {
        self.head == cell || self.body.contains(&cell)
    }

    /// Would a head moving onto `cell` run into the body?  On a non-growing
    /// move the tail cell is vacated by that same move, so stepping onto it is
    /// not a collision.
    pub(super) fn hits(&self, cell: Cell, growing: bool) -> bool {
        if growing {
            cell == self.head || self.body.contains(&cell)
        } else if self.body.is_empty() {
            false
        } else {
            cell == self.head || self.body.iter().skip(1).any(|&c| c == cell)
        }
    }

    /// Move the snake's head onto `new_head`, dropping the tail unless the
    /// snake is growing by one cell.
    pub(super) fn advance(&mut self, new_head: Cell, growing: bool) {
        self.body.push_back(self.head);
        self.head = new_head;
        if !growing {
            let _ = self.body.pop_front();
        }
    }
}
