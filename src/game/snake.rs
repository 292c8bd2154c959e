use super::direction::Direction;
use super::grid::{Coord, Grid};
use std::collections::VecDeque;
use thiserror::Error;

/// The snake
///
/// The body is stored head first.  It is never empty, and no two segments
/// share a cell; the collision rules guarantee the latter, since a move onto
/// an occupied cell ends the game before the snake is advanced.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    body: VecDeque<Coord>,
}

impl Snake {
    /// Create a horizontal snake of `length` segments with its head at `head`
    /// and its body trailing off towards the left edge of `grid`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `length` is zero or if the body would not fit between
    /// `head` and the left edge of the grid.
    pub(crate) fn new(head: Coord, length: usize, grid: Grid) -> Result<Snake, SnakeError> {
        let too_long = SnakeError::TooLong {
            length,
            size: grid.size(),
        };
        if length == 0 || !grid.in_bounds(head) {
            return Err(too_long);
        }
        let body = std::iter::successors(Some(head), |&c| Some(Direction::Left.step(c)))
            .take(length)
            .collect::<VecDeque<_>>();
        if body.iter().all(|&c| grid.in_bounds(c)) {
            Ok(Snake { body })
        } else {
            Err(too_long)
        }
    }

    /// Construct a snake from explicit segments, head first
    #[cfg(test)]
    pub(crate) fn from_segments<I: IntoIterator<Item = Coord>>(segments: I) -> Snake {
        let body = segments.into_iter().collect::<VecDeque<_>>();
        assert!(!body.is_empty(), "snake must have at least one segment");
        Snake { body }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Coord {
        // The body is never empty.
        self.body[0]
    }

    /// Return the positions of the snake's segments, head first
    pub(crate) fn segments(&self) -> &VecDeque<Coord> {
        &self.body
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    /// Return where the head would be after moving one cell in `direction`
    pub(crate) fn proposed_head(&self, direction: Direction) -> Coord {
        direction.step(self.head())
    }

    /// Move the snake so that its head is at `new_head`.  Unless `grew` is
    /// true, the tail segment is dropped so that the length stays the same.
    pub(crate) fn advance(&mut self, new_head: Coord, grew: bool) {
        self.body.push_front(new_head);
        if !grew {
            let _ = self.body.pop_back();
        }
    }

    pub(crate) fn occupies(&self, c: Coord) -> bool {
        self.body.contains(&c)
    }
}

#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub(crate) enum SnakeError {
    #[error("a snake of length {length} does not fit on a {size}x{size} grid")]
    TooLong { length: usize, size: u16 },
}
