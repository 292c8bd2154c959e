use super::grid::{Coord, Grid};
use super::snake::Snake;
use std::fmt;

/// What would happen if the snake's head moved to a given cell
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    Blocked(Blocker),
    Eaten,
    Moved,
}

/// What the snake ran into
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Blocker {
    Wall,
    SelfHit,
}

impl fmt::Display for Blocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Blocker::Wall => write!(f, "wall"),
            Blocker::SelfHit => write!(f, "self"),
        }
    }
}

/// Classify a move of `snake`'s head to `new_head`.
///
/// The self check runs against the body as it is before the move, so the
/// tail cell that the snake is about to vacate still counts as occupied.
/// When several outcomes apply, a wall beats the body, and both beat food.
pub(crate) fn evaluate(snake: &Snake, grid: Grid, food: Option<Coord>, new_head: Coord) -> Outcome {
    if !grid.in_bounds(new_head) {
        Outcome::Blocked(Blocker::Wall)
    } else if snake.occupies(new_head) {
        Outcome::Blocked(Blocker::SelfHit)
    } else if food == Some(new_head) {
        Outcome::Eaten
    } else {
        Outcome::Moved
    }
}
