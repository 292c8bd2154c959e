use super::grid::{Coord, Grid};
use super::snake::Snake;
use crate::consts;
use rand::Rng;

/// The result of trying to place a piece of food
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Placement {
    Food(Coord),
    /// Every attempt landed on the snake; the board is treated as full.
    Full,
}

impl Placement {
    pub(crate) fn food(self) -> Option<Coord> {
        match self {
            Placement::Food(c) => Some(c),
            Placement::Full => None,
        }
    }
}

/// Pick a random cell of `grid` not occupied by `snake`.
///
/// Cells are drawn uniformly from the whole grid, and occupied draws are
/// rejected, for at most [`FOOD_PLACEMENT_ATTEMPTS`][consts::FOOD_PLACEMENT_ATTEMPTS]
/// draws.  This means that a nearly-full board can be reported as
/// [`Placement::Full`] while a few cells are still free.  A board the snake
/// covers completely is reported as full without drawing.
pub(crate) fn place<R: Rng>(rng: &mut R, snake: &Snake, grid: Grid) -> Placement {
    if snake.len() >= grid.cell_count() {
        return Placement::Full;
    }
    let n = i32::from(grid.size());
    std::iter::repeat_with(|| Coord::new(rng.random_range(0..n), rng.random_range(0..n)))
        .take(consts::FOOD_PLACEMENT_ATTEMPTS)
        .find(|&c| !snake.occupies(c))
        .map_or(Placement::Full, Placement::Food)
}
