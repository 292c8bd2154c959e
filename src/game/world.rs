use super::direction::Direction;
use super::food;
use super::grid::{Coord, Grid};
use super::rules::{self, Blocker, Outcome};
use super::snake::{Snake, SnakeError};
use crate::consts;
use rand::Rng;

/// Everything that a single tick of the simulation reads or changes: the
/// snake, the food, the score, and the two direction slots.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct World<R> {
    rng: R,
    grid: Grid,
    /// The snake as it is after every reset
    start: Snake,
    snake: Snake,
    food: Option<Coord>,
    score: u32,
    /// The direction applied on the most recent tick
    active: Direction,
    /// The direction to apply on the next tick
    pending: Direction,
    /// What the snake hit, if the last step ended the game that way
    collision: Option<Blocker>,
}

impl<R: Rng> World<R> {
    /// # Errors
    ///
    /// Returns `Err` if a snake of the initial length does not fit at the
    /// center of `grid`.
    pub(crate) fn new(grid: Grid, rng: R) -> Result<World<R>, SnakeError> {
        let start = Snake::new(grid.center(), consts::INITIAL_SNAKE_LENGTH, grid)?;
        let mut world = World {
            rng,
            grid,
            snake: start.clone(),
            start,
            food: None,
            score: 0,
            active: Direction::default(),
            pending: Direction::default(),
            collision: None,
        };
        world.reset();
        Ok(world)
    }

    /// Put the snake back at the center of the grid facing right, zero the
    /// score, and place a new piece of food.
    pub(crate) fn reset(&mut self) {
        self.snake = self.start.clone();
        self.active = Direction::default();
        self.pending = Direction::default();
        self.score = 0;
        self.collision = None;
        self.food = food::place(&mut self.rng, &self.snake, self.grid).food();
    }

    /// Run one tick of the simulation
    pub(crate) fn step(&mut self) -> StepResult {
        self.active = self.pending;
        let new_head = self.snake.proposed_head(self.active);
        match rules::evaluate(&self.snake, self.grid, self.food, new_head) {
            Outcome::Blocked(blocker) => {
                self.collision = Some(blocker);
                StepResult::Collided(blocker)
            }
            Outcome::Eaten => {
                self.snake.advance(new_head, true);
                self.score += consts::POINTS_PER_FOOD;
                self.food = food::place(&mut self.rng, &self.snake, self.grid).food();
                if self.food.is_none() {
                    StepResult::Won
                } else {
                    StepResult::Ate
                }
            }
            Outcome::Moved => {
                self.snake.advance(new_head, false);
                StepResult::Moved
            }
        }
    }
}

impl<R> World<R> {
    /// Buffer `direction` for the next tick.  A request to reverse into the
    /// direction applied on the last tick is dropped.  Returns `true` if the
    /// request was accepted.
    pub(crate) fn turn(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.active) {
            false
        } else {
            self.pending = direction;
            true
        }
    }

    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn food(&self) -> Option<Coord> {
        self.food
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn active_direction(&self) -> Direction {
        self.active
    }

    #[cfg(test)]
    pub(crate) fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub(crate) fn collision(&self) -> Option<Blocker> {
        self.collision
    }

    /// Replace the snake, direction & food for a test scenario
    #[cfg(test)]
    pub(crate) fn arrange(&mut self, snake: Snake, direction: Direction, food: Option<Coord>) {
        self.snake = snake;
        self.active = direction;
        self.pending = direction;
        self.food = food;
    }
}

/// The result of a single tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum StepResult {
    /// The snake moved without eating.
    Moved,
    /// The snake ate and grew, and new food was placed.
    Ate,
    /// The snake hit something; it was not moved.
    Collided(Blocker),
    /// The snake ate and there was nowhere left to place food.
    Won,
}
