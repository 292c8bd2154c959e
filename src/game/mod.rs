mod direction;
mod food;
mod grid;
mod rules;
mod scheduler;
mod snake;
mod world;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Coord, Grid};
pub(crate) use self::rules::Blocker;
pub(crate) use self::scheduler::{IntervalTimer, Scheduler};
#[cfg(test)]
pub(crate) use self::scheduler::ManualScheduler;
pub(crate) use self::snake::SnakeError;
pub(crate) use self::world::StepResult;
use self::world::World;
use crate::difficulty::Difficulty;
use crate::highscore::HighScoreStore;
use rand::Rng;
use std::collections::VecDeque;

/// A single game session: the world being simulated, where play stands, and
/// the high score.  All input and all ticks go through here.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Session<S, P, R> {
    world: World<R>,
    state: GameState,
    difficulty: Difficulty,
    high_score: u32,
    scheduler: S,
    store: P,
}

impl<S: Scheduler, P: HighScoreStore, R: Rng> Session<S, P, R> {
    /// Create a session in the `Ready` state on a `grid`, loading the high
    /// score from `store`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a new snake does not fit on `grid`.
    pub(crate) fn new(
        grid: Grid,
        difficulty: Difficulty,
        scheduler: S,
        mut store: P,
        rng: R,
    ) -> Result<Self, SnakeError> {
        let world = World::new(grid, rng)?;
        let high_score = store.load();
        tracing::info!(grid = grid.size(), %difficulty, high_score, "New game session");
        Ok(Session {
            world,
            state: GameState::Ready,
            difficulty,
            high_score,
            scheduler,
            store,
        })
    }

    /// Apply an intent from the input source.  Returns `true` if anything
    /// visible changed.
    pub(crate) fn handle(&mut self, intent: Intent) -> bool {
        tracing::debug!(?intent, state = ?self.state, "Handling intent");
        match intent {
            Intent::Start => self.start(),
            Intent::Pause => self.pause(),
            Intent::TogglePause => self.pause() || self.resume(),
            Intent::Play => match self.state {
                GameState::Ready => self.start(),
                GameState::Playing => self.pause(),
                GameState::Paused => self.resume(),
                GameState::GameOver { .. } => false,
            },
            Intent::Restart => self.restart(),
            Intent::Turn(d) => self.set_direction(d),
            Intent::SetDifficulty(level) => self.set_difficulty(level),
        }
    }

    /// Begin play from `Ready`, or begin a new game from `GameOver`
    pub(crate) fn start(&mut self) -> bool {
        match self.state {
            GameState::Ready => (),
            GameState::GameOver { .. } => self.world.reset(),
            GameState::Playing | GameState::Paused => return false,
        }
        self.state = GameState::Playing;
        self.scheduler.start(self.difficulty.tick_interval());
        tracing::info!(difficulty = %self.difficulty, "Game started");
        true
    }

    pub(crate) fn pause(&mut self) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        self.scheduler.stop();
        self.state = GameState::Paused;
        tracing::info!(score = self.world.score(), "Game paused");
        true
    }

    pub(crate) fn resume(&mut self) -> bool {
        if self.state != GameState::Paused {
            return false;
        }
        self.state = GameState::Playing;
        self.scheduler.start(self.difficulty.tick_interval());
        tracing::info!("Game resumed");
        true
    }

    /// Abandon the current game, whatever its state, and return to `Ready`
    /// with a fresh board
    pub(crate) fn restart(&mut self) -> bool {
        self.scheduler.stop();
        self.world.reset();
        self.state = GameState::Ready;
        tracing::info!("Game restarted");
        true
    }

    /// Buffer a direction for the next tick.  Ignored unless playing, and
    /// ignored if it would reverse the snake.  Nothing visible changes until
    /// the next tick, so this always returns `false`.
    pub(crate) fn set_direction(&mut self, direction: Direction) -> bool {
        if self.state == GameState::Playing && !self.world.turn(direction) {
            tracing::debug!(?direction, "Ignoring reversal");
        }
        false
    }

    /// Choose the difficulty for the next game.  Only allowed before a game
    /// starts or after one ends.
    pub(crate) fn set_difficulty(&mut self, level: Difficulty) -> bool {
        if !matches!(self.state, GameState::Ready | GameState::GameOver { .. })
            || level == self.difficulty
        {
            return false;
        }
        self.difficulty = level;
        tracing::info!(difficulty = %level, "Difficulty changed");
        true
    }

    /// Advance the game by one tick if playing.  Returns `None` if not
    /// playing.
    pub(crate) fn tick(&mut self) -> Option<StepResult> {
        if self.state != GameState::Playing {
            return None;
        }
        let result = self.world.step();
        tracing::debug!(?result, head = %self.world.snake().head(), "Tick");
        match result {
            StepResult::Moved | StepResult::Ate => (),
            StepResult::Collided(blocker) => {
                tracing::info!(score = self.world.score(), %blocker, "Game over");
                self.end_game(false);
            }
            StepResult::Won => {
                tracing::info!(score = self.world.score(), "Board filled; game won");
                self.end_game(true);
            }
        }
        Some(result)
    }

    fn end_game(&mut self, won: bool) {
        self.scheduler.stop();
        self.state = GameState::GameOver { won };
        let score = self.world.score();
        if score > self.high_score {
            self.high_score = score;
            self.store.save(score);
        }
    }
}

impl<S, P, R> Session<S, P, R> {
    pub(crate) fn state(&self) -> GameState {
        self.state
    }

    pub(crate) fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub(crate) fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub(crate) fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub(crate) fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.world.grid(),
            snake: self.world.snake().segments(),
            food: self.world.food(),
            score: self.world.score(),
            high_score: self.high_score,
            state: self.state,
            difficulty: self.difficulty,
            direction: self.world.active_direction(),
            collision: self.world.collision(),
        }
    }
}

/// Where play stands
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameState {
    Ready,
    Playing,
    Paused,
    /// The game has ended.  `won` is `true` if the snake filled the board.
    GameOver { won: bool },
}

/// A request from the player
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Intent {
    Start,
    /// Pause if playing; used when the terminal loses focus
    Pause,
    /// Pause if playing, resume if paused
    TogglePause,
    /// Start if ready, otherwise like `TogglePause`; does nothing once the
    /// game is over
    Play,
    Restart,
    Turn(Direction),
    SetDifficulty(Difficulty),
}

/// A read-only view of a session for drawing
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot<'a> {
    pub(crate) grid: Grid,
    /// The snake's segments, head first
    pub(crate) snake: &'a VecDeque<Coord>,
    pub(crate) food: Option<Coord>,
    pub(crate) score: u32,
    pub(crate) high_score: u32,
    pub(crate) state: GameState,
    pub(crate) difficulty: Difficulty,
    /// The direction the snake moved in on the last tick
    pub(crate) direction: Direction,
    /// What the snake hit, if the game was lost
    pub(crate) collision: Option<Blocker>,
}

#[cfg(test)]
mod tests {
    use super::snake::Snake;
    use super::*;
    use crate::highscore::MemoryStore;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::time::Duration;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    type TestSession = Session<ManualScheduler, MemoryStore, ChaCha12Rng>;

    fn session_with_high_score(high_score: u32) -> TestSession {
        let store = MemoryStore {
            stored: high_score,
            saves: Vec::new(),
        };
        Session::new(
            Grid::new(20),
            Difficulty::Easy,
            ManualScheduler::default(),
            store,
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
        .unwrap()
    }

    fn session() -> TestSession {
        session_with_high_score(0)
    }

    fn coords(cs: &[(i32, i32)]) -> Vec<Coord> {
        cs.iter().copied().map(Coord::from).collect()
    }

    /// Put the snake at `[(10,9), (9,9), (8,9)]` heading right
    fn arrange_scenario(session: &mut TestSession, food: Option<Coord>) {
        let snake = Snake::from_segments(coords(&[(10, 9), (9, 9), (8, 9)]));
        session.world.arrange(snake, Direction::Right, food);
    }

    fn crash_into_wall(session: &mut TestSession) -> StepResult {
        let snake = Snake::from_segments(coords(&[(19, 9), (18, 9), (17, 9)]));
        session.world.arrange(snake, Direction::Right, Some(Coord::new(0, 0)));
        session.tick().unwrap()
    }

    #[test]
    fn initial_state() {
        let s = session_with_high_score(70);
        let snap = s.snapshot();
        assert_eq!(snap.state, GameState::Ready);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.high_score, 70);
        assert_eq!(snap.difficulty, Difficulty::Easy);
        assert_eq!(snap.direction, Direction::Right);
        assert_eq!(Vec::from(snap.snake.clone()), coords(&[(10, 10), (9, 10), (8, 10)]));
        assert!(snap.food.is_some());
        assert!(!s.scheduler().armed());
    }

    #[test]
    fn start_arms_scheduler() {
        let mut s = session();
        assert!(s.handle(Intent::Start));
        assert_eq!(s.state(), GameState::Playing);
        assert_eq!(s.scheduler().interval, Some(Duration::from_millis(200)));
        assert!(!s.handle(Intent::Start));
        assert_eq!(s.scheduler().starts.len(), 1);
    }

    #[test]
    fn tick_ignored_unless_playing() {
        let mut s = session();
        let before = s.snapshot().snake.clone();
        assert_eq!(s.tick(), None);
        assert_eq!(s.snapshot().snake, &before);
        assert!(s.start());
        assert!(s.pause());
        assert_eq!(s.tick(), None);
        assert_eq!(s.snapshot().snake, &before);
    }

    #[test]
    fn pause_and_resume() {
        let mut s = session();
        assert!(!s.handle(Intent::TogglePause));
        assert_eq!(s.state(), GameState::Ready);
        assert!(s.handle(Intent::Start));
        assert!(s.handle(Intent::TogglePause));
        assert_eq!(s.state(), GameState::Paused);
        assert!(!s.scheduler().armed());
        assert_eq!(s.scheduler().stops, 1);
        assert!(s.handle(Intent::TogglePause));
        assert_eq!(s.state(), GameState::Playing);
        assert!(s.scheduler().armed());
        assert_eq!(s.scheduler().starts.len(), 2);
    }

    #[test]
    fn play_follows_state() {
        let mut s = session();
        assert!(s.handle(Intent::Play));
        assert_eq!(s.state(), GameState::Playing);
        assert!(s.handle(Intent::Play));
        assert_eq!(s.state(), GameState::Paused);
        assert!(s.handle(Intent::Play));
        assert_eq!(s.state(), GameState::Playing);
        assert_eq!(s.scheduler().starts.len(), 2);
    }

    #[test]
    fn play_ignored_after_game_over() {
        let mut s = session();
        assert!(s.start());
        let _ = crash_into_wall(&mut s);
        assert_eq!(s.state(), GameState::GameOver { won: false });
        let score = s.snapshot().score;
        assert!(!s.handle(Intent::Play));
        assert_eq!(s.state(), GameState::GameOver { won: false });
        assert_eq!(s.snapshot().score, score);
    }

    #[test]
    fn focus_loss_only_pauses() {
        let mut s = session();
        assert!(s.start());
        assert!(s.handle(Intent::Pause));
        assert_eq!(s.state(), GameState::Paused);
        assert!(!s.handle(Intent::Pause));
        assert_eq!(s.state(), GameState::Paused);
    }

    #[test]
    fn scenario_move() {
        let mut s = session();
        assert!(s.start());
        arrange_scenario(&mut s, Some(Coord::new(0, 0)));
        assert_eq!(s.tick(), Some(StepResult::Moved));
        let snap = s.snapshot();
        assert_eq!(Vec::from(snap.snake.clone()), coords(&[(11, 9), (10, 9), (9, 9)]));
        assert_eq!(snap.score, 0);
        assert_eq!(snap.state, GameState::Playing);
    }

    #[test]
    fn scenario_eat() {
        let mut s = session();
        assert!(s.start());
        arrange_scenario(&mut s, Some(Coord::new(11, 9)));
        assert_eq!(s.tick(), Some(StepResult::Ate));
        let snap = s.snapshot();
        assert_eq!(
            Vec::from(snap.snake.clone()),
            coords(&[(11, 9), (10, 9), (9, 9), (8, 9)])
        );
        assert_eq!(snap.score, 10);
        let food = snap.food.unwrap();
        assert!(!snap.snake.contains(&food));
    }

    #[test]
    fn scenario_wall_sets_high_score() {
        let mut s = session_with_high_score(0);
        assert!(s.start());
        arrange_scenario(&mut s, Some(Coord::new(11, 9)));
        assert_eq!(s.tick(), Some(StepResult::Ate));
        assert_eq!(crash_into_wall(&mut s), StepResult::Collided(Blocker::Wall));
        let snap = s.snapshot();
        assert_eq!(snap.state, GameState::GameOver { won: false });
        assert_eq!(snap.score, 10);
        assert_eq!(snap.high_score, 10);
        assert_eq!(snap.collision, Some(Blocker::Wall));
        assert!(!s.scheduler().armed());
        assert_eq!(s.store.saves, [10]);
    }

    #[test]
    fn scenario_wall_keeps_better_high_score() {
        let mut s = session_with_high_score(50);
        assert!(s.start());
        arrange_scenario(&mut s, Some(Coord::new(11, 9)));
        assert_eq!(s.tick(), Some(StepResult::Ate));
        assert_eq!(crash_into_wall(&mut s), StepResult::Collided(Blocker::Wall));
        assert_eq!(s.snapshot().high_score, 50);
        assert!(s.store.saves.is_empty());
    }

    #[test]
    fn equal_score_is_not_a_record() {
        let mut s = session_with_high_score(10);
        assert!(s.start());
        arrange_scenario(&mut s, Some(Coord::new(11, 9)));
        assert_eq!(s.tick(), Some(StepResult::Ate));
        let _ = crash_into_wall(&mut s);
        assert!(s.store.saves.is_empty());
    }

    #[test]
    fn scenario_self_collision() {
        let mut s = session();
        assert!(s.start());
        let snake = Snake::from_segments(coords(&[(5, 5), (6, 5), (6, 6), (5, 6), (4, 6)]));
        s.world.arrange(snake, Direction::Left, Some(Coord::new(0, 0)));
        assert!(!s.handle(Intent::Turn(Direction::Down)));
        assert_eq!(s.tick(), Some(StepResult::Collided(Blocker::SelfHit)));
        assert_eq!(s.state(), GameState::GameOver { won: false });
        assert_eq!(s.snapshot().snake.len(), 5);
    }

    #[test]
    fn reversal_is_a_no_op() {
        let mut s = session();
        assert!(s.start());
        arrange_scenario(&mut s, Some(Coord::new(0, 0)));
        assert!(!s.handle(Intent::Turn(Direction::Left)));
        assert_eq!(s.world.pending_direction(), Direction::Right);
        assert_eq!(s.tick(), Some(StepResult::Moved));
        assert_eq!(s.snapshot().snake[0], Coord::new(11, 9));
    }

    #[test]
    fn turn_ignored_unless_playing() {
        let mut s = session();
        assert!(!s.handle(Intent::Turn(Direction::Up)));
        assert_eq!(s.world.pending_direction(), Direction::Right);
        assert!(s.start());
        assert!(s.pause());
        assert!(!s.handle(Intent::Turn(Direction::Up)));
        assert_eq!(s.world.pending_direction(), Direction::Right);
    }

    #[test]
    fn turn_applies_on_next_tick() {
        let mut s = session();
        assert!(s.start());
        arrange_scenario(&mut s, Some(Coord::new(0, 0)));
        assert!(!s.handle(Intent::Turn(Direction::Up)));
        assert_eq!(s.snapshot().direction, Direction::Right);
        assert_eq!(s.tick(), Some(StepResult::Moved));
        assert_eq!(s.snapshot().direction, Direction::Up);
        assert_eq!(s.snapshot().snake[0], Coord::new(10, 8));
    }

    #[test]
    fn win_on_full_board() {
        let store = MemoryStore::default();
        let mut s = Session::new(
            Grid::new(4),
            Difficulty::Hard,
            ManualScheduler::default(),
            store,
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
        .unwrap();
        assert!(s.start());
        assert_eq!(s.scheduler().interval, Some(Duration::from_millis(100)));
        // Every cell but (0, 0) is snake; the head at (1, 0) is moving left.
        let mut body = vec![Coord::new(1, 0), Coord::new(2, 0), Coord::new(3, 0)];
        for y in 1..4 {
            if y % 2 == 1 {
                body.extend((0..4).rev().map(|x| Coord::new(x, y)));
            } else {
                body.extend((0..4).map(|x| Coord::new(x, y)));
            }
        }
        // (3,0) -> (3,1) .. (0,1) -> (0,2) .. (3,2) -> (3,3) .. (0,3)
        s.world.arrange(Snake::from_segments(body), Direction::Left, Some(Coord::new(0, 0)));
        assert_eq!(s.tick(), Some(StepResult::Won));
        let snap = s.snapshot();
        assert_eq!(snap.state, GameState::GameOver { won: true });
        assert_eq!(snap.food, None);
        assert_eq!(snap.snake.len(), 16);
        assert_eq!(snap.high_score, 10);
        assert!(!s.scheduler().armed());
        assert_eq!(s.store.saves, [10]);
    }

    #[test]
    fn difficulty_only_between_games() {
        let mut s = session();
        assert!(s.handle(Intent::SetDifficulty(Difficulty::Medium)));
        assert!(!s.handle(Intent::SetDifficulty(Difficulty::Medium)));
        assert!(s.start());
        assert_eq!(s.scheduler().interval, Some(Duration::from_millis(150)));
        assert!(!s.handle(Intent::SetDifficulty(Difficulty::Hard)));
        assert_eq!(s.difficulty(), Difficulty::Medium);
        assert!(s.pause());
        assert!(!s.handle(Intent::SetDifficulty(Difficulty::Hard)));
        assert!(s.resume());
        let _ = crash_into_wall(&mut s);
        assert!(s.handle(Intent::SetDifficulty(Difficulty::Hard)));
        assert!(s.start());
        assert_eq!(s.scheduler().interval, Some(Duration::from_millis(100)));
    }

    #[test]
    fn start_after_game_over_resets() {
        let mut s = session();
        assert!(s.start());
        arrange_scenario(&mut s, Some(Coord::new(11, 9)));
        assert_eq!(s.tick(), Some(StepResult::Ate));
        let _ = crash_into_wall(&mut s);
        assert!(s.start());
        let snap = s.snapshot();
        assert_eq!(snap.state, GameState::Playing);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.high_score, 10);
        assert_eq!(snap.collision, None);
        assert_eq!(Vec::from(snap.snake.clone()), coords(&[(10, 10), (9, 10), (8, 10)]));
    }

    #[test]
    fn restart_from_anywhere() {
        let mut s = session();
        assert!(s.start());
        assert_eq!(s.tick(), Some(StepResult::Moved));
        assert!(s.handle(Intent::Restart));
        assert_eq!(s.state(), GameState::Ready);
        assert!(!s.scheduler().armed());
        assert!(s.start());
        assert!(s.pause());
        assert!(s.handle(Intent::Restart));
        assert_eq!(s.state(), GameState::Ready);
        assert!(!s.scheduler().armed());
        assert_eq!(s.tick(), None);
    }

    #[test]
    fn restart_is_idempotent() {
        let mut s = session();
        assert!(s.start());
        let _ = crash_into_wall(&mut s);
        assert!(s.restart());
        let first_snake = s.snapshot().snake.clone();
        let first_high_score = s.snapshot().high_score;
        for _ in 0..5 {
            assert!(s.restart());
            let snap = s.snapshot();
            assert_eq!(snap.state, GameState::Ready);
            assert_eq!(snap.snake, &first_snake);
            assert_eq!(snap.direction, Direction::Right);
            assert_eq!(snap.score, 0);
            assert_eq!(snap.collision, None);
            assert_eq!(snap.high_score, first_high_score);
            let food = snap.food.unwrap();
            assert!(!snap.snake.contains(&food));
        }
    }

    #[test]
    fn high_score_never_decreases() {
        let mut s = session_with_high_score(0);
        let mut last = 0;
        for eaten in [2, 0, 3, 1] {
            assert!(s.start());
            for i in 0..eaten {
                let snake = Snake::from_segments(coords(&[(5, 2 + i), (4, 2 + i), (3, 2 + i)]));
                s.world.arrange(snake, Direction::Right, Some(Coord::new(6, 2 + i)));
                assert_eq!(s.tick(), Some(StepResult::Ate));
            }
            let _ = crash_into_wall(&mut s);
            let high = s.snapshot().high_score;
            assert!(high >= last);
            assert_eq!(s.snapshot().score % 10, 0);
            last = high;
        }
        assert_eq!(last, 30);
        assert_eq!(s.store.saves, [20, 30]);
    }
}
