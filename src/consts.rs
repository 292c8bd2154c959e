//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Width & height of the playing field when not set in the configuration
pub(crate) const DEFAULT_GRID_SIZE: u16 = 20;

/// Smallest grid that can hold a freshly-reset snake at its center
pub(crate) const MIN_GRID_SIZE: u16 = 4;

/// Largest grid that fits inside [`DISPLAY_SIZE`] along with the score bar,
/// the key help line, and the border
pub(crate) const MAX_GRID_SIZE: u16 = 20;

/// Number of terminal columns used to draw a single grid cell
pub(crate) const CELL_WIDTH: u16 = 2;

/// Snake length after every reset
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Points awarded for each piece of food eaten
pub(crate) const POINTS_PER_FOOD: u32 = 10;

/// How many random cells food placement tries before giving up and declaring
/// the grid full.  Raising this lowers the odds of a premature win on a
/// crowded board at the cost of a slower worst-case placement.
pub(crate) const FOOD_PLACEMENT_ATTEMPTS: usize = 100;

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: &str = "/\\";

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: &str = "\\/";

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: &str = "<:";

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: &str = ":>";

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: &str = "██";

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: &str = "()";

/// Glyph for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: &str = "××";

/// Style for the snake's body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::LightGreen);

/// Style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected difficulty in the key help line
pub(crate) const SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
