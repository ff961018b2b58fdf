//! Core types module - shared data structures and constants
//!
//! This crate defines the vocabulary shared by the rule engine, the input
//! mapping and the terminal renderer. Everything here is plain data with no
//! external dependencies.
//!
//! # Grid Geometry
//!
//! - **Shape**: `rows x cols`, both non-zero, fixed for the lifetime of a game
//! - **Coord**: `(row, col)`, 0-indexed, row 0 is the top, col 0 is the left
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 4 | Classic board height |
//! | `DEFAULT_COLS` | 4 | Classic board width |
//! | `DEFAULT_STARTING_VALUES` | `[2, 4]` | Values a spawned tile may take |
//! | `STARTING_COUNT` | 2 | Tiles placed on a fresh board |
//! | `TICK_MS` | 16 | Input poll interval of the terminal runner |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, Shape};
//!
//! let dir = Direction::from_str("L").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert!(dir.is_horizontal());
//!
//! let action = GameAction::from_str("up").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! let shape = Shape::new(4, 4);
//! assert_eq!(shape.area(), 16);
//! ```

use std::fmt;

/// Classic board height.
pub const DEFAULT_ROWS: usize = 4;

/// Classic board width.
pub const DEFAULT_COLS: usize = 4;

/// Values a spawned tile may take when nothing else is configured.
pub const DEFAULT_STARTING_VALUES: [u32; 2] = [2, 4];

/// Number of tiles placed on a freshly created grid.
pub const STARTING_COUNT: usize = 2;

/// Input poll interval of the terminal runner (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    pub const fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// Check whether a coordinate lies inside this shape.
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.area()).map(move |i| Coord::new(i / cols, i % cols))
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A cell coordinate: `row` counts down from the top, `col` right from the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// The four directions tiles can be pushed in
///
/// - **Up** / **Down**: every column is one line
/// - **Left** / **Right**: every row is one line
///
/// Tiles slide towards the named edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order game-over probing tries them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a direction (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r".
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("u"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("Right"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Left and right moves operate on rows.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Right and down moves traverse their lines from the far end.
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Actions a front end can request
///
/// Both the keyboard mapping and the line-mode parser produce these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Push every tile towards one edge
    Move(Direction),
    /// Start over with a fresh board
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("d"), Some(GameAction::Move(Direction::Down)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "restart" | "new" => Some(GameAction::Restart),
            other => Direction::from_str(other).map(GameAction::Move),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Restart => "restart",
        }
    }
}
