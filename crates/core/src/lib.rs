//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the complete 2048 rule engine. It has **no
//! dependencies** on UI, terminal or I/O, which keeps it:
//!
//! - **Deterministic**: the same seed produces the same game
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: runs behind a terminal, a GUI or a headless harness
//!
//! # Module Structure
//!
//! - [`cell`]: empty-or-occupied slot with merge arithmetic
//! - [`grid`]: fixed-shape board, the slide-and-merge algorithm and spawning
//! - [`position`]: immutable game state with lineage and game-over detection
//! - [`session`]: the facade front ends drive
//! - [`spawn`]: starting values bundled with the source of randomness
//! - [`rng`]: small seedable generator for reproducible games
//! - [`snapshot`]: render-ready copy of a session
//!
//! # Game Rules
//!
//! - Every move pushes all tiles towards one edge
//! - Two equal tiles that meet merge into one of double value, scoring that value
//! - A tile produced by a merge does not merge again in the same move
//! - A move that changes nothing is rejected: no score, no spawn
//! - Every accepted move spawns one tile drawn from the starting values
//! - The game is over when no direction changes the grid
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{EngineError, Grid, Session, SimpleRng};
//! use tui_2048_core::types::Direction;
//!
//! let grid = Grid::from_rows(&[[2, 2, 4, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
//! let mut session = Session::from_grid(grid, &[2, 4], SimpleRng::new(1)).unwrap();
//!
//! assert_eq!(session.apply_move(Direction::Left), Ok(4));
//! assert_eq!(session.score(), 4);
//!
//! // Sliding into a wall that is already packed does nothing.
//! let mut stuck = Session::from_grid(
//!     Grid::from_rows(&[[2, 4], [4, 2]]).unwrap(),
//!     &[2],
//!     SimpleRng::new(1),
//! )
//! .unwrap();
//! assert_eq!(stuck.apply_move(Direction::Left), Err(EngineError::NoMove));
//! assert!(stuck.is_over());
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod position;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use cell::Cell;
pub use error::{EngineError, Result};
pub use grid::{compact_line, Grid};
pub use position::Position;
pub use rng::SimpleRng;
pub use session::Session;
pub use snapshot::GameSnapshot;
pub use spawn::{validate_starting_values, TileSpawner};
