//! Input module (engine-facing).
//!
//! Translates what a player types into [`crate::types::GameAction`]s. Two
//! front ends are supported: raw `crossterm` key events for the full-screen
//! runner, and whole text lines for the plain line-mode runner.
//!
//! Every physical key maps to at most one action, so no two keys can ever
//! collapse onto the same direction by accident.

pub mod line;
pub mod map;

pub use tui_2048_types as types;

pub use line::{parse_line, LineCommand};
pub use map::{handle_key_event, should_quit};
