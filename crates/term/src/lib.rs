//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. The board is drawn into a plain
//! framebuffer of styled characters, which is then diffed against the previous
//! frame and flushed to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Make the view testable without a terminal (see [`GameView::render`])
//! - Control tile proportions precisely (each tile is a fixed block of chars)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{tile_style, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
