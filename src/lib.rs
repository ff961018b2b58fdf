//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates under one `tui_2048::{core,input,term,types}`
//! namespace and adds the runner's configuration layer.

pub mod config;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

pub use config::GameConfig;
