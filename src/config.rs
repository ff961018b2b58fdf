//! Runner configuration.
//!
//! Values come from the environment first and can then be overridden from the
//! command line:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TUI_2048_ROWS` | 4 | Board height |
//! | `TUI_2048_COLS` | 4 | Board width |
//! | `TUI_2048_STARTING_VALUES` | `2,4` | Comma-separated spawn values |
//! | `TUI_2048_SEED` | random | Seed for reproducible games |
//! | `TUI_2048_LOG_PATH` | none | File to write tracing output to |
//!
//! Unparsable values fall back to the defaults.

use std::env;
use std::path::PathBuf;

use crate::core::{validate_starting_values, EngineError};
use crate::types::{Shape, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_STARTING_VALUES, STARTING_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub starting_values: Vec<u32>,
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            starting_values: DEFAULT_STARTING_VALUES.to_vec(),
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let rows = lookup("TUI_2048_ROWS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.rows);
        let cols = lookup("TUI_2048_COLS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.cols);
        let starting_values = lookup("TUI_2048_STARTING_VALUES")
            .and_then(|s| parse_values(&s))
            .unwrap_or(defaults.starting_values);
        let seed = lookup("TUI_2048_SEED").and_then(|s| s.trim().parse().ok());
        let log_path = lookup("TUI_2048_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            rows,
            cols,
            starting_values,
            seed,
            log_path,
        }
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Reject configurations the engine would refuse, before touching the terminal.
    pub fn validate(&self) -> Result<(), EngineError> {
        let shape = self.shape();
        if shape.area() < STARTING_COUNT {
            return Err(EngineError::InvalidConfiguration(format!(
                "board {} cannot hold {} starting tiles",
                shape, STARTING_COUNT
            )));
        }
        if shape.rows > 64 || shape.cols > 64 {
            return Err(EngineError::InvalidConfiguration(format!(
                "board {} is larger than 64x64",
                shape
            )));
        }
        validate_starting_values(&self.starting_values)
    }
}

/// Parse a comma-separated list such as `2,4`. Any bad entry rejects the list.
pub fn parse_values(s: &str) -> Option<Vec<u32>> {
    let values: Option<Vec<u32>> = s
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse().ok())
        .collect();
    values.filter(|v| !v.is_empty())
}
