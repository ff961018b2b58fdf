//! Spawn module - where new tiles come from
//!
//! A [`TileSpawner`] bundles the configured starting values with the source of
//! randomness. It is the only part of the engine that ever draws random
//! numbers; sliding and game-over probing stay deterministic.

use rand::Rng;

use crate::error::{EngineError, Result};
use crate::grid::Grid;
use crate::types::Coord;

/// Reject value sets the spawner could not draw from.
pub fn validate_starting_values(values: &[u32]) -> Result<()> {
    if values.is_empty() {
        return Err(EngineError::InvalidConfiguration(
            "starting values must not be empty".to_string(),
        ));
    }
    if values.contains(&0) {
        return Err(EngineError::InvalidConfiguration(
            "starting values must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Starting values plus the RNG used to place them.
#[derive(Debug, Clone)]
pub struct TileSpawner<R> {
    values: Vec<u32>,
    rng: R,
}

impl<R: Rng> TileSpawner<R> {
    pub fn new(values: &[u32], rng: R) -> Result<Self> {
        validate_starting_values(values)?;
        Ok(Self {
            values: values.to_vec(),
            rng,
        })
    }

    /// The values a spawned tile may take.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Place `count` new tiles into `grid`, returning where they landed.
    pub fn spawn(&mut self, grid: &mut Grid, count: usize) -> Result<Vec<Coord>> {
        grid.spawn_random_tile(count, &self.values, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    #[test]
    fn test_rejects_empty_values() {
        let err = TileSpawner::new(&[], SimpleRng::new(1)).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rejects_zero_value() {
        let err = TileSpawner::new(&[2, 0], SimpleRng::new(1)).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_spawn_draws_from_configured_values() {
        let mut spawner = TileSpawner::new(&[8], SimpleRng::new(3)).unwrap();
        let mut grid = Grid::from_rows(&[[0, 0], [0, 0]]).unwrap();

        let placed = spawner.spawn(&mut grid, 3).unwrap();
        assert_eq!(placed.len(), 3);
        for coord in placed {
            assert_eq!(grid[coord].value(), Some(8));
        }
        assert_eq!(grid.empty_count(), 1);
    }
}
