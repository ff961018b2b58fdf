//! Session module - the facade front ends talk to
//!
//! A [`Session`] holds the fixed shape, the current [`Position`], the
//! cumulative score and the tile spawner. Moves go in as a [`Direction`] and
//! come back as points or [`EngineError::NoMove`]; a rejected move leaves every
//! field exactly as it was.

use std::sync::Arc;

use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use crate::cell::Cell;
use crate::error::{EngineError, Result};
use crate::grid::Grid;
use crate::position::Position;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::spawn::TileSpawner;
use crate::types::{Coord, Direction, Shape};

#[derive(Debug, Clone)]
pub struct Session<R = SimpleRng> {
    shape: Shape,
    current: Arc<Position>,
    score: u32,
    spawner: TileSpawner<R>,
}

impl Session<SimpleRng> {
    /// Start a game seeded from OS entropy.
    pub fn new(shape: Shape, starting_values: &[u32]) -> Result<Self> {
        Self::with_rng(shape, starting_values, SimpleRng::from_entropy())
    }

    /// Start a reproducible game.
    pub fn with_seed(shape: Shape, starting_values: &[u32], seed: u64) -> Result<Self> {
        Self::with_rng(shape, starting_values, SimpleRng::new(seed))
    }
}

impl<R: Rng> Session<R> {
    /// Start a game drawing spawns from `rng`.
    pub fn with_rng(shape: Shape, starting_values: &[u32], rng: R) -> Result<Self> {
        let mut spawner = TileSpawner::new(starting_values, rng)?;
        let grid = fresh_grid(shape, &mut spawner)?;
        info!(%shape, values = ?starting_values, "session started");
        Ok(Self {
            shape,
            current: Arc::new(Position::new(grid)),
            score: 0,
            spawner,
        })
    }

    /// Resume from an arbitrary grid with a zero score.
    pub fn from_grid(grid: Grid, starting_values: &[u32], rng: R) -> Result<Self> {
        let spawner = TileSpawner::new(starting_values, rng)?;
        let shape = grid.shape();
        debug!(%shape, "session resumed from grid");
        Ok(Self {
            shape,
            current: Arc::new(Position::new(grid)),
            score: 0,
            spawner,
        })
    }

    /// Play one move, returning the points it scored.
    pub fn apply_move(&mut self, direction: Direction) -> Result<u32> {
        match Arc::clone(&self.current).apply_move(direction, &mut self.spawner) {
            Ok((next, points)) => {
                self.current = Arc::new(next);
                self.score = self.score.saturating_add(points);
                debug!(%direction, points, score = self.score, "move applied");
                Ok(points)
            }
            Err(EngineError::NoMove) => {
                trace!(%direction, "move rejected");
                Err(EngineError::NoMove)
            }
            Err(e) => Err(e),
        }
    }

    /// True once no direction can change the grid.
    pub fn is_over(&self) -> bool {
        self.current.is_terminal()
    }

    /// Throw the current game away and deal a fresh grid.
    pub fn restart(&mut self) -> Result<()> {
        let grid = fresh_grid(self.shape, &mut self.spawner)?;
        info!(final_score = self.score, moves = self.moves(), "session restarted");
        self.current = Arc::new(Position::new(grid));
        self.score = 0;
        Ok(())
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Successful moves since the game started.
    pub fn moves(&self) -> u32 {
        self.current.ply()
    }

    pub fn position(&self) -> &Arc<Position> {
        &self.current
    }

    pub fn grid(&self) -> &Grid {
        self.current.grid()
    }

    /// # Panics
    ///
    /// Panics if `coord` lies outside the session's shape.
    pub fn cell_at(&self, coord: Coord) -> Cell {
        self.grid()[coord]
    }

    pub fn legal_moves(&self) -> Vec<Direction> {
        self.current.legal_moves().to_vec()
    }

    pub fn starting_values(&self) -> &[u32] {
        self.spawner.values()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let grid = self.grid();
        GameSnapshot {
            rows: self.shape.rows,
            cols: self.shape.cols,
            cells: grid.cells().iter().map(Cell::raw).collect(),
            score: self.score,
            moves: self.moves(),
            max_tile: grid.max_tile(),
            game_over: self.is_over(),
        }
    }
}

fn fresh_grid<R: Rng>(shape: Shape, spawner: &mut TileSpawner<R>) -> Result<Grid> {
    let values = spawner.values().to_vec();
    Grid::new(shape, &values, spawner.rng_mut())
}
