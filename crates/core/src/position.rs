//! Position module - an immutable game state and its lineage
//!
//! A [`Position`] owns one [`Grid`] and, optionally, a shared link to the
//! position it was derived from. The link is informational: nothing in the
//! engine walks it, and it is kept so an undo feature could be layered on top
//! later.

use std::sync::Arc;

use arrayvec::ArrayVec;
use rand::Rng;

use crate::error::{EngineError, Result};
use crate::grid::Grid;
use crate::spawn::TileSpawner;
use crate::types::Direction;

#[derive(Debug, Clone)]
pub struct Position {
    grid: Grid,
    parent: Option<Arc<Position>>,
    /// Number of successful moves between the root position and this one.
    ply: u32,
}

impl Position {
    /// Create a root position (no predecessor).
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            parent: None,
            ply: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The position this one was derived from, if any.
    pub fn parent(&self) -> Option<&Arc<Position>> {
        self.parent.as_ref()
    }

    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Play a move from this position.
    ///
    /// On success the returned position records `self` as its predecessor.
    /// [`EngineError::NoMove`] propagates unchanged and nothing is spawned.
    pub fn apply_move<R: Rng>(
        self: Arc<Self>,
        direction: Direction,
        spawner: &mut TileSpawner<R>,
    ) -> Result<(Position, u32)> {
        let (grid, points) = self.grid.apply_move(direction, spawner)?;
        let ply = self.ply + 1;
        Ok((
            Position {
                grid,
                parent: Some(self),
                ply,
            },
            points,
        ))
    }

    /// Check whether any direction changes the grid.
    ///
    /// Probes with [`Grid::slide`], so no randomness is consumed and the
    /// position is left untouched.
    pub fn is_terminal(&self) -> bool {
        Direction::ALL
            .iter()
            .all(|&dir| matches!(self.grid.slide(dir), Err(EngineError::NoMove)))
    }

    /// Directions that would change the grid, in [`Direction::ALL`] order.
    pub fn legal_moves(&self) -> ArrayVec<Direction, 4> {
        Direction::ALL
            .iter()
            .copied()
            .filter(|&dir| self.grid.slide(dir).is_ok())
            .collect()
    }
}

impl Drop for Position {
    fn drop(&mut self) {
        // Unlink ancestors iteratively; a long game would otherwise recurse
        // once per move when the chain is released.
        let mut next = self.parent.take();
        while let Some(ancestor) = next {
            match Arc::try_unwrap(ancestor) {
                Ok(mut position) => next = position.parent.take(),
                Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    fn spawner() -> TileSpawner<SimpleRng> {
        TileSpawner::new(&[2, 4], SimpleRng::new(9)).unwrap()
    }

    #[test]
    fn test_apply_move_links_parent() {
        let root = Arc::new(Position::new(
            Grid::from_rows(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap(),
        ));

        let (next, points) = Arc::clone(&root)
            .apply_move(Direction::Left, &mut spawner())
            .unwrap();
        assert_eq!(points, 4);
        assert_eq!(next.ply(), 1);
        assert!(Arc::ptr_eq(next.parent().unwrap(), &root));
        assert_eq!(next.grid()[crate::types::Coord::new(0, 0)].value(), Some(4));
        assert!(root.parent().is_none());
    }

    #[test]
    fn test_apply_move_no_move_propagates() {
        let root = Arc::new(Position::new(
            Grid::from_rows(&[[2, 4], [0, 0]]).unwrap(),
        ));
        let before = root.grid().clone();

        let err = Arc::clone(&root).apply_move(Direction::Up, &mut spawner()).unwrap_err();
        assert_eq!(err, EngineError::NoMove);
        assert_eq!(root.grid(), &before);
    }

    #[test]
    fn test_terminal_checkerboard() {
        let grid = Grid::from_rows(&[
            [2, 4, 2, 4], //
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ])
        .unwrap();
        let position = Position::new(grid.clone());
        assert!(position.is_terminal());
        assert!(position.legal_moves().is_empty());
        // Probing leaves the grid as it was.
        assert_eq!(position.grid(), &grid);
    }

    #[test]
    fn test_not_terminal_with_empty_cell() {
        let grid = Grid::from_rows(&[
            [2, 4, 2, 4], //
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 0],
        ])
        .unwrap();
        let position = Position::new(grid);
        assert!(!position.is_terminal());
        assert_eq!(
            position.legal_moves().as_slice(),
            &[Direction::Down, Direction::Right]
        );
    }

    #[test]
    fn test_not_terminal_with_full_grid_and_pair() {
        let grid = Grid::from_rows(&[[2, 2], [4, 8]]).unwrap();
        let position = Position::new(grid);
        assert!(!position.is_terminal());
        assert_eq!(
            position.legal_moves().as_slice(),
            &[Direction::Left, Direction::Right]
        );
    }

    #[test]
    fn test_long_chain_drops_without_recursion() {
        let mut current = Arc::new(Position::new(Grid::from_rows(&[[2, 0]]).unwrap()));
        for _ in 0..200_000 {
            let next = Position {
                grid: current.grid().clone(),
                parent: Some(Arc::clone(&current)),
                ply: current.ply() + 1,
            };
            current = Arc::new(next);
        }
        assert_eq!(current.ply(), 200_000);
        drop(current);
    }
}
