use crate::types::{Coord, Shape};

/// Render-ready copy of a session's observable state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major tile values, `0` for empty.
    pub cells: Vec<u32>,
    pub score: u32,
    pub moves: u32,
    pub max_tile: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    pub fn value_at(&self, coord: Coord) -> Option<u32> {
        if coord.row >= self.rows || coord.col >= self.cols {
            return None;
        }
        self.cells.get(coord.row * self.cols + coord.col).copied()
    }
}
