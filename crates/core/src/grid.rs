//! Grid module - the board and its slide-and-merge rules
//!
//! The grid is a `rows x cols` array of [`Cell`]s stored flat in row-major
//! order (`row * cols + col`). Every coordinate always holds a cell; "empty"
//! is a cell state, never a missing entry.
//!
//! A move is processed one *line* at a time. Left/right moves use rows,
//! up/down moves use columns, and each line is traversed starting from the
//! edge the tiles slide towards:
//!
//! | Direction | Lines | Traversal |
//! |-----------|-------|-----------|
//! | Left | rows | left to right |
//! | Right | rows | right to left |
//! | Up | columns | top to bottom |
//! | Down | columns | bottom to top |

use std::fmt;
use std::ops::{Index, IndexMut};

use rand::Rng;

use crate::cell::Cell;
use crate::error::{EngineError, Result};
use crate::spawn::{validate_starting_values, TileSpawner};
use crate::types::{Coord, Direction, Shape, STARTING_COUNT};

/// Compact and merge one line of cells towards its start.
///
/// Tiles slide over empties; each adjacent equal pair (after sliding) merges
/// once, scanning from the start. A tile produced by a merge never merges
/// again in the same call, so `[2, 2, 2, 2]` becomes `[4, 4, _, _]`, not `[8]`.
///
/// Returns the rebuilt line (same length as the input) and the sum of the
/// merged values.
///
/// # Examples
///
/// ```
/// use tui_2048_core::{compact_line, Cell};
///
/// let line = [Cell::tile(2), Cell::tile(2), Cell::tile(2), Cell::Empty];
/// let (out, points) = compact_line(&line);
/// assert_eq!(out, vec![Cell::tile(4), Cell::tile(2), Cell::Empty, Cell::Empty]);
/// assert_eq!(points, 4);
/// ```
pub fn compact_line(line: &[Cell]) -> (Vec<Cell>, u32) {
    let tiles: Vec<Cell> = line.iter().copied().filter(|c| !c.is_empty()).collect();

    let mut out = Vec::with_capacity(line.len());
    let mut points = 0u32;
    let mut read = 0;
    while read < tiles.len() {
        let current = tiles[read];
        match tiles.get(read + 1).and_then(|&next| current.merge(next)) {
            Some(merged) => {
                points = points.saturating_add(merged.raw());
                out.push(merged);
                read += 2;
            }
            None => {
                out.push(current);
                read += 1;
            }
        }
    }

    out.resize(line.len(), Cell::Empty);
    (out, points)
}

/// The game board - `rows x cols` cells using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    shape: Shape,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell empty.
    pub fn empty(shape: Shape) -> Result<Self> {
        if shape.area() == 0 {
            return Err(EngineError::InvalidConfiguration(format!(
                "grid shape {} has no cells",
                shape
            )));
        }
        Ok(Self {
            shape,
            cells: vec![Cell::Empty; shape.area()],
        })
    }

    /// Create a fresh game grid: all empty, then [`STARTING_COUNT`] random tiles.
    pub fn new<R: Rng + ?Sized>(
        shape: Shape,
        starting_values: &[u32],
        rng: &mut R,
    ) -> Result<Self> {
        validate_starting_values(starting_values)?;
        if shape.area() < STARTING_COUNT {
            return Err(EngineError::InvalidConfiguration(format!(
                "grid shape {} cannot hold {} starting tiles",
                shape, STARTING_COUNT
            )));
        }

        let mut grid = Self::empty(shape)?;
        grid.spawn_random_tile(STARTING_COUNT, starting_values, rng)?;
        Ok(grid)
    }

    /// Build a grid from row-major cells.
    ///
    /// Rejects a cell count that does not match `shape` and any
    /// `Cell::Occupied(0)`.
    pub fn from_cells(shape: Shape, cells: Vec<Cell>) -> Result<Self> {
        if cells.len() != shape.area() {
            return Err(EngineError::InvalidConfiguration(format!(
                "expected {} cells for shape {}, got {}",
                shape.area(),
                shape,
                cells.len()
            )));
        }
        if cells.contains(&Cell::Occupied(0)) {
            return Err(EngineError::InvalidConfiguration(
                "occupied cells must hold a positive value".to_string(),
            ));
        }
        let mut grid = Self::empty(shape)?;
        grid.cells = cells;
        Ok(grid)
    }

    /// Build a grid from literal rows, `0` meaning empty.
    ///
    /// ```
    /// use tui_2048_core::{Cell, Grid};
    /// use tui_2048_core::types::Coord;
    ///
    /// let grid = Grid::from_rows(&[[2, 0], [0, 4]]).unwrap();
    /// assert_eq!(grid[Coord::new(1, 1)], Cell::tile(4));
    /// ```
    pub fn from_rows<const COLS: usize>(rows: &[[u32; COLS]]) -> Result<Self> {
        let shape = Shape::new(rows.len(), COLS);
        let cells = rows.iter().flatten().map(|&v| Cell::from_raw(v)).collect();
        Self::from_cells(shape, cells)
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn offset(&self, coord: Coord) -> Option<usize> {
        if !self.shape.contains(coord) {
            return None;
        }
        Some(coord.row * self.shape.cols + coord.col)
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Get the cell at a coordinate, `None` if out of bounds.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.offset(coord).map(|idx| self.cells[idx])
    }

    /// Set the cell at a coordinate. Returns false if out of bounds.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        match self.offset(coord) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.shape.cols)
    }

    /// Convert to nested rows of raw values (`0` = empty).
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows()
            .map(|row| row.iter().map(Cell::raw).collect())
            .collect()
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_coords(&self) -> Vec<Coord> {
        self.shape
            .coords()
            .zip(&self.cells)
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coord, _)| coord)
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.len() - self.empty_count()
    }

    /// Sum of all tile values.
    pub fn total_value(&self) -> u64 {
        self.cells.iter().map(|c| c.raw() as u64).sum()
    }

    /// Largest tile on the board, `0` if the board is empty.
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().map(Cell::raw).max().unwrap_or(0)
    }

    /// The lines a move in `direction` processes, each in traversal order.
    pub fn lines(&self, direction: Direction) -> Vec<Vec<Coord>> {
        let Shape { rows, cols } = self.shape;
        let horizontal = direction.is_horizontal();
        let (count, len) = if horizontal { (rows, cols) } else { (cols, rows) };

        (0..count)
            .map(|i| {
                let mut line: Vec<Coord> = (0..len)
                    .map(|j| {
                        if horizontal {
                            Coord::new(i, j)
                        } else {
                            Coord::new(j, i)
                        }
                    })
                    .collect();
                if direction.is_reversed() {
                    line.reverse();
                }
                line
            })
            .collect()
    }

    /// Compact and merge the cells at `coords` (given in traversal order).
    ///
    /// Pure: the grid is not modified. The returned cells line up with `coords`.
    pub fn move_line(&self, coords: &[Coord]) -> (Vec<Cell>, u32) {
        let line: Vec<Cell> = coords.iter().map(|&c| self[c]).collect();
        compact_line(&line)
    }

    /// Slide and merge every line without spawning.
    ///
    /// Fails with [`EngineError::NoMove`] when no cell would change.
    pub fn slide(&self, direction: Direction) -> Result<(Grid, u32)> {
        let mut next = self.clone();
        let mut points = 0u32;

        for line in self.lines(direction) {
            let (cells, line_points) = self.move_line(&line);
            for (&coord, cell) in line.iter().zip(cells) {
                next[coord] = cell;
            }
            points = points.saturating_add(line_points);
        }

        if next == *self {
            return Err(EngineError::NoMove);
        }
        Ok((next, points))
    }

    /// Play one move: slide, then spawn exactly one new tile.
    ///
    /// A rejected move is never scored and never spawns.
    pub fn apply_move<R: Rng>(
        &self,
        direction: Direction,
        spawner: &mut TileSpawner<R>,
    ) -> Result<(Grid, u32)> {
        let (mut next, points) = self.slide(direction)?;
        // A changed grid always has room: a merge frees a cell and a slide
        // leaves the cell it moved from.
        spawner.spawn(&mut next, 1)?;
        Ok((next, points))
    }

    /// Place `count` tiles on distinct empty cells chosen uniformly at random.
    ///
    /// Each tile's value is drawn uniformly from `values`. When fewer than
    /// `count` cells are empty the grid is left untouched and
    /// [`EngineError::NotEnoughEmptyCells`] is returned.
    pub fn spawn_random_tile<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        values: &[u32],
        rng: &mut R,
    ) -> Result<Vec<Coord>> {
        validate_starting_values(values)?;

        let empty = self.empty_coords();
        if count > empty.len() {
            return Err(EngineError::NotEnoughEmptyCells {
                requested: count,
                available: empty.len(),
            });
        }

        let chosen: Vec<Coord> = rand::seq::index::sample(rng, empty.len(), count)
            .into_iter()
            .map(|i| empty[i])
            .collect();
        for &coord in &chosen {
            let value = values[rng.gen_range(0..values.len())];
            self[coord] = Cell::tile(value);
        }
        Ok(chosen)
    }
}

impl Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, coord: Coord) -> &Cell {
        match self.offset(coord) {
            Some(idx) => &self.cells[idx],
            None => panic!("coordinate {:?} outside grid {}", coord, self.shape),
        }
    }
}

impl IndexMut<Coord> for Grid {
    fn index_mut(&mut self, coord: Coord) -> &mut Cell {
        match self.offset(coord) {
            Some(idx) => &mut self.cells[idx],
            None => panic!("coordinate {:?} outside grid {}", coord, self.shape),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().max(1).to_string().len();
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>width$}", cell, width = width)?;
            }
        }
        Ok(())
    }
}
