//! Cell module - a single grid slot and its merge arithmetic

use std::fmt;

/// One grid slot: either empty or holding a positive tile value.
///
/// Cells are plain values. A move never edits a cell in place; it builds new
/// cells from old ones via [`Cell::merge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(u32),
}

impl Cell {
    /// Create an occupied cell.
    ///
    /// # Panics
    ///
    /// Panics if `value` is zero; occupied cells always hold a positive value.
    pub fn tile(value: u32) -> Self {
        assert!(value > 0, "occupied cell must hold a positive value");
        Cell::Occupied(value)
    }

    /// Decode the flat `0 = empty` encoding used by snapshots and test fixtures.
    pub fn from_raw(value: u32) -> Self {
        if value == 0 {
            Cell::Empty
        } else {
            Cell::Occupied(value)
        }
    }

    /// Encode as a flat value, `0` for empty.
    pub fn raw(&self) -> u32 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(v) => *v,
        }
    }

    pub fn value(&self) -> Option<u32> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(v) => Some(*v),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Combine two cells.
    ///
    /// An empty cell absorbs into the other side, and two equal tiles fuse
    /// into one of double value. Two unequal tiles are blocked and return
    /// `None`, which is distinct from every successful outcome.
    ///
    /// A pair whose double would not fit in a `u32` is also blocked, so a merge
    /// never produces anything other than the exact sum of its inputs.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Cell;
    ///
    /// assert_eq!(Cell::tile(4).merge(Cell::tile(4)), Some(Cell::tile(8)));
    /// assert_eq!(Cell::Empty.merge(Cell::tile(2)), Some(Cell::tile(2)));
    /// assert_eq!(Cell::tile(2).merge(Cell::tile(4)), None);
    /// ```
    pub fn merge(self, other: Cell) -> Option<Cell> {
        match (self, other) {
            (Cell::Empty, Cell::Empty) => Some(Cell::Empty),
            (Cell::Empty, occupied @ Cell::Occupied(_)) => Some(occupied),
            (occupied @ Cell::Occupied(_), Cell::Empty) => Some(occupied),
            (Cell::Occupied(a), Cell::Occupied(b)) if a == b => {
                a.checked_add(b).map(Cell::Occupied)
            }
            (Cell::Occupied(_), Cell::Occupied(_)) => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => f.pad("."),
            Cell::Occupied(v) => f.pad(&v.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_with_empty() {
        assert_eq!(Cell::Empty.merge(Cell::Empty), Some(Cell::Empty));
        assert_eq!(Cell::Empty.merge(Cell::tile(8)), Some(Cell::tile(8)));
        assert_eq!(Cell::tile(8).merge(Cell::Empty), Some(Cell::tile(8)));
    }

    #[test]
    fn test_merge_equal_values_doubles() {
        for v in [1, 2, 4, 3, 1024, 65536] {
            assert_eq!(Cell::tile(v).merge(Cell::tile(v)), Some(Cell::tile(2 * v)));
        }
    }

    #[test]
    fn test_merge_unequal_values_blocked() {
        for (a, b) in [(2, 4), (4, 2), (2, 1024), (3, 6)] {
            assert_eq!(Cell::tile(a).merge(Cell::tile(b)), None);
        }
    }

    #[test]
    fn test_raw_encoding() {
        assert_eq!(Cell::from_raw(0), Cell::Empty);
        assert_eq!(Cell::from_raw(16), Cell::tile(16));
        assert_eq!(Cell::Empty.raw(), 0);
        assert_eq!(Cell::tile(32).raw(), 32);
        assert_eq!(Cell::tile(32).value(), Some(32));
        assert_eq!(Cell::Empty.value(), None);
    }

    #[test]
    fn test_merge_blocks_when_double_overflows() {
        let big = Cell::tile(1 << 31);
        assert_eq!(big.merge(big), None);

        let largest = Cell::tile(1 << 30);
        assert_eq!(largest.merge(largest), Some(Cell::tile(1 << 31)));
    }

    #[test]
    #[should_panic(expected = "positive value")]
    fn test_zero_tile_panics() {
        let _ = Cell::tile(0);
    }

    #[test]
    fn test_display_respects_width() {
        assert_eq!(format!("{:>4}", Cell::tile(16)), "  16");
        assert_eq!(format!("{:>4}", Cell::Empty), "   .");
    }
}
