//! Board dimensions.
//!
//! The grid is picked once from the player count when a game is created and
//! never changes afterwards, even when players join later.

use serde::Serialize;

/// Board size in rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Grid {
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub cols: u32,
}

impl Grid {
    /// Create a grid of the given size.
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// The grid as a `(rows, cols)` pair.
    pub const fn as_tuple(self) -> (u32, u32) {
        (self.rows, self.cols)
    }
}

/// Grid for two or three players.
pub const SMALL_GRID: Grid = Grid::new(4, 5);

/// Grid for four or five players.
pub const MEDIUM_GRID: Grid = Grid::new(5, 6);

/// Grid for every other player count, including zero and one.
pub const LARGE_GRID: Grid = Grid::new(6, 7);

/// Pick the board size for a player count.
///
/// This is a lookup table, not a formula: counts outside 2..=5 all get the
/// large grid.
pub const fn assign_grid(player_count: usize) -> Grid {
    match player_count {
        2 | 3 => SMALL_GRID,
        4 | 5 => MEDIUM_GRID,
        _ => LARGE_GRID,
    }
}
