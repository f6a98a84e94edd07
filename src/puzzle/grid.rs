//! Grid types for Fuel Jam.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Side length of the square board.
pub const GRID_SIZE: i32 = 6;
/// Row of the exit cell. The exit sits in the last column of this row.
pub const EXIT_ROW: i32 = 2;
/// Lowest coordinate a drag target is kept at. Anything further off behaves the same.
pub const REACH_MIN: i32 = -GRID_SIZE;
/// Highest coordinate a drag target is kept at.
pub const REACH_MAX: i32 = 2 * GRID_SIZE;

/// A `(row, col)` cell coordinate. Row grows downward, col grows rightward.
///
/// Coordinates are signed so raw drag targets can point outside the board.
/// Serialized as a `[row, col]` pair, the level file format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// This position shifted by `(d_row, d_col)`, saturating at the `i32` limits.
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl From<Position> for (i32, i32) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// True iff both coordinates lie in `[0, GRID_SIZE)`.
pub fn is_within_bounds(row: i32, col: i32) -> bool {
    (0..GRID_SIZE).contains(&row) && (0..GRID_SIZE).contains(&col)
}

/// Pull a coordinate into `[REACH_MIN, REACH_MAX]`.
///
/// The range covers the board plus a full board width on each side, so clamping never
/// turns an out-of-bounds coordinate into an in-bounds one.
pub fn clamp_to_reach(value: i32) -> i32 {
    value.clamp(REACH_MIN, REACH_MAX)
}

/// The cell the goal vehicle has to reach.
pub const fn exit_cell() -> Position {
    Position::new(EXIT_ROW, GRID_SIZE - 1)
}
