//! Shared input handling: coordinate conversion and event types.
//!
//! The presentation layer captures pointer and key input and hands it over already
//! normalized. Nothing here knows about devices.

use crate::puzzle::grid::{Position, REACH_MAX, REACH_MIN};

/// Pixel size of one board cell.
pub const CELL_SIZE: f64 = 56.0;
/// Pixel gap between neighbouring cells.
pub const CELL_MARGIN: f64 = 4.0;

/// All possible input events, normalized from keyboard, mouse, and touch sources.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key press from keyboard.
    Key(char),
    /// A click/tap on a registered target, identified by a semantic action ID
    /// (see `puzzle::actions`).
    Click(u16),
    /// A drag began on the vehicle with this id.
    DragStart { vehicle_id: String },
    /// Pointer moved during a drag. Deltas are pixels from where the drag began.
    DragMove { dx: f64, dy: f64 },
    /// Pointer released. Deltas are pixels from where the drag began.
    DragEnd { dx: f64, dy: f64 },
}

/// Pixel geometry of the board content area, origin at the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardMetrics {
    pub cell_size: f64,
    pub cell_margin: f64,
}

impl Default for BoardMetrics {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            cell_margin: CELL_MARGIN,
        }
    }
}

impl BoardMetrics {
    /// Distance between the top-left corners of neighbouring cells.
    pub fn pitch(&self) -> f64 {
        self.cell_size + self.cell_margin
    }

    /// Top-left pixel `(x, y)` of the cell at `pos`.
    pub fn grid_to_screen(&self, pos: Position) -> (f64, f64) {
        (pos.col as f64 * self.pitch(), pos.row as f64 * self.pitch())
    }

    /// Cell whose top-left corner is nearest to pixel `(x, y)`.
    ///
    /// Halfway points round toward positive infinity. The result may lie outside
    /// the board, at most a board width away; the drag resolver deals with that.
    pub fn screen_to_grid(&self, x: f64, y: f64) -> Position {
        let pitch = self.pitch();
        let to_cell = |v: f64| {
            (v / pitch + 0.5)
                .floor()
                .clamp(f64::from(REACH_MIN), f64::from(REACH_MAX)) as i32
        };
        Position::new(to_cell(y), to_cell(x))
    }
}
