//! Fuel Jam: a sliding-vehicle puzzle engine.
//!
//! The engine (`puzzle::logic`) is a handful of pure functions over vehicle
//! snapshots. `puzzle::state::PuzzleState` owns the live board and is the only thing
//! that changes it; `puzzle::FuelJamGame` turns normalized input events into calls on
//! that state. Rendering and device input live with the embedding application.

pub mod error;
pub mod input;
pub mod puzzle;

pub use error::{CatalogError, LevelError};
pub use puzzle::grid::{is_within_bounds, Position, EXIT_ROW, GRID_SIZE};
pub use puzzle::logic::{check_if_won, get_next_valid_position, is_move_valid};
pub use puzzle::vehicle::{get_occupied_cells, Orientation, Vehicle, GOAL_VEHICLE_ID};
