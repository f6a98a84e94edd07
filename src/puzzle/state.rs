//! Fuel Jam session state.
//!
//! `PuzzleState` is the only writer of the live vehicle list. The engine functions in
//! `logic` only ever see shared snapshots of it.

use super::grid::Position;
use super::levels::{Level, LevelCatalog};
use super::logic::{check_if_won, get_next_valid_position, is_move_valid, project_onto_axis};
use super::vehicle::Vehicle;

/// Puzzle session: level progression, current board, move counter.
#[derive(Clone, Debug)]
pub struct PuzzleState {
    catalog: LevelCatalog,
    current_level_index: usize,
    /// Replaced wholesale on every committed move.
    vehicles: Vec<Vehicle>,
    move_count: u32,
    won: bool,
}

impl PuzzleState {
    /// Start a session on the first level of `catalog`.
    pub fn new(catalog: LevelCatalog) -> Self {
        let mut state = Self {
            catalog,
            current_level_index: 0,
            vehicles: Vec::new(),
            move_count: 0,
            won: false,
        };
        state.load_level(0);
        state
    }

    /// Load the level at `index`. Out-of-range indices leave the session untouched.
    pub fn load_level(&mut self, index: usize) -> bool {
        let Some(level) = self.catalog.get(index) else {
            log::warn!(
                "no level at index {index} ({} levels available)",
                self.catalog.len()
            );
            return false;
        };

        log::info!("loading level {} [{}]", level.id, level.name);
        self.vehicles = level.vehicles.clone();
        self.current_level_index = index;
        self.move_count = 0;
        self.won = false;
        true
    }

    /// Reload the current level from its template.
    pub fn restart(&mut self) {
        self.load_level(self.current_level_index);
    }

    /// Advance to the next level. No-op on the last level.
    pub fn next_level(&mut self) -> bool {
        if !self.has_next_level() {
            return false;
        }
        self.load_level(self.current_level_index + 1)
    }

    /// Go back one level. No-op on the first level.
    pub fn previous_level(&mut self) -> bool {
        if !self.has_previous_level() {
            return false;
        }
        self.load_level(self.current_level_index - 1)
    }

    /// Move vehicle `vehicle_id` to `target` if that is legal.
    ///
    /// The target has to keep the vehicle on its own axis and pass `is_move_valid`, so
    /// this is stricter than the validator: a free cell off the axis is refused.
    /// On success the move counter goes up and the win flag is recomputed.
    pub fn try_move(&mut self, vehicle_id: &str, target: Position) -> bool {
        let Some(vehicle) = self.vehicle(vehicle_id) else {
            log::warn!("move for unknown vehicle [{vehicle_id}]");
            return false;
        };

        if project_onto_axis(vehicle, target) != target {
            log::debug!("rejected off-axis move of [{vehicle_id}] to {target}");
            return false;
        }
        if !is_move_valid(vehicle, target, &self.vehicles) {
            log::debug!("rejected move of [{vehicle_id}] to {target}");
            return false;
        }

        self.vehicles = self
            .vehicles
            .iter()
            .map(|v| if v.id == vehicle_id { v.at(target) } else { v.clone() })
            .collect();
        self.move_count += 1;
        self.won = check_if_won(&self.vehicles);

        log::debug!(
            "moved [{vehicle_id}] to {target} (moves: {}, won: {})",
            self.move_count,
            self.won
        );
        true
    }

    /// Resolve a raw drag target for `vehicle_id` and commit the result.
    ///
    /// Returns the position the vehicle ended up at, or `None` for an unknown id.
    pub fn drag_vehicle(&mut self, vehicle_id: &str, raw_target: Position) -> Option<Position> {
        let vehicle = self.vehicle(vehicle_id)?;
        let resolved = get_next_valid_position(vehicle, raw_target, &self.vehicles);
        self.try_move(vehicle_id, resolved).then_some(resolved)
    }

    pub fn vehicle(&self, vehicle_id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == vehicle_id)
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn current_level_index(&self) -> usize {
        self.current_level_index
    }

    pub fn current_level(&self) -> Option<&Level> {
        self.catalog.get(self.current_level_index)
    }

    pub fn total_levels(&self) -> usize {
        self.catalog.len()
    }

    pub fn has_next_level(&self) -> bool {
        self.current_level_index + 1 < self.catalog.len()
    }

    pub fn has_previous_level(&self) -> bool {
        self.current_level_index > 0
    }
}
