//! Fuel Jam — slide the fuel truck out through the exit.

pub mod actions;
pub mod grid;
pub mod levels;
pub mod logic;
pub mod state;
pub mod vehicle;

use crate::error::CatalogError;
use crate::input::{BoardMetrics, InputEvent};

use grid::Position;
use levels::LevelCatalog;
use logic::get_next_valid_position;
use state::PuzzleState;
use vehicle::Orientation;

/// A drag in progress. At most one exists at a time.
#[derive(Clone, Debug)]
struct DragSession {
    vehicle_id: String,
    /// Anchor cell when the drag began.
    origin: Position,
    /// Where the vehicle would land if released now.
    preview: Position,
}

pub struct FuelJamGame {
    pub state: PuzzleState,
    metrics: BoardMetrics,
    drag: Option<DragSession>,
}

impl FuelJamGame {
    pub fn new(catalog: LevelCatalog) -> Self {
        Self::with_metrics(catalog, BoardMetrics::default())
    }

    pub fn with_metrics(catalog: LevelCatalog, metrics: BoardMetrics) -> Self {
        Self {
            state: PuzzleState::new(catalog),
            metrics,
            drag: None,
        }
    }

    /// A game over the bundled levels.
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self::new(LevelCatalog::builtin()?))
    }

    pub fn metrics(&self) -> &BoardMetrics {
        &self.metrics
    }

    /// The dragged vehicle and the cell it would settle in if released now.
    pub fn drag_preview(&self) -> Option<(&str, Position)> {
        self.drag
            .as_ref()
            .map(|d| (d.vehicle_id.as_str(), d.preview))
    }

    /// Handle an input event. Returns true if the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key('r') | InputEvent::Click(actions::RESTART) => {
                self.drag = None;
                self.state.restart();
                true
            }
            InputEvent::Key('n') | InputEvent::Click(actions::NEXT_LEVEL) => {
                self.drag = None;
                self.state.next_level()
            }
            InputEvent::Key('p') | InputEvent::Click(actions::PREVIOUS_LEVEL) => {
                self.drag = None;
                self.state.previous_level()
            }
            InputEvent::DragStart { vehicle_id } => self.start_drag(vehicle_id),
            InputEvent::DragMove { dx, dy } => self.update_drag(*dx, *dy),
            InputEvent::DragEnd { dx, dy } => self.end_drag(*dx, *dy),
            _ => false,
        }
    }

    fn start_drag(&mut self, vehicle_id: &str) -> bool {
        if let Some(active) = &self.drag {
            log::debug!(
                "ignoring drag on [{vehicle_id}], [{}] is still being dragged",
                active.vehicle_id
            );
            return false;
        }
        let Some(vehicle) = self.state.vehicle(vehicle_id) else {
            log::warn!("drag started on unknown vehicle [{vehicle_id}]");
            return false;
        };

        self.drag = Some(DragSession {
            vehicle_id: vehicle.id.clone(),
            origin: vehicle.position,
            preview: vehicle.position,
        });
        true
    }

    fn update_drag(&mut self, dx: f64, dy: f64) -> bool {
        let Some(session) = &self.drag else {
            return false;
        };
        let raw = self.raw_target(session, dx, dy);
        let Some(vehicle) = self.state.vehicle(&session.vehicle_id) else {
            return false;
        };
        let preview = get_next_valid_position(vehicle, raw, self.state.vehicles());

        if let Some(session) = self.drag.as_mut() {
            session.preview = preview;
        }
        true
    }

    fn end_drag(&mut self, dx: f64, dy: f64) -> bool {
        let Some(session) = self.drag.take() else {
            return false;
        };
        let raw = self.raw_target(&session, dx, dy);
        match self.state.drag_vehicle(&session.vehicle_id, raw) {
            Some(landed) => {
                log::debug!(
                    "drag of [{}] released at {raw}, landed at {landed}",
                    session.vehicle_id
                );
                true
            }
            None => false,
        }
    }

    /// Cell under the dragged vehicle's anchor, counting only the delta along its axis.
    fn raw_target(&self, session: &DragSession, dx: f64, dy: f64) -> Position {
        let orientation = self
            .state
            .vehicle(&session.vehicle_id)
            .map(|v| v.orientation)
            .unwrap_or(Orientation::Horizontal);
        let (x, y) = self.metrics.grid_to_screen(session.origin);
        match orientation {
            Orientation::Horizontal => self.metrics.screen_to_grid(x + dx, y),
            Orientation::Vertical => self.metrics.screen_to_grid(x, y + dy),
        }
    }
}
