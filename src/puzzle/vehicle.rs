//! Vehicles: rigid, axis-aligned pieces occupying a contiguous run of cells.

use serde::{Deserialize, Serialize};

use super::grid::Position;

/// Reserved id of the vehicle that has to reach the exit.
pub const GOAL_VEHICLE_ID: &str = "red";

/// Axis a vehicle lies (and slides) along. Never changes after level load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Unit step `(d_row, d_col)` along this axis.
    pub fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// Category encoded in a vehicle id prefix. Only presentation cares about it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VehicleKind {
    /// The goal vehicle (the fuel truck).
    Goal,
    /// `blue*`: delivery trucks.
    Truck,
    /// `green*`: two-cell cars.
    Car,
    /// `yellow*`, `purple*`, `orange*`.
    Accent,
    Other,
}

impl VehicleKind {
    pub fn from_id(id: &str) -> Self {
        if id == GOAL_VEHICLE_ID {
            VehicleKind::Goal
        } else if id.starts_with("blue") {
            VehicleKind::Truck
        } else if id.starts_with("green") {
            VehicleKind::Car
        } else if ["yellow", "purple", "orange"]
            .iter()
            .any(|prefix| id.starts_with(prefix))
        {
            VehicleKind::Accent
        } else {
            VehicleKind::Other
        }
    }
}

/// A vehicle on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique within a level.
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub orientation: Orientation,
    /// Number of occupied cells (2 or 3 in valid levels).
    pub length: u8,
    /// Anchor cell: leftmost if horizontal, topmost if vertical.
    pub position: Position,
}

impl Vehicle {
    pub fn new(
        id: impl Into<String>,
        orientation: Orientation,
        length: u8,
        position: impl Into<Position>,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            orientation,
            length,
            position: position.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// A copy of this vehicle anchored at `position`. Orientation and length carry over.
    pub fn at(&self, position: Position) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    pub fn is_goal(&self) -> bool {
        self.id == GOAL_VEHICLE_ID
    }

    pub fn kind(&self) -> VehicleKind {
        VehicleKind::from_id(&self.id)
    }

    /// Column of the rightmost occupied cell.
    pub fn rightmost_col(&self) -> i32 {
        match self.orientation {
            Orientation::Horizontal => self.position.col.saturating_add(self.length as i32 - 1),
            Orientation::Vertical => self.position.col,
        }
    }

    /// Occupied cells, anchor first.
    pub fn occupied_cells(&self) -> Vec<Position> {
        get_occupied_cells(self)
    }
}

/// Cells occupied by `vehicle`, starting at its anchor and extending along its axis.
pub fn get_occupied_cells(vehicle: &Vehicle) -> Vec<Position> {
    let (d_row, d_col) = vehicle.orientation.step();
    (0..vehicle.length as i32)
        .map(|i| vehicle.position.offset(d_row * i, d_col * i))
        .collect()
}
