//! Level templates and the level catalog.
//!
//! Levels are read-only input. The session clones a level's vehicles on load, so a
//! template is never touched by play and restarting restores it exactly.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::grid::{is_within_bounds, Position, EXIT_ROW};
use super::vehicle::{get_occupied_cells, Orientation, Vehicle};
use crate::error::{CatalogError, LevelError};

/// Level data bundled with the crate.
const BUILTIN_LEVELS: &str = include_str!("../../assets/levels.json");

/// An immutable level template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub id: u32,
    pub name: String,
    pub vehicles: Vec<Vehicle>,
}

impl Level {
    pub fn new(id: u32, name: impl Into<String>, vehicles: Vec<Vehicle>) -> Self {
        Self {
            id,
            name: name.into(),
            vehicles,
        }
    }

    /// Check that the initial configuration is one the engine can play.
    pub fn validate(&self) -> Result<(), LevelError> {
        let mut occupied: HashMap<Position, &str> = HashMap::new();

        for v in &self.vehicles {
            if !(2..=3).contains(&v.length) {
                return Err(LevelError::BadLength {
                    id: v.id.clone(),
                    length: v.length,
                });
            }
            if self.vehicles.iter().filter(|other| other.id == v.id).count() > 1 {
                return Err(LevelError::DuplicateId(v.id.clone()));
            }
            for cell in get_occupied_cells(v) {
                if !is_within_bounds(cell.row, cell.col) {
                    return Err(LevelError::OutOfBounds {
                        id: v.id.clone(),
                        cell,
                    });
                }
                if let Some(first) = occupied.insert(cell, v.id.as_str()) {
                    return Err(LevelError::Overlap {
                        first: first.to_string(),
                        second: v.id.clone(),
                        cell,
                    });
                }
            }
        }

        let goals: Vec<&Vehicle> = self.vehicles.iter().filter(|v| v.is_goal()).collect();
        match goals.as_slice() {
            [goal] => {
                if goal.orientation != Orientation::Horizontal || goal.position.row != EXIT_ROW {
                    return Err(LevelError::UnreachableExit {
                        orientation: goal.orientation,
                        row: goal.position.row,
                    });
                }
            }
            _ => return Err(LevelError::GoalCount(goals.len())),
        }

        Ok(())
    }
}

/// An ordered, validated list of levels.
#[derive(Clone, Debug)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    /// Validate `levels` and wrap them.
    pub fn new(levels: Vec<Level>) -> Result<Self, CatalogError> {
        if levels.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, level) in levels.iter().enumerate() {
            level
                .validate()
                .map_err(|source| CatalogError::InvalidLevel {
                    index,
                    name: level.name.clone(),
                    source,
                })?;
        }
        log::info!("loaded {} levels", levels.len());
        Ok(Self { levels })
    }

    /// Parse a JSON array of level records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let levels: Vec<Level> = serde_json::from_str(json)?;
        Self::new(levels)
    }

    /// The levels shipped in `assets/levels.json`.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_LEVELS)
    }

    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}
