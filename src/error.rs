use thiserror::Error;

use crate::puzzle::grid::Position;
use crate::puzzle::vehicle::Orientation;

/// A level whose initial configuration breaks the board invariants.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("vehicle [{id}] has length {length}, expected 2 or 3")]
    BadLength { id: String, length: u8 },
    #[error("vehicle [{id}] leaves the board at {cell}")]
    OutOfBounds { id: String, cell: Position },
    #[error("vehicles [{first}] and [{second}] overlap at {cell}")]
    Overlap {
        first: String,
        second: String,
        cell: Position,
    },
    #[error("vehicle id [{0}] is used more than once")]
    DuplicateId(String),
    #[error("level has {0} goal vehicles, expected exactly one")]
    GoalCount(usize),
    #[error("goal vehicle must be horizontal on the exit row, found {orientation:?} at row {row}")]
    UnreachableExit {
        orientation: Orientation,
        row: i32,
    },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("error from serde_json in level data: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("level data contains no levels")]
    Empty,
    #[error("level {index} ([{name}]) is invalid: {source}")]
    InvalidLevel {
        index: usize,
        name: String,
        #[source]
        source: LevelError,
    },
}
