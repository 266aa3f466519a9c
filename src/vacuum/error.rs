use std::{io, path::PathBuf};

use thiserror::Error;

use super::common::Position;

#[derive(Error, Debug)]
pub enum VacuumError {
    #[error("Grid has no rows")]
    EmptyGrid,
    #[error("Grid has no columns")]
    EmptyRow,
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Unexpected cell {cell:?} at ({x}, {y})")]
    UnexpectedCell { cell: char, x: usize, y: usize },
    #[error("Origin {0} is an obstacle")]
    BlockedOrigin(Position),
    #[error("Traversal did not settle within {0} iterations")]
    IterationLimit(usize),
    #[error("Cannot read level {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
