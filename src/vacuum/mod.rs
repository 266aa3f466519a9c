mod cleaner;
mod common;
mod error;
mod grid;

pub use cleaner::{clean, clean_rows, resolve_heading, CleanReport, Cleaner, Termination};
pub use common::{CellField, Heading, Position};
pub use error::VacuumError;
pub use grid::Grid;
