use crate::coord::Coord;
use thiserror::Error;

/// Precondition violations. A search that simply finds no route is not an error; it returns
/// `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("grid must have at least one row and one column")]
    Empty,
    #[error("a {rows}x{cols} grid is too large to store")]
    TooLarge { rows: usize, cols: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{coord} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        coord: Coord,
        rows: usize,
        cols: usize,
    },
    #[error("unknown tile {ch:?} at row {row}, column {col}")]
    UnknownTile { ch: char, row: usize, col: usize },
    #[error("unknown cell code {0}")]
    UnknownCellCode(u8),
    #[error("heuristic factor must be finite and non-negative, got {0}")]
    InvalidHeuristicFactor(f32),
    #[error("obstacle density must lie in [0, 1], got {0}")]
    InvalidDensity(f64),
    #[error("no solvable layout found in {attempts} attempts")]
    Unsolvable { attempts: usize },
}
