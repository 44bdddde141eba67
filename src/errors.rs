use std::fmt;

use thiserror::Error;

use crate::geometry::Cell;


/// Which end of the search a configuration error refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}


#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    #[error("grid must have at least one row and one column")]
    Empty,

    #[error("grid row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },

    #[error("{rows}x{cols} grid exceeds the addressable cell range")]
    TooLarge { rows: usize, cols: usize },

    #[error("obstacle density {0} is outside [0, 1]")]
    InvalidDensity(f64),

    #[error("directions must be the four unit offsets, each exactly once")]
    InvalidDirections,

    #[error("unknown grid marker {marker:?} at row {row}, col {col}")]
    UnknownMarker { marker: char, row: usize, col: usize },

    #[error("grid layout has more than one {0:?} marker")]
    DuplicateMarker(char),
}


#[derive(Debug, Error, Clone, PartialEq)]
pub enum PathPlannerError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("{endpoint} {cell} lies outside the {rows}x{cols} grid")]
    OutOfBounds { endpoint: Endpoint, cell: Cell, rows: usize, cols: usize },

    #[error("{endpoint} {cell} is on a blocked cell")]
    Blocked { endpoint: Endpoint, cell: Cell },

    #[error("grid layout has no {0} marker")]
    MissingMarker(Endpoint),

    // Goal was never reached, so it has no predecessor
    #[error("no path found")]
    NoPathFound,

    // Bookkeeping went wrong inside a search; never expected in practice
    #[error("search invariant violated: {0}")]
    InvariantViolation(String),
}


pub type Result<T> = std::result::Result<T, PathPlannerError>;
