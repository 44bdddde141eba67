use std::fmt;

use num_traits::{Num, Signed};
use crate::errors::GridError;


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}


/// Grid cell coordinate, 0-indexed (row, col)
/// Signed so that stepping off the top or left edge yields an out-of-bounds cell
/// rather than an underflow
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Cell reached by applying an offset
    pub fn step(self, offset: Offset) -> Self {
        Self {
            row: self.row + offset.d_row,
            col: self.col + offset.d_col,
        }
    }

    /// Manhattan distance between two cells
    pub fn manhattan(&self, other: &Cell) -> u32 {
        manhattan_distance(self.row, self.col, other.row, other.col).unsigned_abs()
    }

    /// True when the cells differ by exactly one unit along exactly one axis
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}


/// Single unit move on the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Offset {
    pub d_row: i32,
    pub d_col: i32,
}

impl Offset {
    pub const RIGHT: Offset = Offset { d_row: 0, d_col: 1 };
    pub const DOWN: Offset = Offset { d_row: 1, d_col: 0 };
    pub const LEFT: Offset = Offset { d_row: 0, d_col: -1 };
    pub const UP: Offset = Offset { d_row: -1, d_col: 0 };
}


/// Order in which a cell's neighbors are enumerated, shared by every strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Directions([Offset; 4]);

impl Directions {

    /// Custom neighbor order - must be a permutation of the four unit offsets
    pub fn new(order: [Offset; 4]) -> Result<Self, GridError> {
        let units = [Offset::RIGHT, Offset::DOWN, Offset::LEFT, Offset::UP];
        let is_permutation = units.iter().all(|u| order.iter().filter(|o| *o == u).count() == 1);
        if !is_permutation {
            return Err(GridError::InvalidDirections);
        }
        Ok(Self(order))
    }

    pub fn iter(&self) -> impl Iterator<Item = Offset> + '_ {
        self.0.iter().copied()
    }
}

impl Default for Directions {
    /// +col, +row, -col, -row
    fn default() -> Self {
        Self([Offset::RIGHT, Offset::DOWN, Offset::LEFT, Offset::UP])
    }
}


/// Remaining-cost estimate used by A*
/// Both variants are admissible and consistent for 4-directional unit moves
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Heuristic {
    #[default]
    Manhattan,
    /// Always zero - A* expands like uniform-cost search
    Zero,
}

impl Heuristic {
    pub fn estimate(&self, from: &Cell, goal: &Cell) -> u32 {
        match self {
            Heuristic::Manhattan => from.manhattan(goal),
            Heuristic::Zero => 0,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(manhattan_distance(0, 0, 3, 4), 7);
        assert_eq!(manhattan_distance(-2i64, 5, 2, -1), 10);
        assert_eq!(Cell::new(9, 9).manhattan(&Cell::new(0, 0)), 18);
    }

    #[test]
    fn test_adjacency() {
        let c = Cell::new(3, 3);
        assert!(c.is_adjacent(&Cell::new(3, 4)));
        assert!(c.is_adjacent(&Cell::new(2, 3)));
        assert!(!c.is_adjacent(&Cell::new(4, 4))); // diagonal
        assert!(!c.is_adjacent(&c));
    }

    #[test]
    fn test_step_can_leave_grid() {
        assert_eq!(Cell::new(0, 0).step(Offset::UP), Cell::new(-1, 0));
        assert_eq!(Cell::new(0, 0).step(Offset::RIGHT), Cell::new(0, 1));
    }

    #[test]
    fn test_directions_validation() {
        let reversed = [Offset::UP, Offset::LEFT, Offset::DOWN, Offset::RIGHT];
        assert!(Directions::new(reversed).is_ok());

        let repeated = [Offset::UP, Offset::UP, Offset::DOWN, Offset::RIGHT];
        assert_eq!(Directions::new(repeated), Err(GridError::InvalidDirections));

        let diagonal = [Offset { d_row: 1, d_col: 1 }, Offset::LEFT, Offset::DOWN, Offset::RIGHT];
        assert_eq!(Directions::new(diagonal), Err(GridError::InvalidDirections));
    }

    #[test]
    fn test_default_direction_order() {
        let order: Vec<Offset> = Directions::default().iter().collect();
        assert_eq!(order, vec![Offset::RIGHT, Offset::DOWN, Offset::LEFT, Offset::UP]);
    }

    #[test]
    fn test_heuristics() {
        let goal = Cell::new(2, 2);
        assert_eq!(Heuristic::default().estimate(&Cell::new(0, 0), &goal), 4);
        assert_eq!(Heuristic::Zero.estimate(&Cell::new(0, 0), &goal), 0);
    }
}
