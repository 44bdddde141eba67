use std::str::FromStr;

use rand::Rng;
use crate::errors::GridError;
use crate::geometry::{Cell, Directions};


/// Contents of a single grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Passable,
    Blocked,
}

impl From<bool> for Tile {
    /// `true` marks an obstacle
    fn from(blocked: bool) -> Self {
        if blocked { Tile::Blocked } else { Tile::Passable }
    }
}


/// Rectangular obstacle map
/// Immutable once built, so a single grid can be shared by concurrent searches
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>, // row-major
    directions: Directions,
}

impl Grid {

    /// Build a grid from rows of tiles
    /// Every row must have the same, non-zero, number of tiles
    pub fn new(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let n_rows = rows.len();
        check_dimensions(n_rows, cols)?;
        let mut tiles = Vec::with_capacity(n_rows * cols);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != cols {
                return Err(GridError::Ragged { row, expected: cols, found: r.len() });
            }
            tiles.extend(r);
        }

        Ok(Self {
            rows: n_rows,
            cols,
            tiles,
            directions: Directions::default(),
        })
    }

    /// Grid with no obstacles
    pub fn open(rows: usize, cols: usize) -> Result<Self, GridError> {
        check_dimensions(rows, cols)?;
        Self::new(vec![vec![Tile::Passable; cols]; rows])
    }

    /// Build from integer rows - 0 is passable, anything else is an obstacle
    pub fn from_obstacles<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        Self::new(
            rows.iter()
                .map(|r| r.as_ref().iter().map(|&v| Tile::from(v != 0)).collect())
                .collect(),
        )
    }

    /// Random grid where each cell is blocked with probability `density`
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, density: f64, rng: &mut R) -> Result<Self, GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity(density));
        }
        check_dimensions(rows, cols)?;
        Self::new(
            (0..rows)
                .map(|_| (0..cols).map(|_| Tile::from(rng.random_bool(density))).collect())
                .collect(),
        )
    }

    /// Replace the neighbor enumeration order
    pub fn with_directions(mut self, directions: Directions) -> Self {
        self.directions = directions;
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn directions(&self) -> &Directions {
        &self.directions
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Tile at a cell, `None` when out of bounds
    pub fn tile(&self, cell: Cell) -> Option<Tile> {
        self.index(cell.row, cell.col).map(|i| self.tiles[i])
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.index(cell.row, cell.col).is_some()
    }

    /// False for blocked cells and for anything outside the grid
    pub fn is_passable(&self, row: i32, col: i32) -> bool {
        matches!(self.index(row, col).map(|i| self.tiles[i]), Some(Tile::Passable))
    }

    pub fn is_open(&self, cell: Cell) -> bool {
        self.is_passable(cell.row, cell.col)
    }

    /// Passable neighbors of a cell, in the grid's direction order
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.directions
            .iter()
            .map(move |offset| cell.step(offset))
            .filter(move |n| self.is_open(*n))
    }

    /// All passable cells in row-major order
    pub fn passable_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        // dimensions were checked in `new`, so both coordinates fit an i32
        self.tiles.iter().enumerate().filter_map(move |(i, tile)| {
            (*tile == Tile::Passable).then(|| Cell::new((i / self.cols) as i32, (i % self.cols) as i32))
        })
    }
}


/// Every cell index has to fit the signed coordinates of a `Cell`
fn check_dimensions(rows: usize, cols: usize) -> Result<(), GridError> {
    if i32::try_from(rows).is_err() || i32::try_from(cols).is_err() {
        return Err(GridError::TooLarge { rows, cols });
    }
    Ok(())
}


/// Grid parsed from text along with any start/end markers found in it
///
/// Markers: `.` or `0` passable, `#` or `1` blocked, `S` start, `E` end.
/// Whitespace between markers is ignored and blank lines are skipped,
/// so both `S..#` and `S . . #` parse the same.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub grid: Grid,
    pub start: Option<Cell>,
    pub goal: Option<Cell>,
}

impl FromStr for Layout {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        let mut start = None;
        let mut goal = None;

        for line in s.lines().filter(|l| !l.trim().is_empty()) {
            let row = rows.len();
            let mut tiles = Vec::new();
            for marker in line.chars().filter(|c| !c.is_whitespace()) {
                let col = tiles.len();
                check_dimensions(row + 1, col + 1)?;
                let here = Cell::new(row as i32, col as i32);
                let tile = match marker {
                    '.' | '0' => Tile::Passable,
                    '#' | '1' => Tile::Blocked,
                    'S' => {
                        if start.replace(here).is_some() {
                            return Err(GridError::DuplicateMarker('S'));
                        }
                        Tile::Passable
                    }
                    'E' => {
                        if goal.replace(here).is_some() {
                            return Err(GridError::DuplicateMarker('E'));
                        }
                        Tile::Passable
                    }
                    other => return Err(GridError::UnknownMarker { marker: other, row, col }),
                };
                tiles.push(tile);
            }
            rows.push(tiles);
        }

        Ok(Self { grid: Grid::new(rows)?, start, goal })
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<Layout>()?.grid)
    }
}
