//! Search sessions: one validated grid and start/goal pair that every strategy
//! runs against, so their results can be compared like for like.

use std::{fmt, thread};

use log::debug;
use crate::errors::{Endpoint, PathPlannerError, Result};
use crate::geometry::{Cell, Heuristic};
use crate::graph_algos::a_star::AStar;
use crate::graph_algos::bfs::breadth_first;
use crate::graph_algos::dfs::depth_first;
use crate::graph_algos::dijkstra::dijkstra;
use crate::grid::{Grid, Layout, Tile};
use crate::instrumentation::{instrumented, SearchResult};


/// Grid moves all cost the same
const MOVE_COST: u32 = 1;


/// Search strategies, in their fixed reporting order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [Strategy::Bfs, Strategy::Dfs, Strategy::Dijkstra, Strategy::AStar];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
            Strategy::Dijkstra => "Dijkstra",
            Strategy::AStar => "A*",
        }
    }

    /// Whether the strategy always returns a minimum-move path
    pub fn is_optimal(&self) -> bool {
        !matches!(self, Strategy::Dfs)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}


/// Validated grid + endpoints
/// Runs never mutate the session, so it can be shared across threads freely
#[derive(Clone, Debug)]
pub struct SearchSession {
    grid: Grid,
    start: Cell,
    goal: Cell,
    heuristic: Heuristic,
}

impl SearchSession {

    /// Fails if either endpoint is outside the grid or on an obstacle
    pub fn new(grid: Grid, start: Cell, goal: Cell) -> Result<Self> {
        check_endpoint(&grid, Endpoint::Start, start)?;
        check_endpoint(&grid, Endpoint::Goal, goal)?;

        debug!(
            "[Session] {}x{} grid, start={} goal={}",
            grid.rows(), grid.cols(), start, goal
        );

        Ok(Self {
            grid,
            start,
            goal,
            heuristic: Heuristic::default(),
        })
    }

    /// Also validates that the rows form a rectangle
    pub fn from_rows(rows: Vec<Vec<Tile>>, start: Cell, goal: Cell) -> Result<Self> {
        Self::new(Grid::new(rows)?, start, goal)
    }

    /// Parse a textual layout, taking the endpoints from its `S` and `E` markers
    pub fn from_layout(text: &str) -> Result<Self> {
        let Layout { grid, start, goal } = text.parse::<Layout>()?;
        let start = start.ok_or(PathPlannerError::MissingMarker(Endpoint::Start))?;
        let goal = goal.ok_or(PathPlannerError::MissingMarker(Endpoint::Goal))?;
        Self::new(grid, start, goal)
    }

    /// Heuristic used by A*
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    fn is_goal(&self, cell: &Cell) -> bool {
        *cell == self.goal
    }

    fn weighted_neighbors(&self, cell: Cell) -> impl Iterator<Item = (Cell, u32)> + '_ {
        self.grid.neighbors(cell).map(|n| (n, MOVE_COST))
    }

    pub fn bfs(&self) -> Result<SearchResult> {
        instrumented(Strategy::Bfs, |probe| {
            Ok(breadth_first(self.start, |c: &Cell| self.grid.neighbors(*c), |c| self.is_goal(c), probe))
        })
    }

    pub fn dfs(&self) -> Result<SearchResult> {
        instrumented(Strategy::Dfs, |probe| {
            Ok(depth_first(self.start, |c: &Cell| self.grid.neighbors(*c), |c| self.is_goal(c), probe))
        })
    }

    pub fn dijkstra(&self) -> Result<SearchResult> {
        instrumented(Strategy::Dijkstra, |probe| {
            dijkstra(self.start, |c: &Cell| self.weighted_neighbors(*c), |c| self.is_goal(c), probe)
        })
    }

    pub fn a_star(&self) -> Result<SearchResult> {
        let heuristic = self.heuristic;
        instrumented(Strategy::AStar, |probe| {
            AStar {}.plan(
                self.start,
                |c: &Cell| self.weighted_neighbors(*c),
                |c: &Cell| heuristic.estimate(c, &self.goal),
                |c| self.is_goal(c),
                probe,
            )
        })
    }

    pub fn run(&self, strategy: Strategy) -> Result<SearchResult> {
        let result = match strategy {
            Strategy::Bfs => self.bfs(),
            Strategy::Dfs => self.dfs(),
            Strategy::Dijkstra => self.dijkstra(),
            Strategy::AStar => self.a_star(),
        }?;

        debug!(
            "[Session] {}: path_len={} visited={} peak={} elapsed={:?}",
            strategy,
            result.path_len(),
            result.visited,
            result.peak_working_set,
            result.elapsed
        );
        Ok(result)
    }

    /// Every strategy in turn, results in `Strategy::ALL` order
    pub fn run_all(&self) -> Result<Vec<SearchResult>> {
        Strategy::ALL.iter().map(|&s| self.run(s)).collect()
    }

    /// One thread per strategy over the shared grid
    /// Results come back in `Strategy::ALL` order regardless of finishing order.
    /// Timings overlap, so they are only comparable with each other loosely.
    pub fn run_all_parallel(&self) -> Result<Vec<SearchResult>> {
        thread::scope(|scope| {
            let handles: Vec<_> = Strategy::ALL
                .iter()
                .map(|&s| scope.spawn(move || self.run(s)))
                .collect();

            handles
                .into_iter()
                .zip(Strategy::ALL)
                .map(|(handle, s)| match handle.join() {
                    Ok(result) => result,
                    Err(_) => Err(PathPlannerError::InvariantViolation(format!("{s} search thread panicked"))),
                })
                .collect()
        })
    }
}


fn check_endpoint(grid: &Grid, endpoint: Endpoint, cell: Cell) -> Result<()> {
    match grid.tile(cell) {
        None => Err(PathPlannerError::OutOfBounds {
            endpoint,
            cell,
            rows: grid.rows(),
            cols: grid.cols(),
        }),
        Some(Tile::Blocked) => Err(PathPlannerError::Blocked { endpoint, cell }),
        Some(Tile::Passable) => Ok(()),
    }
}
