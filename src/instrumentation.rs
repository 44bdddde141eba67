//! Uniform measurement of a single search run.
//!
//! The working-set figure is an approximation of memory pressure, not a byte
//! count: it is the sum of container cardinalities (frontier entries, visited
//! cells and every auxiliary map entry) sampled once per search iteration, and
//! the reported peak is the largest sum observed.

use std::time::{Duration, Instant};

use log::trace;
use crate::errors::Result;
use crate::geometry::Cell;
use crate::graph_algos::Outcome;
use crate::session::Strategy;


/// Container sizes at one instant of a search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Footprint {
    pub frontier: usize,
    pub visited: usize,
    /// Score and predecessor map entries: none for BFS/DFS, g + predecessor for
    /// Dijkstra, g + f + predecessor for A*. A*'s extra f-score map raises its
    /// total even when it visits no more cells than Dijkstra, so compare
    /// `frontier` and `visited` when only the search effort matters.
    pub auxiliary: usize,
}

impl Footprint {
    pub fn total(&self) -> usize {
        self.frontier + self.visited + self.auxiliary
    }
}


/// Receives working-set samples and expansion counts from a running search
#[derive(Debug, Default)]
pub struct Probe {
    peak: Footprint,
    expansions: usize,
    samples: usize,
}

impl Probe {

    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current container sizes, keeping the largest total seen
    pub fn sample(&mut self, footprint: Footprint) {
        self.samples += 1;
        if footprint.total() > self.peak.total() {
            self.peak = footprint;
        }
    }

    /// Record that a node was taken off the frontier and expanded
    pub fn expanded(&mut self) {
        self.expansions += 1;
    }

    pub fn peak(&self) -> Footprint {
        self.peak
    }

    pub fn expansions(&self) -> usize {
        self.expansions
    }

    pub fn samples(&self) -> usize {
        self.samples
    }
}


/// Result of one strategy run, immutable once produced
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult<N = Cell> {
    pub strategy: Strategy,
    /// Start to goal inclusive, `None` when the goal is unreachable
    pub path: Option<Vec<N>>,
    /// Cells marked visited by the end of the run
    pub visited: usize,
    /// Frontier entries that were expanded (stale entries excluded)
    pub expanded: usize,
    pub elapsed: Duration,
    pub peak_working_set: usize,
    pub peak_footprint: Footprint,
}

impl<N> SearchResult<N> {

    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of cells in the path, 0 when no path was found
    pub fn path_len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }

    /// Number of moves in the path
    pub fn moves(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }
}


/// Time a search and package its outcome with the probe readings
pub fn instrumented<N, F>(strategy: Strategy, search: F) -> Result<SearchResult<N>>
where
    F: FnOnce(&mut Probe) -> Result<Outcome<N>>,
{
    let mut probe = Probe::new();

    let started = Instant::now();
    let outcome = search(&mut probe)?;
    let elapsed = started.elapsed();

    trace!(
        "[{}] finished in {:?}: found={} visited={} expanded={} peak={} samples={}",
        strategy,
        elapsed,
        outcome.path.is_some(),
        outcome.visited,
        probe.expansions(),
        probe.peak().total(),
        probe.samples()
    );

    Ok(SearchResult {
        strategy,
        path: outcome.path,
        visited: outcome.visited,
        expanded: probe.expansions(),
        elapsed,
        peak_working_set: probe.peak().total(),
        peak_footprint: probe.peak(),
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PathPlannerError;

    #[test]
    fn test_probe_keeps_peak() {
        let mut probe = Probe::new();
        probe.sample(Footprint { frontier: 1, visited: 1, auxiliary: 0 });
        probe.sample(Footprint { frontier: 4, visited: 3, auxiliary: 2 });
        probe.sample(Footprint { frontier: 0, visited: 6, auxiliary: 2 });
        assert_eq!(probe.peak(), Footprint { frontier: 4, visited: 3, auxiliary: 2 });
        assert_eq!(probe.peak().total(), 9);
        assert_eq!(probe.samples(), 3);
    }

    #[test]
    fn test_instrumented_packages_outcome() {
        let result = instrumented(Strategy::Bfs, |probe| {
            probe.sample(Footprint { frontier: 2, visited: 3, auxiliary: 0 });
            probe.expanded();
            probe.expanded();
            Ok(Outcome { path: Some(vec!['a', 'b']), visited: 3 })
        }).unwrap();

        assert_eq!(result.strategy, Strategy::Bfs);
        assert_eq!(result.path, Some(vec!['a', 'b']));
        assert_eq!(result.visited, 3);
        assert_eq!(result.expanded, 2);
        assert_eq!(result.peak_working_set, 5);
        assert_eq!(result.path_len(), 2);
        assert_eq!(result.moves(), Some(1));
        assert!(result.found());
    }

    #[test]
    fn test_instrumented_no_path() {
        let result = instrumented::<char, _>(Strategy::Dfs, |_| Ok(Outcome { path: None, visited: 7 })).unwrap();
        assert!(!result.found());
        assert_eq!(result.path_len(), 0);
        assert_eq!(result.moves(), None);
        assert_eq!(result.visited, 7);
    }

    #[test]
    fn test_instrumented_propagates_invariant_errors() {
        let result = instrumented::<char, _>(Strategy::AStar, |_| {
            Err(PathPlannerError::InvariantViolation("broken".into()))
        });
        assert!(matches!(result, Err(PathPlannerError::InvariantViolation(_))));
    }
}
