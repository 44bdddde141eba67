//! Side-by-side comparison of strategy runs on the same grid.

use std::fmt;

use crate::instrumentation::SearchResult;
use crate::session::Strategy;


/// Results of several strategies run on one grid and start/goal pair
#[derive(Clone, Debug)]
pub struct Comparison {
    results: Vec<SearchResult>,
}

impl Comparison {

    pub fn new(results: Vec<SearchResult>) -> Self {
        Self { results }
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn get(&self, strategy: Strategy) -> Option<&SearchResult> {
        self.results.iter().find(|r| r.strategy == strategy)
    }

    /// Runs that reached the goal
    pub fn successful(&self) -> impl Iterator<Item = &SearchResult> + '_ {
        self.results.iter().filter(|r| r.found())
    }

    /// Quickest successful run (first listed wins ties)
    pub fn fastest(&self) -> Option<&SearchResult> {
        self.successful().min_by_key(|r| r.elapsed)
    }

    /// Successful run that visited the fewest cells
    pub fn fewest_visited(&self) -> Option<&SearchResult> {
        self.successful().min_by_key(|r| r.visited)
    }

    /// Successful run with the fewest moves
    pub fn shortest(&self) -> Option<&SearchResult> {
        self.successful().min_by_key(|r| r.path_len())
    }

    /// Successful run with the smallest peak working set
    pub fn smallest_footprint(&self) -> Option<&SearchResult> {
        self.successful().min_by_key(|r| r.peak_working_set)
    }

    /// True when the optimal strategies agree on path length and no
    /// non-optimal strategy beat them. Also true when nobody found a path.
    pub fn optimality_agreement(&self) -> bool {
        let optimal: Vec<Option<usize>> = self.results
            .iter()
            .filter(|r| r.strategy.is_optimal())
            .map(|r| r.moves())
            .collect();

        let Some(&reference) = optimal.first() else {
            return true;
        };
        if optimal.iter().any(|m| *m != reference) {
            return false;
        }

        self.results
            .iter()
            .filter(|r| !r.strategy.is_optimal())
            .all(|r| match (r.moves(), reference) {
                (Some(moves), Some(best)) => moves >= best,
                (None, None) => true,
                _ => false,
            })
    }
}

impl From<Vec<SearchResult>> for Comparison {
    fn from(results: Vec<SearchResult>) -> Self {
        Self::new(results)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10} {:>8} {:>12} {:>8} {:>12} {:>6}",
            "strategy", "path", "time (ms)", "visited", "peak set", "found"
        )?;
        writeln!(f, "{}", "-".repeat(61))?;
        for r in &self.results {
            writeln!(
                f,
                "{:<10} {:>8} {:>12.3} {:>8} {:>12} {:>6}",
                r.strategy,
                r.path_len(),
                r.elapsed.as_secs_f64() * 1000.0,
                r.visited,
                r.peak_working_set,
                if r.found() { "yes" } else { "no" },
            )?;
        }

        if let Some(fastest) = self.fastest() {
            writeln!(f, "fastest: {} ({:.3} ms)", fastest.strategy, fastest.elapsed.as_secs_f64() * 1000.0)?;
        }
        if let Some(frugal) = self.fewest_visited() {
            writeln!(f, "fewest visited: {} ({} cells)", frugal.strategy, frugal.visited)?;
        }
        Ok(())
    }
}
