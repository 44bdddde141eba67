use std::{fmt::Debug, hash::Hash};

use crate::errors::PathPlannerError;
use crate::collections::FxIndexMap;


/// Construct the path from the start node to the goal node
/// Returns the ordered path as a vector of nodes from start to goal
/// predecessors: node -> node it was reached from at lowest known cost (start has no entry)
/// start, goal: ends of the search
pub(crate) fn shortest_path<N>(predecessors: &FxIndexMap<N, N>, start: &N, goal: &N) -> Result<Vec<N>, PathPlannerError>
where
    N: Eq + Hash + Clone + Debug,
{

    if goal != start && !predecessors.contains_key(goal) {
        return Err(PathPlannerError::NoPathFound);
    }

    let mut path = vec![goal.clone()];
    let mut current = goal;

    // Trace back from goal to start
    // Each step consumes one map entry, so a longer walk means the chain loops
    while current != start {
        if path.len() > predecessors.len() {
            return Err(PathPlannerError::InvariantViolation(
                format!("predecessor chain from {goal:?} loops without reaching {start:?}")
            ));
        }
        match predecessors.get(current) {
            Some(parent) => {
                path.push(parent.clone());
                current = parent;
            }
            None => {
                return Err(PathPlannerError::InvariantViolation(
                    format!("{current:?} has no predecessor but is not the start {start:?}")
                ));
            }
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}
