use std::hash::Hash;

use crate::collections::FxHashSet;
use crate::instrumentation::{Footprint, Probe};
use super::{Frontier, Outcome};


/// Shared loop of the uninformed searches
/// Each frontier entry carries the full path that led to it.
/// Nodes are marked visited when pushed, so no node is ever queued twice.
pub(super) fn uninformed_search<N, F, IT, NN, G>(mut frontier: F, start: N, neighbors: NN, goal_fn: G, probe: &mut Probe) -> Outcome<N>
where
    N: Eq + Hash + Clone,
    F: Frontier<Item = (N, Vec<N>)>,
    NN: Fn(&N) -> IT, // returns iterator of neighbors
    IT: IntoIterator<Item = N>,
    G: Fn(&N) -> bool, // node qualifier for goal
{
    let mut visited: FxHashSet<N> = FxHashSet::default();
    visited.insert(start.clone());
    frontier.push((start.clone(), vec![start]));

    loop {
        probe.sample(Footprint {
            frontier: frontier.len(),
            visited: visited.len(),
            auxiliary: 0,
        });

        let Some((node, path)) = frontier.pop() else {
            break;
        };
        probe.expanded();

        if goal_fn(&node) {
            return Outcome { path: Some(path), visited: visited.len() };
        }

        for neighbor in neighbors(&node) {
            if visited.insert(neighbor.clone()) {
                let mut extended = path.clone();
                extended.push(neighbor.clone());
                frontier.push((neighbor, extended));
            }
        }
    }

    Outcome { path: None, visited: visited.len() }
}
