use crate::errors::PathPlannerError;
use crate::collections::{FxHashMap, FxHashSet, FxIndexMap};
use crate::instrumentation::{Footprint, Probe};
use super::{shortest_path, Frontier, MinQueue, Outcome};

use std::{
    hash::Hash,
    fmt::Debug,
};
use log::trace;
use num_traits::Zero;



/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
pub struct AStar {}

impl AStar {

    /// From start Node, traverse through graph until node meets goal criteria
    /// The returned path is optimal as long as the heuristic is admissible
    /// (never overestimates the true cost to reach the goal).
    /// With a consistent heuristic every node is finalized at its optimal cost,
    /// so stale queue entries are simply skipped when they surface.
    pub fn plan<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G, probe: &mut Probe) -> Result<Outcome<N>, PathPlannerError>
    where
        N: Eq + Hash + Ord + Clone + Debug,
        NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
        H: Fn(&N) -> C, // heuristic function
        IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
        C: Zero + Ord + Copy,
        G: Fn(&N) -> bool, // node qualifier for goal
        {

        // Open List
        // Nodes that need to be evaluated, sorted by f_score (cost + heuristic)
        let mut open_list: MinQueue<C, N> = MinQueue::new();

        // Confirmed cost from start, and the estimated total through each node
        let mut g_score: FxHashMap<N, C> = FxHashMap::default();
        let mut f_score: FxHashMap<N, C> = FxHashMap::default();

        // node -> node it was reached from at the lowest known cost
        let mut predecessors: FxIndexMap<N, N> = FxIndexMap::default();

        // Closed list - evaluated nodes, avoids re-evaluating nodes
        let mut closed_list: FxHashSet<N> = FxHashSet::default();

        let start_f = heuristic_fn(&start);
        g_score.insert(start.clone(), Zero::zero());
        f_score.insert(start.clone(), start_f);
        open_list.push((start_f, start.clone()));

        loop {
            probe.sample(Footprint {
                frontier: open_list.len(),
                visited: closed_list.len(),
                auxiliary: g_score.len() + f_score.len() + predecessors.len(),
            });

            let Some((_, node)) = open_list.pop() else {
                break;
            };

            // Already evaluated through a better entry
            if !closed_list.insert(node.clone()) {
                trace!("[AStar] skipping stale entry for {node:?}");
                continue;
            }
            probe.expanded();

            // Check if we've reached the goal
            if goal_fn(&node) {
                trace!("[AStar] reached {node:?} after {} expansions", probe.expansions());
                let path = shortest_path(&predecessors, &start, &node)?;
                return Ok(Outcome { path: Some(path), visited: closed_list.len() });
            }

            let Some(&cost) = g_score.get(&node) else {
                return Err(PathPlannerError::InvariantViolation(
                    format!("{node:?} was queued without a g-score")
                ));
            };

            // loop over neighbors
            for (neighbor, edge_cost) in neighbors(&node) {

                // new cost to reach this node = edge cost + node cost
                // This is confirmed cost, not heuristic
                let new_cost = cost + edge_cost;

                let improved = g_score.get(&neighbor).is_none_or(|&known| new_cost < known);
                if !improved {
                    // The existing path is better, do nothing
                    continue;
                }

                let f_cost = new_cost + heuristic_fn(&neighbor);
                g_score.insert(neighbor.clone(), new_cost);
                f_score.insert(neighbor.clone(), f_cost);
                predecessors.insert(neighbor.clone(), node.clone());
                open_list.push((f_cost, neighbor));
            }
        }

        Ok(Outcome { path: None, visited: closed_list.len() })
    }
}
