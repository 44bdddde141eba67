use crate::errors::PathPlannerError;
use crate::collections::{FxHashMap, FxHashSet, FxIndexMap};
use crate::instrumentation::{Footprint, Probe};
use super::{shortest_path, Frontier, MinQueue, Outcome};

use std::{hash::Hash, fmt::Debug};
use log::trace;
use num_traits::Zero;




/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start Node, traverse through graph until node meets goal criteria
///
/// Relaxation never removes entries from the queue. A node can therefore be
/// queued several times; the first extraction finalizes it and any later one
/// is stale and skipped without being counted as a visit.
pub fn dijkstra<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G, probe: &mut Probe) -> Result<Outcome<N>, PathPlannerError>
where
    N: Eq + Hash + Ord + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    // Nodes to visit, cheapest accumulated cost first
    let mut nodes_to_visit: MinQueue<C, N> = MinQueue::new();

    // Best known cost from start, missing entries are "infinite"
    let mut g_score: FxHashMap<N, C> = FxHashMap::default();

    // node -> node it was reached from at the lowest known cost
    let mut predecessors: FxIndexMap<N, N> = FxIndexMap::default();

    // finalized nodes - cost is known, no longer need to visit
    let mut visited: FxHashSet<N> = FxHashSet::default();

    g_score.insert(start.clone(), Zero::zero());
    nodes_to_visit.push((Zero::zero(), start.clone()));

    loop {
        probe.sample(Footprint {
            frontier: nodes_to_visit.len(),
            visited: visited.len(),
            auxiliary: g_score.len() + predecessors.len(),
        });

        let Some((cost, node)) = nodes_to_visit.pop() else {
            break;
        };

        // Already finalized through a cheaper entry
        if !visited.insert(node.clone()) {
            trace!("[Dijkstra] skipping stale entry for {node:?}");
            continue;
        }
        probe.expanded();

        // Check if we've reached the goal
        if goal(&node) {
            trace!("[Dijkstra] reached {node:?} after {} expansions", probe.expansions());
            let path = shortest_path(&predecessors, &start, &node)?;
            return Ok(Outcome { path: Some(path), visited: visited.len() });
        }

        // loop over neighbors
        for (neighbor, edge_cost) in neighbors(&node) {

            // new cost to reach this node = edge cost + node cost
            let new_cost = cost + edge_cost;

            let improved = g_score.get(&neighbor).is_none_or(|&known| new_cost < known);
            if improved {
                g_score.insert(neighbor.clone(), new_cost);
                predecessors.insert(neighbor.clone(), node.clone());
                nodes_to_visit.push((new_cost, neighbor));
            }
        }
    }

    Ok(Outcome { path: None, visited: visited.len() })
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // Helper function to create a test graph
    fn create_test_graph() -> HashMap<String, Vec<(String, u32)>> {
        let mut graph = HashMap::new();

        // Diamond-shaped graph: A -> B -> D and A -> C -> D
        graph.insert("A".to_string(), vec![
            ("B".to_string(), 1),
            ("C".to_string(), 3),
        ]);

        graph.insert("B".to_string(), vec![
            ("D".to_string(), 5),
        ]);

        graph.insert("C".to_string(), vec![
            ("D".to_string(), 1),
        ]);

        graph.insert("D".to_string(), vec![]);

        graph
    }

    // Helper function to create a neighbor function from a graph
    fn create_neighbor_fn(graph: &HashMap<String, Vec<(String, u32)>>) -> impl Fn(&String) -> Vec<(String, u32)> + '_ {
        move |node: &String| {
            graph.get(node).cloned().unwrap_or_default()
        }
    }

    fn names(path: &[&str]) -> Vec<String> {
        path.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dijkstra_finds_optimal_path() {
        let graph = create_test_graph();
        let neighbors = create_neighbor_fn(&graph);

        // Run Dijkstra's algorithm from node A to node D
        let mut probe = Probe::new();
        let outcome = dijkstra("A".to_string(), neighbors, |node| node == "D", &mut probe).unwrap();

        // The expected path is A -> C -> D (the cheapest path)
        assert_eq!(outcome.path, Some(names(&["A", "C", "D"])));
        assert_eq!(outcome.visited, 4);
    }

    #[test]
    fn test_dijkstra_skips_stale_entries() {
        // D is first queued at cost 6 via B, then again at cost 4 via C.
        // The cost-6 entry is popped after D is finalized and must not count as a visit.
        let graph = create_test_graph();
        let mut probe = Probe::new();
        let outcome = dijkstra("A".to_string(), create_neighbor_fn(&graph), |_| false, &mut probe).unwrap();

        assert_eq!(outcome.path, None);
        assert_eq!(outcome.visited, 4);
        assert_eq!(probe.expansions(), 4);
        // 1 start entry + B + C + D(6) + D(4) were pushed, only 4 expanded
        assert!(probe.samples() >= 6);
    }

    #[test]
    fn test_dijkstra_with_cycle() {
        // Create a graph with a cycle: A -> B -> C -> A
        let mut graph = HashMap::new();

        graph.insert("A".to_string(), vec![("B".to_string(), 1)]);
        graph.insert("B".to_string(), vec![("C".to_string(), 1)]);
        graph.insert("C".to_string(), vec![("A".to_string(), 1), ("D".to_string(), 2)]);
        graph.insert("D".to_string(), vec![]);

        let mut probe = Probe::new();
        let outcome = dijkstra("A".to_string(), create_neighbor_fn(&graph), |node| node == "D", &mut probe).unwrap();

        assert_eq!(outcome.path, Some(names(&["A", "B", "C", "D"])));
    }

    #[test]
    fn test_dijkstra_handles_unreachable_goal() {
        // Create a graph with no path to the goal
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 1)]);
        graph.insert("B".to_string(), vec![("C".to_string(), 1)]);
        graph.insert("C".to_string(), vec![]);
        graph.insert("D".to_string(), vec![]); // D is not connected

        let mut probe = Probe::new();
        let outcome = dijkstra("A".to_string(), create_neighbor_fn(&graph), |node| node == "D", &mut probe).unwrap();

        // Unreachable is a normal outcome, not an error
        assert_eq!(outcome.path, None);
        assert_eq!(outcome.visited, 3);
    }

    #[test]
    fn test_dijkstra_stops_at_goal() {
        // A -> B -> D (cost 2) is the shortest path to goal
        // A -> C -> E/F -> G/H are high-cost paths that shouldn't be expanded
        let mut graph = HashMap::new();

        graph.insert("A".to_string(), vec![
            ("B".to_string(), 1),
            ("C".to_string(), 10),
        ]);

        graph.insert("B".to_string(), vec![("D".to_string(), 1)]);
        graph.insert("C".to_string(), vec![("E".to_string(), 5), ("F".to_string(), 20)]);
        graph.insert("E".to_string(), vec![("G".to_string(), 5)]);
        graph.insert("F".to_string(), vec![("H".to_string(), 1)]);

        let mut probe = Probe::new();
        let outcome = dijkstra("A".to_string(), create_neighbor_fn(&graph), |node| node == "D", &mut probe).unwrap();

        assert_eq!(outcome.path, Some(names(&["A", "B", "D"])));
        // A, B, D finalized - C was queued but never extracted
        assert_eq!(outcome.visited, 3);
        // peak: {C, D} queued + {A, B} visited + g{A, B, C, D} + pred{B, C, D}
        assert_eq!(probe.peak(), Footprint { frontier: 2, visited: 2, auxiliary: 7 });
    }

    #[test]
    fn test_dijkstra_complex_graph() {
        // Create a more complex graph with multiple paths
        let mut graph = HashMap::new();

        graph.insert("A".to_string(), vec![("B".to_string(), 4), ("C".to_string(), 2)]);
        graph.insert("B".to_string(), vec![("C".to_string(), 1), ("D".to_string(), 5)]);
        graph.insert("C".to_string(), vec![("D".to_string(), 8), ("E".to_string(), 10)]);
        graph.insert("D".to_string(), vec![("E".to_string(), 2), ("F".to_string(), 6)]);
        graph.insert("E".to_string(), vec![("F".to_string(), 3)]);
        graph.insert("F".to_string(), vec![]);

        let mut probe = Probe::new();
        let outcome = dijkstra("A".to_string(), create_neighbor_fn(&graph), |node| node == "F", &mut probe).unwrap();
        let path = outcome.path.unwrap();

        // Calculate the total cost of the path
        let mut total_cost = 0;
        for i in 0..path.len() - 1 {
            let from = &path[i];
            let to = &path[i + 1];
            let edge_cost = graph.get(from).unwrap()
                .iter()
                .find(|(node, _)| node == to)
                .map(|(_, cost)| *cost)
                .unwrap();
            total_cost += edge_cost;
        }

        // The total cost should be 14 (A->B->D->E->F)
        assert_eq!(total_cost, 14);
    }
}
