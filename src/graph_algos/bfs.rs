use std::hash::Hash;

use crate::instrumentation::Probe;
use super::{Fifo, Outcome};
use super::uninformed::uninformed_search;


/// Breadth-first search
/// https://en.wikipedia.org/wiki/Breadth-first_search
/// Expands nodes in order of move count from start, so with uniform edge costs
/// the first path to reach the goal is a shortest one
pub fn breadth_first<N, IT, NN, G>(start: N, neighbors: NN, goal: G, probe: &mut Probe) -> Outcome<N>
where
    N: Eq + Hash + Clone,
    NN: Fn(&N) -> IT, // returns iterator of neighbors
    IT: IntoIterator<Item = N>,
    G: Fn(&N) -> bool, // node qualifier for goal
{
    uninformed_search(Fifo::new(), start, neighbors, goal, probe)
}
