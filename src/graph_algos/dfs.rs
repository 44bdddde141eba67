use std::hash::Hash;

use crate::instrumentation::Probe;
use super::{Lifo, Outcome};
use super::uninformed::uninformed_search;


/// Depth-first search
/// https://en.wikipedia.org/wiki/Depth-first_search
/// Finds *a* path whenever one is reachable, but not necessarily a short one -
/// which path depends entirely on neighbor order
pub fn depth_first<N, IT, NN, G>(start: N, neighbors: NN, goal: G, probe: &mut Probe) -> Outcome<N>
where
    N: Eq + Hash + Clone,
    NN: Fn(&N) -> IT, // returns iterator of neighbors
    IT: IntoIterator<Item = N>,
    G: Fn(&N) -> bool, // node qualifier for goal
{
    uninformed_search(Lifo::new(), start, neighbors, goal, probe)
}
