
pub mod frontier;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod a_star;
mod uninformed;
mod shortest_path;

use shortest_path::shortest_path;

pub use frontier::{Fifo, Frontier, Lifo, MinQueue};


/// What a search hands back to the instrumentation layer
/// path: start to goal inclusive, `None` if the frontier ran dry first
/// visited: size of the visited set when the search stopped
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome<N> {
    pub path: Option<Vec<N>>,
    pub visited: usize,
}
