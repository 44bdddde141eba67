//! Grid path planning with comparable instrumentation.
//!
//! Four strategies search the same obstacle grid between the same two cells:
//!
//! - **BFS** - FIFO frontier, shortest in moves
//! - **DFS** - LIFO frontier, *a* path, included as a worst-case baseline
//! - **Dijkstra** - min-cost frontier with lazy deletion of stale entries
//! - **A\*** - Dijkstra ordered by cost + Manhattan estimate
//!
//! Each run reports its path, how many cells it visited, how long it took and
//! the peak size of its working set (frontier + visited set + score maps), so
//! the strategies can be compared on identical input.
//!
//! ```rust
//! use gridplan::{Comparison, SearchSession};
//!
//! let session = SearchSession::from_layout("
//!     S . . #
//!     . # . #
//!     . . . E
//! ").unwrap();
//!
//! let comparison = Comparison::new(session.run_all().unwrap());
//! assert!(comparison.optimality_agreement());
//! println!("{comparison}");
//! ```
//!
//! The search functions in [`graph_algos`] are generic over the node type and
//! can be driven by any neighbor closure, not just a [`Grid`].

pub mod errors;
mod collections;
pub mod geometry;
pub mod grid;
pub mod graph_algos;
pub mod instrumentation;
pub mod session;
pub mod report;

pub use errors::{Endpoint, GridError, PathPlannerError};
pub use geometry::{Cell, Directions, Heuristic, Offset, manhattan_distance};
pub use grid::{Grid, Layout, Tile};
pub use instrumentation::{Footprint, Probe, SearchResult};
pub use report::Comparison;
pub use session::{SearchSession, Strategy};
