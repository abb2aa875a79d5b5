//! Search engine for the grid pathfinding visualizer.
//!
//! Four interchangeable strategies explore a [`Grid`](gridpath_core::Grid)
//! from a start cell until they settle the end cell:
//!
//! - **BFS** breadth-first, shortest path ([`Algorithm::Bfs`])
//! - **DFS** depth-first, *a* path ([`Algorithm::Dfs`])
//! - **Dijkstra** shortest path by distance ([`Algorithm::Dijkstra`])
//! - **A\*** shortest path guided by Manhattan distance ([`Algorithm::AStar`])
//!
//! [`search`] returns a [`SearchResult`] holding the order in which cells were
//! settled and the reconstructed path. Movement is 4-directional and every
//! step costs 1. Neighbours are always enumerated up, down, left, right, which
//! makes every strategy deterministic.
//!
//! With the `serde` feature, the [`request`] module provides the JSON
//! request/response shapes used by the front end.

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod engine;
mod error;
mod reconstruct;
#[cfg(feature = "serde")]
pub mod request;
mod result;
mod space;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use engine::search;
pub use error::{Endpoint, SearchError};
pub use reconstruct::reconstruct_path;
pub use result::SearchResult;
