//! **gridpath-core** — board model for the grid pathfinding visualizer.
//!
//! This crate provides the types every other part of the workspace shares:
//! [`Coord`] geometry, the [`Grid`] board of [`CellKind`]s with its bounds,
//! traversability and neighbour queries, and the default [`BoardConfig`].

pub mod config;
pub mod geom;
pub mod grid;

pub use config::BoardConfig;
pub use geom::{Coord, Dir};
pub use grid::{CellKind, Grid, GridError};
