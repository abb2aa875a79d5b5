//! Default board configuration.

use crate::geom::Coord;
use crate::grid::{CellKind, Grid, GridError};

/// Size and endpoint placement of a freshly initialised board.
///
/// The default is the visualizer's 25 × 50 board with the start on the left
/// and the end on the right of the middle row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Coord,
    pub end: Coord,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 25,
            cols: 50,
            start: Coord::new(12, 10),
            end: Coord::new(12, 40),
        }
    }
}

impl BoardConfig {
    /// Build an empty board with the start and end cells tagged.
    ///
    /// Endpoints that fall off the board are left untagged; validating them
    /// is the search request's job.
    pub fn build(&self) -> Result<Grid, GridError> {
        let mut g = Grid::new(self.rows, self.cols)?;
        g.set(self.start, CellKind::Start);
        g.set(self.end, CellKind::End);
        Ok(g)
    }
}
