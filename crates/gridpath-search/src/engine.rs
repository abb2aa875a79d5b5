use gridpath_core::{Coord, Grid};

use crate::algorithm::Algorithm;
use crate::error::{Endpoint, SearchError};
use crate::result::SearchResult;
use crate::space::SearchSpace;

/// Run `algorithm` on `grid` from `start` to `end`.
///
/// Both endpoints must be traversable cells of the grid; their cell kind
/// does not need to be `Start`/`End`. `start == end` is allowed and yields
/// the one-cell path `[start]`.
///
/// Not reaching the end is a normal outcome (`found == false`), not an
/// error. The grid is only read; every call builds and drops its own
/// working state, so concurrent calls need no coordination.
pub fn search(
    grid: &Grid,
    start: Coord,
    end: Coord,
    algorithm: Algorithm,
) -> Result<SearchResult, SearchError> {
    let start_idx = endpoint_index(grid, Endpoint::Start, start)?;
    let end_idx = endpoint_index(grid, Endpoint::End, end)?;

    log::debug!(
        "{algorithm} search on {}x{} grid from {start} to {end}",
        grid.height(),
        grid.width()
    );

    let mut space = SearchSpace::new(grid, start_idx, end_idx);
    let found = match algorithm {
        Algorithm::Bfs => space.bfs(),
        Algorithm::Dfs => space.dfs(),
        Algorithm::Dijkstra => space.dijkstra(),
        Algorithm::AStar => space.astar(),
    };
    let result = space.finish(found)?;

    log::debug!(
        "{algorithm} {}: {} cells visited, path of {} cells",
        if result.found { "found" } else { "exhausted" },
        result.visited.len(),
        result.path.len()
    );
    Ok(result)
}

fn endpoint_index(grid: &Grid, endpoint: Endpoint, at: Coord) -> Result<usize, SearchError> {
    let Some(idx) = grid.index(at) else {
        log::trace!("rejecting {endpoint} {at}: out of bounds");
        return Err(SearchError::OutOfBounds { endpoint, at });
    };
    if !grid.passable(at) {
        log::trace!("rejecting {endpoint} {at}: wall");
        return Err(SearchError::Blocked { endpoint, at });
    }
    Ok(idx)
}
