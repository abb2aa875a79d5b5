//! Path reconstruction from parent links.

use gridpath_core::Coord;

use crate::error::SearchError;

/// Walk parent links from `end` back to `start` and return the path in
/// start → end order, both endpoints included.
///
/// `parent` maps a coordinate to the cell it was reached from. At most
/// `max_len` cells are walked; a longer chain can only be a cycle. Running
/// out of parents before reaching `start`, or exceeding `max_len`, is
/// reported as [`SearchError::BrokenParentChain`].
pub fn reconstruct_path(
    start: Coord,
    end: Coord,
    max_len: usize,
    parent: impl Fn(Coord) -> Option<Coord>,
) -> Result<Vec<Coord>, SearchError> {
    if start == end {
        return Ok(vec![start]);
    }
    let mut path = vec![end];
    let mut cur = end;
    while cur != start {
        if path.len() >= max_len {
            return Err(SearchError::BrokenParentChain { at: cur });
        }
        cur = parent(cur).ok_or(SearchError::BrokenParentChain { at: cur })?;
        path.push(cur);
    }
    path.reverse();
    Ok(path)
}
