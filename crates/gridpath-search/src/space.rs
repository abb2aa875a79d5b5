use gridpath_core::{Coord, Grid};

use crate::error::SearchError;
use crate::reconstruct::reconstruct_path;
use crate::result::SearchResult;

/// Sentinel cost meaning "not reached yet".
pub(crate) const UNREACHABLE: i32 = i32::MAX;

/// Sentinel parent index meaning "no parent" (the start cell).
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-cell search node
// ---------------------------------------------------------------------------

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum NodeState {
    /// Never discovered.
    Unseen,
    /// Discovered, sitting in the frontier.
    Open,
    /// Settled; never reconsidered.
    Closed,
}

/// Transient record for one cell, indexed by the cell's row-major index.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) parent: usize,
    pub(crate) state: NodeState,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: NO_PARENT,
            state: NodeState::Unseen,
        }
    }
}

/// Frontier entry for the priority-queue searches, ordered by `f`, then `h`,
/// then row-major index.
///
/// Entries are never removed when a better one is pushed for the same cell;
/// the stale one is skipped when it is popped after the cell is closed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) h: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other
            .f
            .cmp(&self.f)
            .then(other.h.cmp(&self.h))
            .then(other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchSpace
// ---------------------------------------------------------------------------

/// State of a single search call.
///
/// Built fresh for every call and dropped when it returns: the node arena,
/// the visited trace and the neighbour scratch buffer all live here, and the
/// grid is only borrowed. Parent links are indices into `nodes`, not
/// references between nodes.
pub(crate) struct SearchSpace<'g> {
    pub(crate) grid: &'g Grid,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) end_coord: Coord,
    pub(crate) nodes: Vec<Node>,
    pub(crate) visited: Vec<Coord>,
    pub(crate) nbuf: Vec<usize>,
}

impl<'g> SearchSpace<'g> {
    /// Set up a search from `start` to `end`. Both must already be known to
    /// be traversable cells of `grid`.
    pub(crate) fn new(grid: &'g Grid, start: usize, end: usize) -> Self {
        Self {
            grid,
            start,
            end,
            end_coord: grid.coord(end),
            nodes: vec![Node::default(); grid.len()],
            visited: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Mark `idx` as discovered with cost `g` via `parent`.
    #[inline]
    pub(crate) fn open(&mut self, idx: usize, g: i32, parent: usize) {
        let n = &mut self.nodes[idx];
        n.g = g;
        n.parent = parent;
        n.state = NodeState::Open;
    }

    /// Settle `idx`: close it and append it to the visited trace. Returns
    /// whether it is the target.
    #[inline]
    pub(crate) fn settle(&mut self, idx: usize) -> bool {
        debug_assert_ne!(self.nodes[idx].state, NodeState::Closed);
        self.nodes[idx].state = NodeState::Closed;
        self.visited.push(self.grid.coord(idx));
        idx == self.end
    }

    #[inline]
    pub(crate) fn is_closed(&self, idx: usize) -> bool {
        self.nodes[idx].state == NodeState::Closed
    }

    /// Fill `buf` with the flat indices of the traversable neighbours of
    /// `idx`, in up, down, left, right order.
    pub(crate) fn neighbors(&self, idx: usize, buf: &mut Vec<usize>) {
        buf.clear();
        let grid = self.grid;
        buf.extend(
            grid.neighbors(grid.coord(idx))
                .filter_map(|n| grid.index(n)),
        );
    }

    /// Manhattan distance from `idx` to the target.
    #[inline]
    pub(crate) fn estimate(&self, idx: usize) -> i32 {
        self.grid.coord(idx).manhattan(self.end_coord)
    }

    /// Consume the space and build the caller-facing result.
    pub(crate) fn finish(self, found: bool) -> Result<SearchResult, SearchError> {
        if !found {
            return Ok(SearchResult {
                visited: self.visited,
                path: Vec::new(),
                found: false,
            });
        }
        let grid = self.grid;
        let nodes = &self.nodes;
        let path = reconstruct_path(
            grid.coord(self.start),
            grid.coord(self.end),
            grid.len(),
            |c| {
                let p = nodes[grid.index(c)?].parent;
                (p != NO_PARENT).then(|| grid.coord(p))
            },
        )?;
        Ok(SearchResult {
            visited: self.visited,
            path,
            found: true,
        })
    }
}
