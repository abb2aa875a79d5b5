use std::collections::BinaryHeap;

use crate::space::{NO_PARENT, NodeRef, SearchSpace};

impl SearchSpace<'_> {
    /// Dijkstra's algorithm over unit-cost steps.
    ///
    /// The frontier is a binary heap with lazy deletion: improving a cell
    /// pushes a new entry and leaves the old one behind, to be skipped once
    /// the cell is closed. Among cells at equal distance the lowest row-major
    /// index settles first.
    pub(crate) fn dijkstra(&mut self) -> bool {
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        self.open(self.start, 0, NO_PARENT);
        open.push(NodeRef {
            idx: self.start,
            f: 0,
            h: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let ci = current.idx;

            // Skip stale entries.
            if self.is_closed(ci) {
                continue;
            }
            if self.settle(ci) {
                break 'search true;
            }

            let tentative = self.nodes[ci].g + 1;
            self.neighbors(ci, &mut nbuf);
            for &ni in nbuf.iter() {
                if tentative >= self.nodes[ni].g {
                    continue;
                }
                self.open(ni, tentative, ci);
                open.push(NodeRef {
                    idx: ni,
                    f: tentative,
                    h: 0,
                });
            }
        };

        self.nbuf = nbuf;
        found
    }
}
