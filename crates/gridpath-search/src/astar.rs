use std::collections::BinaryHeap;

use crate::space::{NO_PARENT, NodeRef, SearchSpace};

impl SearchSpace<'_> {
    /// A* with the Manhattan distance to the end as heuristic.
    ///
    /// Entries are keyed by `f = g + h`; among equal `f` the smaller `h`
    /// (closer to the end) wins, then the lower row-major index. A cell may
    /// be in the heap several times with different `g`; only the first pop
    /// settles it.
    pub(crate) fn astar(&mut self) -> bool {
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let h0 = self.estimate(self.start);
        self.open(self.start, 0, NO_PARENT);
        open.push(NodeRef {
            idx: self.start,
            f: h0,
            h: h0,
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

            let tentative_g = self.nodes[ci].g + 1;
            self.neighbors(ci, &mut nbuf);
            for &ni in nbuf.iter() {
                if self.is_closed(ni) || tentative_g >= self.nodes[ni].g {
                    continue;
                }
                let h = self.estimate(ni);
                self.open(ni, tentative_g, ci);
                open.push(NodeRef {
                    idx: ni,
                    f: tentative_g + h,
                    h,
                });
            }
        };

        self.nbuf = nbuf;
        found
    }
}
