use std::collections::VecDeque;

use crate::space::{NO_PARENT, NodeState, SearchSpace};

impl SearchSpace<'_> {
    /// Breadth-first search.
    ///
    /// A cell is marked open when it is enqueued, so it enters the queue at
    /// most once, at its smallest depth. Cells settle in non-decreasing depth
    /// order; within a depth, in enqueue order.
    pub(crate) fn bfs(&mut self) -> bool {
        let mut queue: VecDeque<usize> = VecDeque::new();
        self.open(self.start, 0, NO_PARENT);
        queue.push_back(self.start);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(ci) = queue.pop_front() else {
                break 'search false;
            };
            if self.settle(ci) {
                break 'search true;
            }

            let nd = self.nodes[ci].g + 1;
            self.neighbors(ci, &mut nbuf);
            for &ni in nbuf.iter() {
                if self.nodes[ni].state != NodeState::Unseen {
                    continue;
                }
                self.open(ni, nd, ci);
                queue.push_back(ni);
            }
        };

        self.nbuf = nbuf;
        found
    }
}
