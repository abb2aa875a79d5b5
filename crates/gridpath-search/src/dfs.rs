use crate::space::{NO_PARENT, SearchSpace};

impl SearchSpace<'_> {
    /// Depth-first search with lazy visited marking.
    ///
    /// A cell can sit on the stack several times. It settles, and takes the
    /// parent carried by that stack entry, the first time it is popped; later
    /// pops of it are skipped. Neighbours are pushed in reverse order so they
    /// are popped up, down, left, right.
    pub(crate) fn dfs(&mut self) -> bool {
        let mut stack: Vec<(usize, usize)> = vec![(self.start, NO_PARENT)];
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some((ci, parent)) = stack.pop() else {
                break 'search false;
            };
            if self.is_closed(ci) {
                continue;
            }

            let depth = if parent == NO_PARENT {
                0
            } else {
                self.nodes[parent].g + 1
            };
            self.open(ci, depth, parent);
            if self.settle(ci) {
                break 'search true;
            }

            self.neighbors(ci, &mut nbuf);
            for &ni in nbuf.iter().rev() {
                if !self.is_closed(ni) {
                    stack.push((ni, ci));
                }
            }
        };

        self.nbuf = nbuf;
        found
    }
}

#[cfg(test)]
mod tests {
    use gridpath_core::{Coord, Grid};

    use crate::{Algorithm, search};

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn open_3x3_goes_deep_first() {
        let grid = Grid::new(3, 3).unwrap();
        let r = search(&grid, c(0, 0), c(2, 2), Algorithm::Dfs).unwrap();
        let snake = vec![
            c(0, 0),
            c(1, 0),
            c(2, 0),
            c(2, 1),
            c(1, 1),
            c(0, 1),
            c(0, 2),
            c(1, 2),
            c(2, 2),
        ];
        assert!(r.found);
        assert_eq!(r.visited, snake);
        assert_eq!(r.path, snake);
    }

    #[test]
    fn corridor_prefers_up_then_down() {
        let grid = Grid::parse(
            "\
...
.#.
...",
        )
        .unwrap();
        // From (1,0): up (0,0) is explored before down (2,0).
        let r = search(&grid, c(1, 0), c(1, 2), Algorithm::Dfs).unwrap();
        assert_eq!(r.visited, vec![c(1, 0), c(0, 0), c(0, 1), c(0, 2), c(1, 2)]);
        assert_eq!(r.path, r.visited);
    }

    #[test]
    fn parent_comes_from_the_settling_entry() {
        // (0,1) is first pushed by the start, but the deeper entry pushed by
        // (1,1) is popped first and fixes its parent.
        let grid = Grid::new(2, 2).unwrap();
        let r = search(&grid, c(0, 0), c(0, 1), Algorithm::Dfs).unwrap();
        let route = vec![c(0, 0), c(1, 0), c(1, 1), c(0, 1)];
        assert_eq!(r.visited, route);
        assert_eq!(r.path, route);
    }

    #[test]
    fn explores_whole_component_when_unreachable() {
        let grid = Grid::parse(
            "\
....
.#..
#.#.",
        )
        .unwrap();
        let r = search(&grid, c(0, 0), c(2, 1), Algorithm::Dfs).unwrap();
        assert!(!r.found);
        assert!(r.path.is_empty());
        assert_eq!(r.visited.len(), 8);
    }
}
