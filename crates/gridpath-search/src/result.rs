use gridpath_core::Coord;

/// Outcome of one search call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResult {
    /// Cells in the order they were settled. No duplicates, no walls.
    pub visited: Vec<Coord>,
    /// Start → end inclusive, or empty if the end was not reached.
    pub path: Vec<Coord>,
    /// Whether the end was reached. Same as `!path.is_empty()`.
    pub found: bool,
}

impl SearchResult {
    /// Number of steps along the path, or `None` if no path was found.
    pub fn steps(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_counts_edges() {
        let r = SearchResult {
            visited: vec![Coord::new(0, 0), Coord::new(0, 1)],
            path: vec![Coord::new(0, 0), Coord::new(0, 1)],
            found: true,
        };
        assert_eq!(r.steps(), Some(1));
        assert_eq!(SearchResult::default().steps(), None);
    }
}
