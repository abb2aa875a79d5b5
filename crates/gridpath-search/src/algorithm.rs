use std::fmt;
use std::str::FromStr;

/// The search strategies the engine can run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Breadth-first search. Shortest path.
    Bfs,
    /// Depth-first search. Finds *a* path, usually a long one.
    Dfs,
    /// Dijkstra's algorithm. Shortest path.
    Dijkstra,
    /// A* with the Manhattan heuristic. Shortest path.
    AStar,
}

impl Algorithm {
    /// All strategies, in menu order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    /// Wire tag: `bfs`, `dfs`, `dijkstra` or `astar`.
    pub const fn tag(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
        }
    }

    /// Whether the strategy always returns a shortest path.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Algorithm::Dfs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
        })
    }
}

/// An algorithm tag that names no known strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm: {}", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Case-insensitive. `a*` and `a-star` are accepted for A*.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Algorithm::AStar),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tags() {
        for a in Algorithm::ALL {
            assert_eq!(a.tag().parse::<Algorithm>(), Ok(a));
        }
        assert_eq!("BFS".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert_eq!(" Dijkstra ".parse::<Algorithm>(), Ok(Algorithm::Dijkstra));
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!("a-star".parse::<Algorithm>(), Ok(Algorithm::AStar));
    }

    #[test]
    fn unknown_tag() {
        let err = "greedy".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, UnknownAlgorithm("greedy".into()));
        assert_eq!(err.to_string(), "unknown algorithm: greedy");
    }

    #[test]
    fn display_names() {
        assert_eq!(Algorithm::AStar.to_string(), "A*");
        assert_eq!(Algorithm::Bfs.to_string(), "BFS");
        assert!(!Algorithm::Dfs.is_optimal());
    }
}
