//! JSON request/response shapes exchanged with the visualizer front end.
//!
//! ```json
//! { "grid": [["start","empty"],["wall","end"]],
//!   "start": {"row":0,"col":0}, "end": {"row":1,"col":1},
//!   "algorithm": "bfs" }
//! ```
//!
//! Every field is optional on the wire so that a missing one is reported
//! by name instead of as a generic decode failure.

use std::fmt;

use gridpath_core::{CellKind, Coord, Grid, GridError};
use serde::{Deserialize, Serialize};

use crate::algorithm::{Algorithm, UnknownAlgorithm};
use crate::engine::search;
use crate::error::SearchError;
use crate::result::SearchResult;

/// A search request as sent by the front end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathfindRequest {
    pub grid: Option<Vec<Vec<CellKind>>>,
    pub start: Option<Coord>,
    pub end: Option<Coord>,
    pub algorithm: Option<String>,
}

/// A request whose fields have all been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub grid: Grid,
    pub start: Coord,
    pub end: Coord,
    pub algorithm: Algorithm,
}

impl PathfindRequest {
    /// Build a request for an already-constructed grid.
    pub fn new(grid: &Grid, start: Coord, end: Coord, algorithm: Algorithm) -> Self {
        let rows = (0..grid.height())
            .filter_map(|r| grid.row(r).map(<[CellKind]>::to_vec))
            .collect();
        Self {
            grid: Some(rows),
            start: Some(start),
            end: Some(end),
            algorithm: Some(algorithm.tag().to_string()),
        }
    }

    /// Check presence and shape of every field.
    ///
    /// Endpoint placement (bounds, walls) is checked by the search itself.
    pub fn validate(&self) -> Result<Query, RequestError> {
        let rows = self.grid.as_ref().ok_or(RequestError::Missing("grid"))?;
        let start = self.start.ok_or(RequestError::Missing("start"))?;
        let end = self.end.ok_or(RequestError::Missing("end"))?;
        let algorithm = self
            .algorithm
            .as_deref()
            .ok_or(RequestError::Missing("algorithm"))?
            .parse::<Algorithm>()?;
        let grid = Grid::from_rows(rows)?;
        Ok(Query {
            grid,
            start,
            end,
            algorithm,
        })
    }

    /// Validate and run the request.
    pub fn execute(&self) -> Result<PathfindResponse, RequestError> {
        let q = self.validate()?;
        let result = search(&q.grid, q.start, q.end, q.algorithm)?;
        Ok(PathfindResponse::new(q.algorithm, result))
    }
}

/// The outcome sent back to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathfindResponse {
    pub visited_nodes: Vec<Coord>,
    pub path: Vec<Coord>,
    pub success: bool,
    pub message: String,
}

impl PathfindResponse {
    pub fn new(algorithm: Algorithm, result: SearchResult) -> Self {
        let message = if result.found {
            format!("Path found using {algorithm}")
        } else {
            format!("No path found using {algorithm}")
        };
        Self {
            visited_nodes: result.visited,
            path: result.path,
            success: result.found,
            message,
        }
    }
}

/// Body returned instead of a [`PathfindResponse`] when a request is
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&RequestError> for ErrorResponse {
    fn from(e: &RequestError) -> Self {
        Self {
            error: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// RequestError
// ---------------------------------------------------------------------------

/// Why a request was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The body was not a well-formed request: bad JSON, a field of the
    /// wrong type or an unknown cell tag.
    Decode(String),
    /// A required field was absent.
    Missing(&'static str),
    /// The grid was empty or not rectangular.
    Grid(GridError),
    /// The algorithm tag named no known strategy.
    Algorithm(UnknownAlgorithm),
    /// The endpoints were unusable, or the engine failed internally.
    Search(SearchError),
}

impl RequestError {
    /// Whether the caller is at fault, as opposed to the engine.
    pub fn is_invalid_request(&self) -> bool {
        !matches!(
            self,
            RequestError::Search(SearchError::BrokenParentChain { .. })
        )
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(msg) => write!(f, "malformed request: {msg}"),
            Self::Missing(field) => write!(f, "missing required field: {field}"),
            Self::Grid(e) => write!(f, "{e}"),
            Self::Algorithm(e) => write!(f, "{e}"),
            Self::Search(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(_) | Self::Missing(_) => None,
            Self::Grid(e) => Some(e),
            Self::Algorithm(e) => Some(e),
            Self::Search(e) => Some(e),
        }
    }
}

impl From<GridError> for RequestError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<UnknownAlgorithm> for RequestError {
    fn from(e: UnknownAlgorithm) -> Self {
        Self::Algorithm(e)
    }
}

impl From<SearchError> for RequestError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUEST: &str = r#"{
        "grid": [
            ["start", "empty", "empty"],
            ["wall",  "wall",  "empty"],
            ["end",   "empty", "empty"]
        ],
        "start": {"row": 0, "col": 0},
        "end": {"row": 2, "col": 0},
        "algorithm": "BFS"
    }"#;

    #[test]
    fn executes_a_front_end_request() {
        let req: PathfindRequest = serde_json::from_str(REQUEST).unwrap();
        let resp = req.execute().unwrap();
        assert!(resp.success);
        assert_eq!(resp.message, "Path found using BFS");
        assert_eq!(resp.path.len(), 7);
        assert_eq!(resp.visited_nodes.len(), 7);

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["path"][0], serde_json::json!({"row": 0, "col": 0}));
        assert!(json.get("visitedNodes").is_some());
    }

    #[test]
    fn no_path_is_a_response_not_an_error() {
        let grid = Grid::parse("S#E").unwrap();
        let req = PathfindRequest::new(&grid, Coord::new(0, 0), Coord::new(0, 2), Algorithm::AStar);
        let resp = req.execute().unwrap();
        assert!(!resp.success);
        assert!(resp.path.is_empty());
        assert_eq!(resp.visited_nodes, vec![Coord::new(0, 0)]);
        assert_eq!(resp.message, "No path found using A*");
    }

    #[test]
    fn missing_fields_are_named() {
        let req: PathfindRequest =
            serde_json::from_str(r#"{"grid": [["empty"]], "start": {"row":0,"col":0}}"#).unwrap();
        assert_eq!(req.validate().unwrap_err(), RequestError::Missing("end"));

        let req: PathfindRequest = serde_json::from_str("{}").unwrap();
        let err = req.validate().unwrap_err();
        assert_eq!(err, RequestError::Missing("grid"));
        assert_eq!(ErrorResponse::from(&err).error, "missing required field: grid");
    }

    #[test]
    fn malformed_fields_are_rejected() {
        let mut req: PathfindRequest = serde_json::from_str(REQUEST).unwrap();
        req.algorithm = Some("greedy".into());
        assert!(matches!(req.validate(), Err(RequestError::Algorithm(_))));

        let mut req: PathfindRequest = serde_json::from_str(REQUEST).unwrap();
        req.grid = Some(vec![vec![CellKind::Empty; 3], vec![CellKind::Empty; 2]]);
        assert!(matches!(
            req.validate(),
            Err(RequestError::Grid(GridError::Ragged { .. }))
        ));

        let mut req: PathfindRequest = serde_json::from_str(REQUEST).unwrap();
        req.end = Some(Coord::new(1, 0));
        let err = req.execute().unwrap_err();
        assert!(matches!(err, RequestError::Search(SearchError::Blocked { .. })));
        assert!(err.is_invalid_request());
        assert_eq!(err.to_string(), "end (1, 0) is a wall");
    }

    #[test]
    fn unknown_cell_tag_fails_to_decode() {
        let err = serde_json::from_str::<PathfindRequest>(r#"{"grid": [["lava"]], "algorithm": "bfs"}"#)
            .map_err(|e| RequestError::Decode(e.to_string()))
            .unwrap_err();
        assert!(err.is_invalid_request());
        let body = ErrorResponse::from(&err).error;
        assert!(body.starts_with("malformed request: unknown variant `lava`"), "{body}");
    }

    #[test]
    fn new_round_trips_through_json() {
        let grid = Grid::parse("S.\n.E").unwrap();
        let req = PathfindRequest::new(&grid, Coord::new(0, 0), Coord::new(1, 1), Algorithm::Dfs);
        let json = serde_json::to_string(&req).unwrap();
        let back: PathfindRequest = serde_json::from_str(&json).unwrap();
        let q = back.validate().unwrap();
        assert_eq!(q.grid, grid);
        assert_eq!(q.algorithm, Algorithm::Dfs);
    }
}
