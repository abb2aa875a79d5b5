use std::fmt;

use gridpath_core::Coord;

/// Which endpoint of a search an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Errors returned by [`search`](crate::search).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// An endpoint lies outside the grid.
    OutOfBounds { endpoint: Endpoint, at: Coord },
    /// An endpoint is a wall.
    Blocked { endpoint: Endpoint, at: Coord },
    /// Parent links did not lead from the end back to the start. This is a
    /// bug in the engine, never a "no path" outcome.
    BrokenParentChain { at: Coord },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { endpoint, at } => {
                write!(f, "{endpoint} {at} is outside the grid")
            }
            Self::Blocked { endpoint, at } => write!(f, "{endpoint} {at} is a wall"),
            Self::BrokenParentChain { at } => {
                write!(f, "internal error: parent chain broken at {at}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
