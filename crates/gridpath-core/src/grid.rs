//! The [`Grid`] board: a rectangular array of [`CellKind`]s.
//!
//! A grid is plain owned data (a flat row-major buffer). Searches borrow it
//! immutably; editing happens between searches through [`Grid::set`].
//!
//! Boards can also be written as text, one character per cell:
//!
//! ```text
//! S..#
//! .#..
//! ...E
//! ```
//!
//! `.` is empty, `#` a wall, `S` the start and `E` the end.

use std::fmt;

use crate::geom::Coord;

// ---------------------------------------------------------------------------
// CellKind
// ---------------------------------------------------------------------------

/// State of a single board cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellKind {
    /// Free cell. The visualizer's overlay tags read back as free cells.
    #[default]
    #[cfg_attr(
        feature = "serde",
        serde(alias = "visited", alias = "path", alias = "current")
    )]
    Empty,
    Wall,
    Start,
    End,
}

impl CellKind {
    /// Whether a search may step onto this cell.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        !matches!(self, CellKind::Wall)
    }

    /// Board text character for this cell.
    pub const fn to_char(self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::Wall => '#',
            CellKind::Start => 'S',
            CellKind::End => 'E',
        }
    }

    /// Parse a board text character.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(CellKind::Empty),
            '#' => Some(CellKind::Wall),
            'S' => Some(CellKind::Start),
            'E' => Some(CellKind::End),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// An H × W board. Always at least 1 × 1 and always rectangular.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellKind>,
    height: usize,
    width: usize,
}

impl Grid {
    /// Create a board of the given size filled with empty cells.
    pub fn new(height: usize, width: usize) -> Result<Self, GridError> {
        let len = checked_len(height, width)?;
        Ok(Self {
            cells: vec![CellKind::Empty; len],
            height,
            width,
        })
    }

    /// Build a board from nested rows, rejecting empty or ragged input.
    pub fn from_rows<R: AsRef<[CellKind]>>(rows: &[R]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(checked_len(height, width)?);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }
        Ok(Self {
            cells,
            height,
            width,
        })
    }

    /// Parse a board from text.
    ///
    /// Leading and trailing whitespace of the whole string is trimmed, but
    /// not of individual lines. Every line must have the same width.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        let mut rows: Vec<Vec<CellKind>> = Vec::new();
        for (row, line) in s.lines().enumerate() {
            let mut r = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                let kind = CellKind::from_char(ch).ok_or(GridError::InvalidChar {
                    ch,
                    at: Coord::new(row as i32, col as i32),
                })?;
                r.push(kind);
            }
            rows.push(r);
        }
        Self::from_rows(&rows)
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `(row, col)` lies on the board.
    #[inline]
    pub fn is_in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Whether `(row, col)` is on the board and not a wall.
    #[inline]
    pub fn is_traversable(&self, row: i32, col: i32) -> bool {
        self.kind(row, col).is_some_and(CellKind::is_traversable)
    }

    /// Whether `c` lies on the board.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.is_in_bounds(c.row, c.col)
    }

    /// Whether `c` is on the board and not a wall.
    #[inline]
    pub fn passable(&self, c: Coord) -> bool {
        self.is_traversable(c.row, c.col)
    }

    /// Cell state at `(row, col)`, or `None` if off the board.
    #[inline]
    pub fn kind(&self, row: i32, col: i32) -> Option<CellKind> {
        self.index(Coord::new(row, col)).map(|i| self.cells[i])
    }

    /// Cell state at `c`, or `None` if off the board.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<CellKind> {
        self.kind(c.row, c.col)
    }

    /// Set the cell at `c`. Does nothing if `c` is off the board.
    pub fn set(&mut self, c: Coord, kind: CellKind) {
        if let Some(i) = self.index(c) {
            self.cells[i] = kind;
        }
    }

    /// Traversable cardinal neighbours of `c`, in up, down, left, right order.
    pub fn neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        c.neighbors_4().into_iter().filter(|&n| self.passable(n))
    }

    /// First cell of the given kind in row-major order.
    pub fn find(&self, kind: CellKind) -> Option<Coord> {
        self.cells
            .iter()
            .position(|&k| k == kind)
            .map(|i| self.coord(i))
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &k)| (self.coord(i), k))
    }

    /// Borrow one row of the board.
    pub fn row(&self, row: usize) -> Option<&[CellKind]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    // -----------------------------------------------------------------------
    // Flat index helpers
    // -----------------------------------------------------------------------

    /// Row-major flat index of `c`, or `None` if off the board.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.width + c.col as usize)
    }

    /// Coordinate of a row-major flat index. `idx` must be `< len()`.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        Coord::new((idx / self.width) as i32, (idx % self.width) as i32)
    }
}

/// Cell count of a `height` × `width` board. Both sides must be non-zero
/// and fit the `i32` components of a [`Coord`].
fn checked_len(height: usize, width: usize) -> Result<usize, GridError> {
    if height == 0 || width == 0 {
        return Err(GridError::Empty);
    }
    let too_large = GridError::TooLarge { height, width };
    if i32::try_from(height).is_err() || i32::try_from(width).is_err() {
        return Err(too_large);
    }
    height.checked_mul(width).ok_or(too_large)
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chunk) in self.cells.chunks(self.width).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for k in chunk {
                write!(f, "{}", k.to_char())?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors that can occur when building a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Zero rows or zero columns.
    Empty,
    /// A row's width differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A board text character with no cell meaning.
    InvalidChar { ch: char, at: Coord },
    /// A side does not fit a coordinate, or the cell count overflows.
    TooLarge { height: usize, width: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: must have at least one row and one column"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} columns, expected {expected}"
            ),
            Self::InvalidChar { ch, at } => {
                write!(f, "grid: invalid character \u{201c}{ch}\u{201d} at {at}")
            }
            Self::TooLarge { height, width } => {
                write!(f, "grid: {height} x {width} is too large")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: &str = "\
S..#
.#..
...E";

    #[test]
    fn parse_and_size() {
        let g = Grid::parse(BOARD).unwrap();
        assert_eq!(g.height(), 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.len(), 12);
        assert_eq!(g.at(Coord::new(0, 0)), Some(CellKind::Start));
        assert_eq!(g.at(Coord::new(0, 3)), Some(CellKind::Wall));
        assert_eq!(g.at(Coord::new(2, 3)), Some(CellKind::End));
        assert_eq!(g.at(Coord::new(3, 0)), None);
    }

    #[test]
    fn display_round_trips_text() {
        let g = Grid::parse(BOARD).unwrap();
        assert_eq!(g.to_string(), BOARD);
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let g = Grid::parse("\n\n.S\nE.\n\n").unwrap();
        assert_eq!(g.height(), 2);
        assert_eq!(g.find(CellKind::Start), Some(Coord::new(0, 1)));
    }

    #[test]
    fn ragged_rows_rejected() {
        assert_eq!(
            Grid::parse("...\n..").unwrap_err(),
            GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        let rows = vec![vec![CellKind::Empty; 2], vec![CellKind::Empty; 3]];
        assert!(matches!(
            Grid::from_rows(&rows),
            Err(GridError::Ragged { row: 1, .. })
        ));
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(Grid::parse("  \n ").unwrap_err(), GridError::Empty);
        assert_eq!(Grid::new(0, 4).unwrap_err(), GridError::Empty);
        let rows: Vec<Vec<CellKind>> = vec![vec![]];
        assert_eq!(Grid::from_rows(&rows).unwrap_err(), GridError::Empty);
    }

    #[test]
    fn oversized_rejected_without_overflow() {
        assert_eq!(
            Grid::new(usize::MAX, 2).unwrap_err(),
            GridError::TooLarge {
                height: usize::MAX,
                width: 2
            }
        );
        assert!(matches!(
            Grid::new(i32::MAX as usize + 1, 1),
            Err(GridError::TooLarge { .. })
        ));
    }

    #[test]
    fn invalid_char_rejected() {
        let err = Grid::parse("..\n.x").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidChar {
                ch: 'x',
                at: Coord::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
    }

    #[test]
    fn bounds_and_traversability() {
        let g = Grid::parse(BOARD).unwrap();
        assert!(g.is_in_bounds(0, 0));
        assert!(g.is_in_bounds(2, 3));
        assert!(!g.is_in_bounds(-1, 0));
        assert!(!g.is_in_bounds(0, 4));
        assert!(!g.is_in_bounds(3, 0));
        assert!(g.is_traversable(0, 0));
        assert!(g.is_traversable(2, 3));
        assert!(!g.is_traversable(1, 1));
        assert!(!g.is_traversable(-1, 2));
    }

    #[test]
    fn neighbors_filtered_and_ordered() {
        let g = Grid::parse(BOARD).unwrap();
        // (1,2): up (0,2), down (2,2), left (1,1) wall, right (1,3).
        let n: Vec<_> = g.neighbors(Coord::new(1, 2)).collect();
        assert_eq!(n, vec![Coord::new(0, 2), Coord::new(2, 2), Coord::new(1, 3)]);
        // Corner: only down and right exist.
        let n: Vec<_> = g.neighbors(Coord::new(0, 0)).collect();
        assert_eq!(n, vec![Coord::new(1, 0), Coord::new(0, 1)]);
    }

    #[test]
    fn set_ignores_out_of_bounds() {
        let mut g = Grid::new(2, 2).unwrap();
        g.set(Coord::new(1, 1), CellKind::Wall);
        g.set(Coord::new(5, 5), CellKind::Wall);
        assert_eq!(g.to_string(), "..\n.#");
    }

    #[test]
    fn index_coord_inverse() {
        let g = Grid::new(3, 5).unwrap();
        for i in 0..g.len() {
            assert_eq!(g.index(g.coord(i)), Some(i));
        }
        assert_eq!(g.index(Coord::new(1, 2)), Some(7));
        assert_eq!(g.index(Coord::new(1, 5)), None);
    }

    #[test]
    fn rows_and_iter() {
        let g = Grid::parse(BOARD).unwrap();
        assert_eq!(g.row(1).unwrap()[1], CellKind::Wall);
        assert!(g.row(3).is_none());
        let walls: Vec<_> = g
            .iter()
            .filter(|&(_, k)| k == CellKind::Wall)
            .map(|(c, _)| c)
            .collect();
        assert_eq!(walls, vec![Coord::new(0, 3), Coord::new(1, 1)]);
    }
}
