//! Shared front-end logic for the `gridpath` command.
//!
//! Stands in for the visualizer's presentation layer: it builds a search
//! request from a JSON file, an ASCII board or the default board, hands it to
//! the engine, and renders what comes back. It has no notion of animation;
//! the visited trace and the path are printed as-is.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use gridpath_core::{BoardConfig, CellKind, Coord, Grid, GridError};
use gridpath_search::request::{ErrorResponse, PathfindRequest, PathfindResponse, RequestError};
use gridpath_search::{Algorithm, SearchResult, search};

/// Algorithm used when neither the request nor the command line picks one.
pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::Dijkstra;

const VISITED: char = 'o';
const PATH: char = '*';

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Run BFS, DFS, Dijkstra or A* on a grid and print the visited cells and
/// the path found.
#[derive(Parser, Debug, Default)]
#[command(name = "gridpath", version)]
pub struct Cli {
    /// JSON request file (`-` for stdin).
    #[arg(short, long, conflicts_with = "board")]
    pub request: Option<PathBuf>,

    /// ASCII board file: `.` empty, `#` wall, `S` start, `E` end.
    #[arg(short, long)]
    pub board: Option<PathBuf>,

    /// bfs, dfs, dijkstra or astar. Overrides the request's choice.
    #[arg(short, long)]
    pub algorithm: Option<String>,

    /// Draw the board with visited (`o`) and path (`*`) cells instead of
    /// printing JSON.
    #[arg(long)]
    pub render: bool,

    /// Run every algorithm and print one summary line each.
    #[arg(long, conflicts_with = "render")]
    pub all: bool,
}

// ---------------------------------------------------------------------------
// Building requests
// ---------------------------------------------------------------------------

/// Decode a JSON request. Anything that does not fit the request shape is
/// reported as [`RequestError::Decode`].
pub fn request_from_json(text: &str) -> Result<PathfindRequest, RequestError> {
    serde_json::from_str(text).map_err(|e| RequestError::Decode(e.to_string()))
}

/// Build a request from an ASCII board. Start and end come from the `S` and
/// `E` cells; a missing one is left empty and reported on validation.
pub fn request_from_board(text: &str) -> Result<PathfindRequest, GridError> {
    let grid = Grid::parse(text)?;
    Ok(request_for(&grid, grid.find(CellKind::Start), grid.find(CellKind::End)))
}

/// The visualizer's initial board.
pub fn default_request() -> Result<PathfindRequest, GridError> {
    let cfg = BoardConfig::default();
    let grid = cfg.build()?;
    Ok(request_for(&grid, Some(cfg.start), Some(cfg.end)))
}

fn request_for(grid: &Grid, start: Option<Coord>, end: Option<Coord>) -> PathfindRequest {
    let mut req = PathfindRequest::new(grid, Coord::ZERO, Coord::ZERO, DEFAULT_ALGORITHM);
    req.start = start;
    req.end = end;
    req
}

/// Load the request the command line describes and apply its algorithm
/// override.
///
/// A JSON body that fails to decode comes back as a boxed [`RequestError`],
/// so it can still be answered with [`error_json`].
pub fn load(cli: &Cli) -> Result<PathfindRequest, Box<dyn std::error::Error>> {
    let mut req = if let Some(path) = &cli.request {
        let text = read_source(path)?;
        request_from_json(&text)?
    } else if let Some(path) = &cli.board {
        let text = std::fs::read_to_string(path)?;
        request_from_board(&text)?
    } else {
        log::info!("no input given, using the default board");
        default_request()?
    };
    if let Some(a) = &cli.algorithm {
        req.algorithm = Some(a.clone());
    } else if req.algorithm.is_none() {
        req.algorithm = Some(DEFAULT_ALGORITHM.tag().to_string());
    }
    Ok(req)
}

fn read_source(path: &Path) -> std::io::Result<String> {
    if path.as_os_str() == "-" {
        let mut s = String::new();
        std::io::stdin().read_to_string(&mut s)?;
        Ok(s)
    } else {
        std::fs::read_to_string(path)
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Run the request the way the command line asks and return the text to
/// print.
pub fn run(cli: &Cli, req: &PathfindRequest) -> Result<String, RequestError> {
    if cli.all {
        return summary(req);
    }
    if cli.render {
        let q = req.validate()?;
        let result = search(&q.grid, q.start, q.end, q.algorithm)?;
        let mut out = render(&q.grid, q.start, q.end, &result);
        out.push('\n');
        out.push_str(&describe(q.algorithm, &result));
        return Ok(out);
    }
    let resp = req.execute()?;
    Ok(to_json(&resp))
}

/// JSON body for a rejected request.
pub fn error_json(e: &RequestError) -> String {
    serde_json::to_string(&ErrorResponse::from(e)).unwrap_or_else(|_| e.to_string())
}

fn to_json(resp: &PathfindResponse) -> String {
    serde_json::to_string_pretty(resp).unwrap_or_else(|_| resp.message.clone())
}

/// One line per algorithm: name, visited count, path length, outcome.
pub fn summary(req: &PathfindRequest) -> Result<String, RequestError> {
    let base = req.validate()?;
    let mut out = String::new();
    for algorithm in Algorithm::ALL {
        let result = search(&base.grid, base.start, base.end, algorithm)?;
        out.push_str(&describe(algorithm, &result));
        out.push('\n');
    }
    Ok(out)
}

fn describe(algorithm: Algorithm, result: &SearchResult) -> String {
    match result.steps() {
        Some(steps) => format!(
            "{algorithm:<8} visited {:>5}  path {:>4} steps",
            result.visited.len(),
            steps
        ),
        None => format!(
            "{algorithm:<8} visited {:>5}  no path",
            result.visited.len()
        ),
    }
}

/// Draw the board with the search result laid over it.
///
/// Walls and the two endpoints keep their own characters; path cells are
/// drawn as `*` and other visited cells as `o`.
pub fn render(grid: &Grid, start: Coord, end: Coord, result: &SearchResult) -> String {
    let mut canvas: Vec<char> = grid
        .iter()
        .map(|(_, k)| match k {
            CellKind::Wall => CellKind::Wall.to_char(),
            _ => CellKind::Empty.to_char(),
        })
        .collect();
    let mut paint = |c: Coord, ch: char| {
        if let Some(i) = grid.index(c) {
            canvas[i] = ch;
        }
    };
    for &c in &result.visited {
        paint(c, VISITED);
    }
    for &c in &result.path {
        paint(c, PATH);
    }
    paint(start, CellKind::Start.to_char());
    paint(end, CellKind::End.to_char());

    let mut out = String::with_capacity(grid.len() + grid.height());
    for (i, row) in canvas.chunks(grid.width()).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.extend(row);
    }
    out
}
