//! `gridpath` — run a grid search from the command line.
//!
//! ```text
//! gridpath                              # default board, Dijkstra, JSON out
//! gridpath --board maze.txt --render    # draw the explored board
//! gridpath --request req.json           # front-end JSON request
//! gridpath --board maze.txt --all       # compare all four algorithms
//! ```

use std::process::ExitCode;

use clap::Parser;
use flexi_logger::Logger;
use gridpath_demos::{Cli, error_json, load, run};
use gridpath_search::request::RequestError;

fn main() -> ExitCode {
    let _logger = match Logger::try_with_env_or_str("warn").and_then(|l| l.start()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("gridpath: logging disabled: {e}");
            None
        }
    };

    let cli = Cli::parse();
    let req = match load(&cli) {
        Ok(req) => req,
        Err(e) => match e.downcast::<RequestError>() {
            Ok(e) => {
                log::warn!("rejected request: {e}");
                println!("{}", error_json(&e));
                return ExitCode::FAILURE;
            }
            Err(e) => {
                log::error!("could not load input: {e}");
                eprintln!("gridpath: {e}");
                return ExitCode::from(2);
            }
        },
    };

    match run(&cli, &req) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if e.is_invalid_request() {
                log::warn!("rejected request: {e}");
            } else {
                log::error!("engine failure: {e}");
            }
            println!("{}", error_json(&e));
            ExitCode::FAILURE
        }
    }
}
