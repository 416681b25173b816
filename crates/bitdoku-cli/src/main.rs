//! Command-line Sudoku solver.
//!
//! Puzzles come from a literal 81-character string, a file, or a remote
//! board service; solutions are rendered as text with 3×3 block separators.

use std::{path::PathBuf, process::ExitCode};

use bitdoku_core::{DigitGrid, ParseGridError};
use bitdoku_solver::{Solver, SolverError};
use clap::{Parser, Subcommand};
use derive_more::{Display, Error, From};

use crate::fetch::{Difficulty, FetchError};

mod fetch;
mod render;

#[derive(Debug, Parser)]
#[command(name = "bitdoku", version, about = "Bitmask-based Sudoku solver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve a puzzle given as 81 cell characters (`0` or `.` marks an
    /// empty cell).
    Solve {
        /// Puzzle literal; omit when using `--file`.
        puzzle: Option<String>,

        /// Read the puzzle from a file instead.
        #[arg(long, conflicts_with = "puzzle")]
        file: Option<PathBuf>,
    },
    /// Fetch a puzzle from a remote board service, print it, and solve it.
    Fetch {
        /// Difficulty requested from the service.
        #[arg(long, value_enum, default_value_t = Difficulty::Easy)]
        difficulty: Difficulty,

        /// Board endpoint returning `{ "board": [[int]] }` with 0 for
        /// unknown cells.
        #[arg(long, default_value = fetch::DEFAULT_URL)]
        url: String,

        /// Print the fetched puzzle without solving it.
        #[arg(long)]
        no_solve: bool,
    },
}

#[derive(Debug, Display, Error, From)]
enum CliError {
    #[display("no puzzle given; pass a literal or --file")]
    MissingPuzzle,
    #[display("could not read puzzle file: {_0}")]
    Io(std::io::Error),
    #[display("invalid puzzle: {_0}")]
    Parse(ParseGridError),
    #[display("fetch failed: {_0}")]
    Fetch(FetchError),
    #[display("{_0}")]
    Solver(SolverError),
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Solve { puzzle, file } => {
            let text = match (puzzle, file) {
                (Some(literal), None) => literal,
                (None, Some(path)) => std::fs::read_to_string(path)?,
                _ => return Err(CliError::MissingPuzzle),
            };
            let grid: DigitGrid = text.parse()?;
            solve_and_print(&grid)
        }
        Command::Fetch {
            difficulty,
            url,
            no_solve,
        } => {
            let grid = fetch::fetch_board(&url, difficulty)?;
            log::info!("fetched a {difficulty} puzzle with {} givens", grid.given_count());
            println!("{}", render::digit_grid(&grid));
            if no_solve {
                return Ok(());
            }
            solve_and_print(&grid)
        }
    }
}

fn solve_and_print(grid: &DigitGrid) -> Result<(), CliError> {
    let solved = Solver::new().solve(grid)?;
    println!("Solved:");
    println!("{}", render::solved_grid(&solved));
    Ok(())
}
