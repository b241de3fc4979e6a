//! Error types for the CLI

use itertools::Itertools;
use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Fatal errors: the runner logs them and exits with status 1
#[derive(Error, Debug)]
pub enum CliError {
    /// None of the candidate inputs directories exist
    #[error("Inputs directory not found. Tried: {}", display_paths(.tried))]
    InputsDirNotFound { tried: Vec<PathBuf> },

    /// The day/part/tag filters matched no registered solver
    #[error("No solutions found for day {day} part {part}")]
    NoMatchingSolvers { day: u8, part: u8 },

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display()).join(", ")
}

/// Per-solver errors, reported inline without stopping the other solvers
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// No input file for the day
    #[error("Input file not found at {}", .0.display())]
    MissingInput(PathBuf),

    /// The input file exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parsing or solving failed
    #[error("{0}")]
    Solver(#[from] aoc_solver::SolverError),
}
