//! Error types for the CLI

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Some parts produced no answer
    #[error("{failed} of {total} part(s) failed")]
    PartsFailed { failed: usize, total: usize },
}

/// Why a single part has no answer
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Input file missing or unreadable
    #[error(transparent)]
    Input(#[from] InputError),

    /// Lookup or parse failure, shared by every part of the day
    #[error("{0}")]
    Setup(Arc<aoc_solver::SolverError>),

    /// The part itself failed
    #[error("Solve error: {0}")]
    Solve(#[from] aoc_solver::SolveError),
}

/// Input loading errors
#[derive(Error, Debug, Clone)]
pub enum InputError {
    #[error("Input for {year}/{day:02} not found at {}", .path.display())]
    Missing { year: u16, day: u8, path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },
}
