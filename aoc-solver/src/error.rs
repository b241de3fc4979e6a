//! Error types for the solver library

use thiserror::Error;

/// Error type for parsing input data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A specific input line was rejected (1-based line number)
    #[error("line {line}: {message}")]
    AtLine { line: usize, message: String },
}

impl ParseError {
    /// Line number carried by the error, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::AtLine { line, .. } => Some(*line),
            ParseError::InvalidFormat(_) => None,
        }
    }
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds PARTS)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the given day
    #[error("Solver not found for day {0}")]
    NotFound(u8),
    /// Day outside of 1..=25
    #[error("Invalid day {0}")]
    InvalidDay(u8),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Attempted to register a second solver for the same day
    #[error("Duplicate solver registration for day {0}")]
    DuplicateSolver(u8),
    /// Day outside of 1..=25
    #[error("Invalid day {0}, expected 1..=25")]
    InvalidDay(u8),
}
