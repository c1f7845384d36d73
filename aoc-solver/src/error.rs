//! Error types shared by solvers and the registry

use thiserror::Error;

/// Failure to turn raw puzzle input into a solver's shared data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input does not have the expected shape
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A required section or value is absent
    #[error("Missing data: {0}")]
    MissingData(String),
    #[error("Parse error: {0}")]
    Other(String),
}

/// Failure while answering one part of a puzzle
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver declares the part but has no `PartSolver` for it
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part is 0 or above the solver's `PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Failure looking up or instantiating a solver through the registry
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Year or day outside the storage the registry can index
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Failure adding a solver to a [`RegistryBuilder`](crate::RegistryBuilder)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    #[error("Cannot register year {0} day {1}: outside the supported range")]
    InvalidYearDay(u16, u8),
}
