//! Framework for writing Advent of Code solvers once and running them
//! uniformly.
//!
//! A solver is split into two concerns:
//!
//! - [`AocParser`] turns the raw input into `SharedData`, once.
//! - [`PartSolver<N>`](PartSolver) answers part `N` from that data.
//!
//! `#[derive(AocSolver)]` ties the parts together into a [`Solver`] that
//! dispatches by part number, and `#[derive(AutoRegisterSolver)]` submits it
//! as a [`SolverPlugin`] so a [`SolverRegistry`] can find it by year and day.
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, RegistryBuilder, SolveError};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Seeds;
//!
//! impl AocParser for Seeds {
//!     type SharedData<'a> = Vec<u64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .split_whitespace()
//!             .map(|t| t.parse().map_err(|_| ParseError::InvalidFormat(t.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Seeds {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().min().copied().unwrap_or_default().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Seeds {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<u64>().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<Seeds>(2023, 5)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 5, "79 14 55 13").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "13");
//! assert_eq!(solver.solve(2).unwrap().answer, "161");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin,
    SolverRegistry, BASE_YEAR, CAPACITY, DAYS_PER_YEAR, MAX_YEARS,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by the code `AutoRegisterSolver` expands to
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
