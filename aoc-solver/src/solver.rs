//! Parsing and solving traits

use crate::error::{ParseError, SolveError};

/// Turns puzzle input into the data every part works on.
///
/// `SharedData` is generic over the input lifetime so a solver may either
/// borrow from the input (`&'a str`, slices of lines) or own a fully parsed
/// structure.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Seeds;
///
/// impl AocParser for Seeds {
///     type SharedData<'a> = Vec<u64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split_whitespace()
///             .map(|t| t.parse().map_err(|_| ParseError::InvalidFormat(t.to_string())))
///             .collect()
///     }
/// }
///
/// assert_eq!(Seeds::parse("79 14 55 13").unwrap(), vec![79, 14, 55, 13]);
/// ```
pub trait AocParser {
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Answers part `N` of a puzzle.
///
/// Parts receive mutable access to the shared data so an expensive
/// intermediate result can be stored by one part and reused by the next.
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete solver: a parser plus a dispatcher over its parts.
///
/// Usually derived with `#[derive(AocSolver)]`, which maps part `n` to
/// `PartSolver<n>`:
///
/// ```
/// use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 1)]
/// struct Lowest;
///
/// impl AocParser for Lowest {
///     type SharedData<'a> = Vec<u64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split_whitespace()
///             .map(|t| t.parse().map_err(|_| ParseError::InvalidFormat(t.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Lowest {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().min().copied().unwrap_or_default().to_string())
///     }
/// }
///
/// let mut shared = Lowest::parse("82 43 86 35").unwrap();
/// assert_eq!(Lowest::solve_part(&mut shared, 1).unwrap(), "35");
/// assert!(matches!(
///     Lowest::solve_part(&mut shared, 2),
///     Err(SolveError::PartNotImplemented(2))
/// ));
/// ```
pub trait Solver: AocParser {
    /// Number of parts, numbered from 1
    const PARTS: u8;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Bounds checking on top of [`Solver::solve_part`].
pub trait SolverExt: Solver {
    /// Like `solve_part`, but part 0 and parts above `PARTS` fail with
    /// [`SolveError::PartOutOfRange`] before reaching the solver.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
