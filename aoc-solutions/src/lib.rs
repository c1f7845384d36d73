//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions live under [`my_solutions`], one module per year and day, and
//! register themselves with the solver framework through the
//! `AutoRegisterSolver` derive. Reusable algorithms shared between days live
//! under [`utils`].

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
