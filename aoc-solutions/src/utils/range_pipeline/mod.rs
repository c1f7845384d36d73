//! Piecewise-linear range remapping
//!
//! A [`Pipeline`] is an ordered list of [`Stage`]s. Each stage holds
//! [`Rule`]s that shift a source interval by a constant offset; values no rule
//! claims pass through unchanged. Pushing an [`Interval`] through a stage
//! splits it into mapped and unmapped [`Segment`]s, so whole ranges of values
//! can be tracked without enumerating them.
//!
//! # Input format
//!
//! ```text
//! seeds: 79 14 55 13          <- header block, left to the caller
//!
//! seed-to-soil map:           <- stage name
//! 50 98 2                     <- destination source length
//! 52 50 48
//!
//! soil-to-fertilizer map:
//! 0 15 37
//! ```
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::range_pipeline::{Interval, Pipeline};
//!
//! let pipeline: Pipeline = "seeds: 79 14\n\nseed-to-soil map:\n50 98 2\n52 50 48\n"
//!     .parse()
//!     .unwrap();
//!
//! assert_eq!(pipeline.map_value(79), 81);
//! assert_eq!(
//!     pipeline.map_intervals([Interval::new(45, 55)]),
//!     vec![Interval::new(45, 50), Interval::new(52, 57)]
//! );
//! assert_eq!(pipeline.lowest([Interval::new(79, 93)]), Some(81));
//! ```

mod error;
mod interval;
mod parser;
mod pipeline;
mod stage;

pub use error::PipelineError;
pub use interval::Interval;
pub use parser::{numbered_lines, parse_stages};
pub use pipeline::Pipeline;
pub use stage::{Rule, Segment, Stage};
