//! Algorithms shared by solutions

pub mod range_pipeline;
