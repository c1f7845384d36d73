use std::num::ParseIntError;

use thiserror::Error;

/// Failure building a [`Pipeline`](super::Pipeline) from text.
///
/// Line numbers are 1-based positions in the full input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("line {line}: `{token}` is not a non-negative integer")]
    InvalidNumber {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("line {line}: expected 3 numbers (destination, source, length), found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("line {line}: rule appears before any `<name> map:` header")]
    MissingStageHeader { line: usize },
    #[error("line {line}: rule range does not fit in 64 bits")]
    RuleOverflow { line: usize },
}

impl PipelineError {
    pub fn line(&self) -> usize {
        match self {
            PipelineError::InvalidNumber { line, .. }
            | PipelineError::FieldCount { line, .. }
            | PipelineError::MissingStageHeader { line }
            | PipelineError::RuleOverflow { line } => *line,
        }
    }
}
