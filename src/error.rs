//! Error types for the parsing and analysis core.
//!
//! Line-level failures ([`LineParseError`]) are recoverable and stay inside the batch.
//! [`AnalysisError`] means the requested analysis cannot be produced at all and is
//! always returned to the caller.

use crate::models::RecordField;
use thiserror::Error;

/// Why a single line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailureReason {
    #[error("does not match expected grammar")]
    Grammar,

    #[error("request line has {tokens} tokens, expected method, path and protocol")]
    MalformedRequest { tokens: usize },

    #[error("invalid {field} value '{value}'")]
    InvalidFieldValue { field: &'static str, value: String },
}

/// A line that could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}: {line}")]
pub struct LineParseError {
    pub line: String,
    pub reason: ParseFailureReason,
}

impl LineParseError {
    pub fn new(line: impl Into<String>, reason: ParseFailureReason) -> Self {
        Self {
            line: line.into(),
            reason,
        }
    }

    pub fn grammar(line: impl Into<String>) -> Self {
        Self::new(line, ParseFailureReason::Grammar)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("no valid records in input")]
    EmptyResult,

    #[error("requested N ({requested}) exceeds distinct group count ({available}) for {field}")]
    InsufficientGroups {
        field: RecordField,
        requested: usize,
        available: usize,
    },
}

pub type AnalysisOutcome<T> = std::result::Result<T, AnalysisError>;
