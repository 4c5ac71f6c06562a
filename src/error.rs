//! Validation errors.
//!
//! Every rejected input maps to exactly one [`ValidationError`] variant.
//! Variants carry the offending value(s) and the bound that was violated,
//! so callers can build their own diagnostics or match on [`ErrorKind`].

use crate::types::{AgentId, CustomerId, Score};
use std::fmt;
use thiserror::Error;

/// Input rejected before any assignment work was done.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid scores of CSs, they should be different: {scores:?} used more than once")]
    DuplicateAgentScore { scores: Vec<Score> },

    #[error("Invalid number of CSs allowed: {count}. It must be greater than 0 and less than {bound}")]
    AgentCountOutOfRange { count: usize, bound: usize },

    #[error("Invalid number of customers: {count}. It must be greater than 0 and less than {bound}")]
    CustomerCountOutOfRange { count: usize, bound: usize },

    #[error("Invalid number of CSs away allowed: {count}. It must not exceed {bound}")]
    AwayCountOutOfRange { count: usize, bound: usize },

    #[error("Invalid value to CS ID: {values:?}. It must be greater than 0 and less than {bound}")]
    AgentIdOutOfRange { values: Vec<AgentId>, bound: AgentId },

    #[error("Invalid value to CS score: {values:?}. It must be greater than 0 and less than {bound}")]
    AgentScoreOutOfRange { values: Vec<Score>, bound: Score },

    #[error("Invalid value to customer ID: {values:?}. It must be greater than 0 and less than {bound}")]
    CustomerIdOutOfRange {
        values: Vec<CustomerId>,
        bound: CustomerId,
    },

    #[error("Invalid value to customer score: {values:?}. It must be greater than 0 and less than {bound}")]
    CustomerScoreOutOfRange { values: Vec<Score>, bound: Score },
}

impl ValidationError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateAgentScore { .. } => ErrorKind::DuplicateAgentScore,
            Self::AgentCountOutOfRange { .. } => ErrorKind::AgentCountOutOfRange,
            Self::CustomerCountOutOfRange { .. } => ErrorKind::CustomerCountOutOfRange,
            Self::AwayCountOutOfRange { .. } => ErrorKind::AwayCountOutOfRange,
            Self::AgentIdOutOfRange { .. } => ErrorKind::AgentIdOutOfRange,
            Self::AgentScoreOutOfRange { .. } => ErrorKind::AgentScoreOutOfRange,
            Self::CustomerIdOutOfRange { .. } => ErrorKind::CustomerIdOutOfRange,
            Self::CustomerScoreOutOfRange { .. } => ErrorKind::CustomerScoreOutOfRange,
        }
    }
}

/// Category of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    DuplicateAgentScore,
    AgentCountOutOfRange,
    CustomerCountOutOfRange,
    AwayCountOutOfRange,
    AgentIdOutOfRange,
    AgentScoreOutOfRange,
    CustomerIdOutOfRange,
    CustomerScoreOutOfRange,
}

impl ErrorKind {
    /// Stable upper-case name, e.g. `"DUPLICATE_AGENT_SCORE"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DuplicateAgentScore => "DUPLICATE_AGENT_SCORE",
            Self::AgentCountOutOfRange => "AGENT_COUNT_OUT_OF_RANGE",
            Self::CustomerCountOutOfRange => "CUSTOMER_COUNT_OUT_OF_RANGE",
            Self::AwayCountOutOfRange => "AWAY_COUNT_OUT_OF_RANGE",
            Self::AgentIdOutOfRange => "AGENT_ID_OUT_OF_RANGE",
            Self::AgentScoreOutOfRange => "AGENT_SCORE_OUT_OF_RANGE",
            Self::CustomerIdOutOfRange => "CUSTOMER_ID_OUT_OF_RANGE",
            Self::CustomerScoreOutOfRange => "CUSTOMER_SCORE_OUT_OF_RANGE",
        }
    }

    /// Human description of the field the check applies to.
    pub fn field(self) -> &'static str {
        match self {
            Self::DuplicateAgentScore => "scores of CSs",
            Self::AgentCountOutOfRange => "number of CSs allowed",
            Self::CustomerCountOutOfRange => "number of customers",
            Self::AwayCountOutOfRange => "number of CSs away allowed",
            Self::AgentIdOutOfRange => "value to CS ID",
            Self::AgentScoreOutOfRange => "value to CS score",
            Self::CustomerIdOutOfRange => "value to customer ID",
            Self::CustomerScoreOutOfRange => "value to customer score",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result alias for validation.
pub type ValidationResult<T> = Result<T, ValidationError>;
