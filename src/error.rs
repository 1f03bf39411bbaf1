//! Error types for annealing setup.

use std::fmt;

/// Result type for annealing operations.
pub type AnnealResult<T> = Result<T, AnnealError>;

/// Errors that can occur before an annealing run starts.
///
/// Every variant is a setup error: once the loop begins, the algorithm is
/// total over valid inputs and cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnealError {
    /// Invalid configuration parameter.
    InvalidParameter {
        parameter: &'static str,
        message: String,
    },

    /// The initial path has fewer than two points.
    PathTooShort { len: usize },

    /// A point of the initial path has a NaN or infinite coordinate.
    NonFiniteCoordinate { index: usize },
}

impl AnnealError {
    pub(crate) fn invalid(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            message: message.into(),
        }
    }
}

impl fmt::Display for AnnealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { parameter, message } => {
                write!(f, "Invalid parameter '{}': {}", parameter, message)
            }
            Self::PathTooShort { len } => {
                write!(f, "Path must contain at least 2 points, got {}", len)
            }
            Self::NonFiniteCoordinate { index } => {
                write!(f, "Point {} of the initial path has a non-finite coordinate", index)
            }
        }
    }
}

impl std::error::Error for AnnealError {}
