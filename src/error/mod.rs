//! Error definitions
//!
//! This module provides error types for testkit-doubles.

use thiserror::Error;

/// Main error type for testkit-doubles
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required argument was missing or had the wrong shape.
    #[error("{message} (arg #{position})")]
    InvalidArgument {
        /// 1-based position of the offending argument.
        position: usize,
        /// What was wrong with it.
        message: String,
    },

    /// The method to double does not exist and creation was not requested.
    #[error("method [{0}] does not exist on the target and create was not requested")]
    InvalidMethod(String),

    /// The target object has no method under this name.
    #[error("target has no method named [{0}]")]
    NoSuchMethod(String),

    /// Deferred settlement was requested on an immediate-mode double.
    #[error("method [{0}] is not doubled in deferred mode")]
    NotDeferred(String),

    /// The pending result was already resolved or rejected.
    #[error("pending result has already been settled")]
    AlreadySettled,
}

impl Error {
    /// Create an invalid argument error for the argument at `position`.
    #[must_use]
    pub fn invalid_argument(position: usize, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            position,
            message: message.into(),
        }
    }

    /// Create an invalid method error.
    #[must_use]
    pub fn invalid_method(name: impl Into<String>) -> Self {
        Self::InvalidMethod(name.into())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
