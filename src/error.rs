//! Error types for the marbles crate.
//!
//! Configuration errors surface before any [`GameState`](crate::GameState)
//! exists. Illegal moves inside the search are programming errors and are
//! only checked in debug builds; `IllegalMove` is reserved for the checked
//! entry points collaborators use.

use thiserror::Error;

use crate::core::Move;

/// Main error type for the marbles crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("unknown version '{0}' (expected 'standard' or 'misere')")]
    InvalidVariant(String),

    #[error("unknown player '{0}' (expected 'human' or 'computer')")]
    InvalidSide(String),

    #[error("invalid depth '{0}' (expected an integer)")]
    InvalidDepth(String),

    #[error("invalid move input '{0}': input must be two integers separated by a space")]
    InvalidMoveInput(String),

    #[error("({red}, {blue}) is not a move (take 2 or 1 marbles from one pile)")]
    UnknownMove { red: u32, blue: u32 },

    #[error("illegal move {mv} with red = {red}, blue = {blue}")]
    IllegalMove { mv: Move, red: u32, blue: u32 },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap an I/O failure with the operation that caused it.
    pub fn io(operation: &'static str, source: std::io::Error) -> Self {
        Error::Io { operation, source }
    }

    /// True for errors raised while reading the game parameters.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidVariant(_) | Error::InvalidSide(_) | Error::InvalidDepth(_)
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_classification() {
        assert!(Error::InvalidVariant("classic".into()).is_configuration());
        assert!(Error::InvalidDepth("deep".into()).is_configuration());
        assert!(!Error::InvalidMoveInput("x".into()).is_configuration());
        assert!(!Error::UnknownMove { red: 1, blue: 1 }.is_configuration());
        assert!(!Error::IllegalMove { mv: Move::TakeRed2, red: 1, blue: 0 }.is_configuration());
    }

    #[test]
    fn test_messages() {
        let err = Error::InvalidVariant("classic".into());
        assert_eq!(
            err.to_string(),
            "unknown version 'classic' (expected 'standard' or 'misere')"
        );

        let err = Error::IllegalMove { mv: Move::TakeBlue2, red: 3, blue: 1 };
        assert_eq!(err.to_string(), "illegal move (0, 2) with red = 3, blue = 1");
    }
}
