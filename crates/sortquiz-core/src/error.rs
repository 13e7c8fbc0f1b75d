//! Session error types.
//!
//! Browser-originated events can only ever reference elements that exist,
//! but session transitions are also driven synthetically (move scripts,
//! tests), where a caller can name a word or column that isn't in the quiz.
//! Defined here so callers can match on the failure instead of string
//! matching.

use thiserror::Error;

use crate::model::WordId;

/// Errors from driving a [`crate::session::Session`] with invalid input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The word id does not exist in this quiz.
    #[error("unknown word {0}")]
    UnknownWord(WordId),

    /// The column slug does not match any category in this quiz.
    #[error("unknown column: {0}")]
    UnknownColumn(String),
}
