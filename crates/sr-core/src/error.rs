//! Error types for the quiz engine.

use thiserror::Error;

/// Result type for quiz operations.
pub type QuizResult<T> = Result<T, QuizError>;

/// Errors reported by a [`QuizSession`](crate::QuizSession).
///
/// All of them are recoverable: the session is left exactly as it was
/// before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The problem count is missing, not a whole number, or not positive.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The submitted answer is not an integer.
    #[error("invalid answer: {0}")]
    InvalidAnswer(String),

    /// An answer or tick arrived while no round is in progress.
    #[error("no round in progress")]
    SessionNotActive,

    /// A summary was requested before the round ended.
    #[error("round has not finished yet")]
    RoundNotFinished,

    /// A difficulty name could not be parsed.
    #[error("unknown difficulty: {0} (expected easy or hard)")]
    UnknownDifficulty(String),
}
