//! Error types for the quiz engine.
//!
//! Defined centrally so callers can classify failures without string
//! matching. Session errors are recoverable by the presentation layer
//! (disable the offending control); storage errors are terminal for the
//! operation that raised them and are never retried automatically.

use thiserror::Error;

/// Errors raised by the quiz session state machine and engine.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The requested quiz id is absent from the catalog.
    #[error("quiz not found: {0}")]
    QuizNotFound(u32),

    /// The quiz definition violates the structural invariants
    /// (empty questions, zero time limit, out-of-range correct index).
    #[error("invalid quiz definition: {0}")]
    InvalidQuiz(String),

    /// A mutating operation was invoked after the session completed.
    #[error("session already completed")]
    AlreadyCompleted,

    /// An answer targeted a question other than the one on display.
    #[error("answer targets question {got} but question {expected} is current")]
    QuestionMismatch { expected: u32, got: u32 },

    /// An answer used an option index outside the question's option range.
    #[error("option index {index} out of range for question {question_id} ({option_count} options)")]
    InvalidAnswerIndex {
        question_id: u32,
        index: usize,
        option_count: usize,
    },
}

impl SessionError {
    /// Returns `true` if this error indicates a wrong-state operation
    /// rather than a bad input, so a UI should disable the control that
    /// produced it instead of re-prompting.
    pub fn is_state_error(&self) -> bool {
        matches!(self, SessionError::AlreadyCompleted)
    }
}

/// Errors raised by result persistence.
///
/// A corrupt or missing history file is deliberately *not* an error:
/// repositories treat it as empty history. These variants cover real I/O
/// and serialization failures.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading the history failed.
    #[error("failed to read history from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing the history failed (e.g. quota or permissions).
    #[error("failed to write history to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Serializing results to the on-disk representation failed.
    #[error("failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
}
