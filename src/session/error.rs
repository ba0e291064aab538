//! Session error types.

use clicktoe_rules::BoardError;
use derive_more::{Display, Error};

/// Unrecoverable session failure.
///
/// Rejected moves never produce this; it only surfaces when the board
/// refuses a move the engine had already validated.
#[derive(Debug, Clone, Display, Error)]
#[display("Session error: {} at {}:{}", message, file, line)]
pub struct SessionError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SessionError {
    /// Creates a new session error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<BoardError> for SessionError {
    #[track_caller]
    fn from(err: BoardError) -> Self {
        Self::new(format!("Board invariant breach: {}", err))
    }
}
