//! Errors - dispatch エラーの分類
//!
//! Classified errors carry a ready-to-print message. Everything the
//! translator does not recognise travels unchanged in [`ThorError::Failed`].

use thiserror::Error;

use super::failure::InvokeFailure;

#[derive(Debug, Error)]
pub enum ThorError {
    /// The task is hidden on the target, or does not exist there at all.
    #[error("{0}")]
    UndefinedTask(String),

    /// The task was called with the wrong number of arguments.
    #[error("{0}")]
    Invocation(String),

    /// Generic dispatch error (bad task definition, dynamic task for a name
    /// that does resolve, ...).
    #[error("{0}")]
    Dispatch(String),

    #[error(transparent)]
    Failed(#[from] InvokeFailure),
}

impl ThorError {
    /// `true` for the errors this crate classified itself.
    pub fn is_classified(&self) -> bool {
        !matches!(self, ThorError::Failed(_))
    }
}
