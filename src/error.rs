//! Error types for the retry engine
//!
//! Provides the terminal failure taxonomy using thiserror. Cache operations
//! define no failure states; absence is expressed through `Option`.

use thiserror::Error;

// == Retry Error Enum ==
/// Terminal outcome of a failed [`execute`](crate::RetryPolicyEngine::execute) call.
///
/// Generic over the caller's operation error type `E`; the retry sequence
/// itself is never surfaced, only the final classification.
#[derive(Error, Debug)]
pub enum RetryError<E> {
    /// The operation failed with a status code outside the retryable set.
    /// Surfaced immediately, regardless of remaining retry budget.
    #[error("non-retryable status {status}: {error}")]
    NonRetryable { status: u16, error: E },

    /// Every attempt failed; carries the last observed error.
    #[error("retry budget exhausted after {attempts} attempts: {error}")]
    Exhausted { attempts: u32, error: E },

    /// The attempt loop ended without recording an error. Unreachable under
    /// the current loop shape; kept so exhaustion handling stays total.
    #[error("retry attempts ended without capturing an error")]
    NoErrorCaptured,
}

impl<E> RetryError<E> {
    /// Consumes the wrapper and returns the underlying operation error, if any.
    pub fn into_inner(self) -> Option<E> {
        match self {
            RetryError::NonRetryable { error, .. } => Some(error),
            RetryError::Exhausted { error, .. } => Some(error),
            RetryError::NoErrorCaptured => None,
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for retry engine callers.
pub type RetryResult<T, E> = std::result::Result<T, RetryError<E>>;
