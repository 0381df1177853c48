//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by repository implementations.
///
/// Missing entries are not errors; lookups report them as `None`.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("event repository lock was poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
