//! Unified error types surfaced by the registry API.
//!
//! Domain-level misses (unknown ids, markets that are not attached) are
//! silent no-ops and never show up here. Only infrastructure faults do.
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("failed to render registry dump")]
    Dump(#[source] serde_json::Error),
}
