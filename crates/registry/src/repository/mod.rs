//! Repository layer for the live fixture set.
//!
//! A repository owns the canonical `EventId -> Event` mapping. Values are
//! stored behind `Arc` and only ever replaced, never mutated, so readers keep
//! a valid snapshot for as long as they hold one.
//!
//! Multi-step read-modify-write sequences are not atomic at this level;
//! callers that need that use [`EventRepository::compare_and_put`].

mod error;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use memory::InMemoryEventRepository;
pub use traits::EventRepository;
