//! Public registry API surface.
//!
//! This module gathers the types exposed to callers of the registry so the
//! repository and service layers can stay focused on storage and updates.

pub mod client;
pub mod errors;

pub use client::EventRegistry;
pub use errors::{RegistryError, Result};
