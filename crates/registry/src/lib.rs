//! Thread-safe in-memory registry of sporting fixtures.
//!
//! Callers register [`Event`]s, complete them, attach or detach betting
//! markets, query incomplete events by classification and market, and dump
//! the whole registry as canonical JSON. Stored events are immutable; every
//! update publishes a replacement instance.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the client contract and error types
//! - [`repository`] owns the shared `EventId -> Event` map
//! - [`service`] implements copy-on-write updates and the filtered query
//! - [`filter`] holds the query predicate
//! - [`dump`] renders the registry export
//! - [`concurrency`] selects how compound updates behave under contention
//!
//! ```
//! use registry::{
//!     Category, Event, EventId, EventRegistry, MarketRefType, RegistryService, SubCategory,
//! };
//!
//! let registry = RegistryService::in_memory();
//! let league = SubCategory::new(1, "Premier League", Category::new(1, "Football"));
//! registry
//!     .add_event(Event::new(1, "A v B", league, vec![MarketRefType::new(1, "Over/Under")], false))
//!     .unwrap();
//!
//! let names = registry
//!     .incomplete_event_names(Some("Football"), None, Some("Over/Under"))
//!     .unwrap();
//! assert_eq!(names, vec!["A v B"]);
//!
//! registry.mark_completed(EventId(1)).unwrap();
//! assert!(registry.incomplete_event_names(None, None, None).unwrap().is_empty());
//! ```
pub mod api;
pub mod concurrency;
pub mod dump;
pub mod filter;
pub mod repository;
pub mod service;

pub use api::{EventRegistry, RegistryError, Result};
pub use concurrency::{ConcurrencyMode, ParseConcurrencyModeError};
pub use dump::DumpExporter;
pub use filter::EventFilter;
pub use fixture_core::{Category, Event, EventId, MarketRefType, SubCategory};
pub use repository::{EventRepository, InMemoryEventRepository, RepositoryError};
pub use service::RegistryService;
