//! Immutable value types describing sporting fixtures.
//!
//! The model is deliberately behavior-free: an [`Event`] is classified by a
//! two-level [`Category`] / [`SubCategory`] hierarchy and carries the
//! [`MarketRefType`]s it supports. Events are never mutated in place; every
//! change produces a new instance (see [`Event::completed_copy`] and
//! [`Event::with_market_ref_types`]), which lets registries hand out shared
//! snapshots without coordination.
//!
//! Modules are organized by entity:
//! - [`category`] holds the classification hierarchy
//! - [`market`] holds betting market kinds
//! - [`event`] holds the fixture itself and its identifier
pub mod category;
pub mod event;
pub mod market;

pub use category::{Category, SubCategory};
pub use event::{Event, EventId};
pub use market::MarketRefType;
