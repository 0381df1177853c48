//! Client-facing contract of the fixture registry.
use fixture_core::{Event, EventId, MarketRefType};

use super::errors::Result;

/// Operations external callers perform against a fixture registry.
///
/// Unknown ids never fail: mutating operations return `Ok(false)` when
/// nothing was published. `Ok(true)` means a new or replacement event is now
/// visible to every subsequent reader.
pub trait EventRegistry: Send + Sync {
    /// Register `event` under its own id, replacing any previous entry.
    fn add_event(&self, event: Event) -> Result<bool>;

    /// Flag the event as completed. Completion is one-directional.
    fn mark_completed(&self, id: EventId) -> Result<bool>;

    /// Append `market` to the event's supported markets unless an equal
    /// market is already present.
    fn attach_market(&self, id: EventId, market: MarketRefType) -> Result<bool>;

    /// Remove the first market equal to `market`. Nothing is published when
    /// the market is not attached.
    fn detach_market(&self, id: EventId, market: MarketRefType) -> Result<bool>;

    /// Names of incomplete events matching every supplied filter, in
    /// ascending id order. `None` filters match everything.
    fn incomplete_event_names(
        &self,
        category: Option<&str>,
        sub_category: Option<&str>,
        market_name: Option<&str>,
    ) -> Result<Vec<String>>;

    /// Pretty-printed JSON rendering of the whole registry keyed by id.
    fn dump(&self) -> Result<String>;
}
