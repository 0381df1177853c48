//! Repository contract for the shared fixture map.

use std::sync::Arc;

use fixture_core::{Event, EventId};

use super::Result;

/// Shared mapping from event identifier to the current [`Event`].
///
/// Every operation is individually atomic. Implementations must never hand
/// out a partially constructed value and must keep per-key last-writer-wins
/// semantics under unbounded concurrent callers.
pub trait EventRepository: Send + Sync {
    /// Insert or overwrite the entry for `id`.
    fn put(&self, id: EventId, event: Arc<Event>) -> Result<()>;

    /// Current value for `id`, if any.
    fn get(&self, id: EventId) -> Result<Option<Arc<Event>>>;

    /// Snapshot of the present keys in ascending order.
    fn keys(&self) -> Result<Vec<EventId>>;

    /// Number of live entries.
    fn size(&self) -> Result<usize>;

    /// Remove every entry. Intended for resets between scenarios.
    fn clear(&self) -> Result<()>;

    /// All live entries in ascending id order, read in one atomic step.
    fn snapshot(&self) -> Result<Vec<Arc<Event>>>;

    /// Publish `replacement` only if the entry for `id` is still the exact
    /// instance `expected` (pointer identity, not value equality).
    ///
    /// Returns `false` when the entry was replaced or removed in the
    /// meantime; nothing is written in that case.
    fn compare_and_put(
        &self,
        id: EventId,
        expected: &Arc<Event>,
        replacement: Arc<Event>,
    ) -> Result<bool>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.size()? == 0)
    }
}
