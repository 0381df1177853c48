//! In-memory EventRepository implementation.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use fixture_core::{Event, EventId};

use crate::repository::{EventRepository, RepositoryError, Result};

/// In-memory implementation of EventRepository.
///
/// A single `RwLock` guards the whole map; readers proceed in parallel and
/// writers are serialized. The `BTreeMap` keeps enumeration in ascending id
/// order without a separate sort.
pub struct InMemoryEventRepository {
    events: RwLock<BTreeMap<EventId, Arc<Event>>>,
}

impl InMemoryEventRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            events: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create a repository seeded with `events`, later duplicates winning.
    pub fn with_events(events: impl IntoIterator<Item = Event>) -> Self {
        let events = events
            .into_iter()
            .map(|event| (event.id(), Arc::new(event)))
            .collect();
        Self {
            events: RwLock::new(events),
        }
    }
}

impl Default for InMemoryEventRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EventRepository for InMemoryEventRepository {
    fn put(&self, id: EventId, event: Arc<Event>) -> Result<()> {
        let mut events = self
            .events
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        events.insert(id, event);
        tracing::trace!(%id, size = events.len(), "stored event");
        Ok(())
    }

    fn get(&self, id: EventId) -> Result<Option<Arc<Event>>> {
        let events = self
            .events
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(events.get(&id).cloned())
    }

    fn keys(&self) -> Result<Vec<EventId>> {
        let events = self
            .events
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(events.keys().copied().collect())
    }

    fn size(&self) -> Result<usize> {
        let events = self
            .events
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(events.len())
    }

    fn clear(&self) -> Result<()> {
        let mut events = self
            .events
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let removed = events.len();
        events.clear();
        tracing::debug!(removed, "cleared event repository");
        Ok(())
    }

    fn snapshot(&self) -> Result<Vec<Arc<Event>>> {
        let events = self
            .events
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(events.values().cloned().collect())
    }

    fn compare_and_put(
        &self,
        id: EventId,
        expected: &Arc<Event>,
        replacement: Arc<Event>,
    ) -> Result<bool> {
        let mut events = self
            .events
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let is_current = events
            .get(&id)
            .is_some_and(|current| Arc::ptr_eq(current, expected));
        if !is_current {
            tracing::trace!(%id, present = events.contains_key(&id), "stale replacement rejected");
            return Ok(false);
        }

        events.insert(id, replacement);
        tracing::trace!(%id, "replaced event");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use fixture_core::{Category, MarketRefType, SubCategory};

    use super::*;

    fn event(id: i32, name: &str) -> Event {
        Event::new(
            id,
            name,
            SubCategory::new(1, "Premier League", Category::new(1, "Football")),
            vec![MarketRefType::new(1, "Over/Under")],
            false,
        )
    }

    #[test]
    fn new_repository_is_empty() {
        let repo = InMemoryEventRepository::new();

        assert_eq!(repo.size().unwrap(), 0);
        assert!(repo.is_empty().unwrap());
        assert!(repo.keys().unwrap().is_empty());
        assert!(repo.get(EventId(1)).unwrap().is_none());
    }

    #[test]
    fn put_overwrites_existing_entry() {
        let repo = InMemoryEventRepository::new();
        repo.put(EventId(1), Arc::new(event(1, "first"))).unwrap();
        repo.put(EventId(1), Arc::new(event(1, "second"))).unwrap();

        assert_eq!(repo.size().unwrap(), 1);
        assert_eq!(repo.get(EventId(1)).unwrap().unwrap().name(), "second");
    }

    #[test]
    fn keys_and_snapshot_are_ascending() {
        let repo = InMemoryEventRepository::with_events([
            event(30, "c"),
            event(2, "a"),
            event(10, "b"),
        ]);

        assert_eq!(repo.keys().unwrap(), vec![EventId(2), EventId(10), EventId(30)]);
        let names: Vec<_> = repo
            .snapshot()
            .unwrap()
            .iter()
            .map(|event| event.name().to_string())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn clear_removes_everything() {
        let repo = InMemoryEventRepository::with_events([event(1, "a"), event(2, "b")]);
        repo.clear().unwrap();

        assert!(repo.is_empty().unwrap());
    }

    #[test]
    fn held_value_survives_replacement() {
        let repo = InMemoryEventRepository::with_events([event(1, "a")]);
        let before = repo.get(EventId(1)).unwrap().unwrap();

        repo.put(EventId(1), Arc::new(before.completed_copy())).unwrap();

        assert!(!before.is_completed());
        assert!(repo.get(EventId(1)).unwrap().unwrap().is_completed());
    }

    #[test]
    fn compare_and_put_requires_same_instance() {
        let repo = InMemoryEventRepository::with_events([event(1, "a")]);
        let current = repo.get(EventId(1)).unwrap().unwrap();

        // An equal value in a different allocation is not the expected instance.
        let lookalike = Arc::new(event(1, "a"));
        assert!(
            !repo
                .compare_and_put(EventId(1), &lookalike, Arc::new(current.completed_copy()))
                .unwrap()
        );
        assert!(!repo.get(EventId(1)).unwrap().unwrap().is_completed());

        assert!(
            repo.compare_and_put(EventId(1), &current, Arc::new(current.completed_copy()))
                .unwrap()
        );
        assert!(repo.get(EventId(1)).unwrap().unwrap().is_completed());

        // The stored value moved on, so the old handle is stale now.
        assert!(
            !repo
                .compare_and_put(EventId(1), &current, Arc::new(event(1, "late")))
                .unwrap()
        );
    }

    #[test]
    fn compare_and_put_on_missing_entry_is_rejected() {
        let repo = InMemoryEventRepository::new();
        let orphan = Arc::new(event(5, "orphan"));

        assert!(
            !repo
                .compare_and_put(EventId(5), &orphan, orphan.clone())
                .unwrap()
        );
        assert!(repo.is_empty().unwrap());
    }
}
