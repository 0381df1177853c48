//! Registry service: copy-on-write updates and queries over a repository.
//!
//! Every mutation reads the current [`Event`], builds a brand-new instance
//! and publishes it; stored events are never touched in place. How the
//! publish step behaves under contention is chosen by [`ConcurrencyMode`].
use std::sync::Arc;

use fixture_core::{Event, EventId, MarketRefType};

use crate::api::{EventRegistry, Result};
use crate::concurrency::ConcurrencyMode;
use crate::dump::DumpExporter;
use crate::filter::EventFilter;
use crate::repository::{EventRepository, InMemoryEventRepository};

/// Fixture registry backed by a shared [`EventRepository`].
///
/// Cloning is cheap and every clone operates on the same repository.
#[derive(Clone)]
pub struct RegistryService {
    repository: Arc<dyn EventRepository>,
    exporter: DumpExporter,
    mode: ConcurrencyMode,
}

impl RegistryService {
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self {
            exporter: DumpExporter::new(Arc::clone(&repository)),
            repository,
            mode: ConcurrencyMode::default(),
        }
    }

    /// Service over a fresh, empty in-memory repository.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryEventRepository::new()))
    }

    pub fn with_mode(mut self, mode: ConcurrencyMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ConcurrencyMode {
        self.mode
    }

    pub fn repository(&self) -> &Arc<dyn EventRepository> {
        &self.repository
    }

    /// Current value for `id`. The handle stays valid after later updates.
    pub fn event(&self, id: EventId) -> Result<Option<Arc<Event>>> {
        Ok(self.repository.get(id)?)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.repository.size()?)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.repository.is_empty()?)
    }

    /// Drop every event. Meant for resetting between scenarios.
    pub fn clear(&self) -> Result<()> {
        Ok(self.repository.clear()?)
    }

    /// Names of incomplete events accepted by `filter`, in ascending id order.
    ///
    /// Names are not deduplicated.
    pub fn query(&self, filter: &EventFilter) -> Result<Vec<String>> {
        let names: Vec<String> = self
            .repository
            .snapshot()?
            .iter()
            .filter(|event| !event.is_completed() && filter.matches(event))
            .map(|event| event.name().to_string())
            .collect();

        tracing::debug!(?filter, matched = names.len(), "queried incomplete events");
        Ok(names)
    }

    /// Read the current event, derive a replacement with `build` and publish
    /// it according to the configured [`ConcurrencyMode`].
    ///
    /// `build` returning `None` means there is nothing to publish. Returns
    /// whether a replacement was published.
    fn replace_with<F>(&self, id: EventId, operation: &'static str, build: F) -> Result<bool>
    where
        F: Fn(&Event) -> Option<Event>,
    {
        let mut attempt = 1u32;
        loop {
            let Some(current) = self.repository.get(id)? else {
                tracing::debug!(%id, operation, "event not found, nothing to do");
                return Ok(false);
            };

            let Some(replacement) = build(&current) else {
                tracing::debug!(%id, operation, "event unchanged, nothing to publish");
                return Ok(false);
            };
            let replacement = Arc::new(replacement);

            match self.mode {
                ConcurrencyMode::Unchecked => {
                    self.repository.put(id, replacement)?;
                }
                ConcurrencyMode::Optimistic => {
                    if !self.repository.compare_and_put(id, &current, replacement)? {
                        tracing::trace!(%id, operation, attempt, "event changed concurrently, retrying");
                        attempt += 1;
                        continue;
                    }
                }
            }

            tracing::debug!(%id, operation, attempt, mode = %self.mode, "published replacement event");
            return Ok(true);
        }
    }
}

impl EventRegistry for RegistryService {
    fn add_event(&self, event: Event) -> Result<bool> {
        let id = event.id();
        self.repository.put(id, Arc::new(event))?;
        tracing::debug!(%id, "added event");
        Ok(true)
    }

    fn mark_completed(&self, id: EventId) -> Result<bool> {
        self.replace_with(id, "mark_completed", |event| Some(event.completed_copy()))
    }

    fn attach_market(&self, id: EventId, market: MarketRefType) -> Result<bool> {
        self.replace_with(id, "attach_market", |event| {
            let mut markets = event.market_ref_types().to_vec();
            if !event.has_market(&market) {
                markets.push(market.clone());
            }
            Some(event.with_market_ref_types(markets))
        })
    }

    fn detach_market(&self, id: EventId, market: MarketRefType) -> Result<bool> {
        self.replace_with(id, "detach_market", |event| {
            let position = event
                .market_ref_types()
                .iter()
                .position(|attached| *attached == market)?;
            let mut markets = event.market_ref_types().to_vec();
            markets.remove(position);
            Some(event.with_market_ref_types(markets))
        })
    }

    fn incomplete_event_names(
        &self,
        category: Option<&str>,
        sub_category: Option<&str>,
        market_name: Option<&str>,
    ) -> Result<Vec<String>> {
        self.query(&EventFilter::from_refs(category, sub_category, market_name))
    }

    fn dump(&self) -> Result<String> {
        self.exporter.dump()
    }
}
