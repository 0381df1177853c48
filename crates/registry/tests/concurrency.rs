use std::sync::{Arc, Mutex};

use registry::{
    Category, ConcurrencyMode, Event, EventId, EventRegistry, EventRepository,
    InMemoryEventRepository, MarketRefType, RegistryService, SubCategory,
};
use tokio::task::JoinSet;

const WRITERS: i32 = 32;

fn fixture(id: i32) -> Event {
    Event::new(
        id,
        format!("fixture {id}"),
        SubCategory::new(1, "Premier League", Category::new(1, "Football")),
        Vec::new(),
        false,
    )
}

/// Repository wrapper that lets a competing writer slip in right after the
/// first read of an event, before the reader publishes its replacement.
struct InterleavingRepository {
    inner: InMemoryEventRepository,
    competitor: Mutex<Option<Box<dyn FnOnce(&InMemoryEventRepository) + Send>>>,
}

impl InterleavingRepository {
    fn new(
        events: impl IntoIterator<Item = Event>,
        competitor: impl FnOnce(&InMemoryEventRepository) + Send + 'static,
    ) -> Self {
        Self {
            inner: InMemoryEventRepository::with_events(events),
            competitor: Mutex::new(Some(Box::new(competitor))),
        }
    }
}

impl EventRepository for InterleavingRepository {
    fn put(&self, id: EventId, event: Arc<Event>) -> registry::repository::Result<()> {
        self.inner.put(id, event)
    }

    fn get(&self, id: EventId) -> registry::repository::Result<Option<Arc<Event>>> {
        let current = self.inner.get(id)?;
        if let Some(competitor) = self.competitor.lock().unwrap().take() {
            competitor(&self.inner);
        }
        Ok(current)
    }

    fn keys(&self) -> registry::repository::Result<Vec<EventId>> {
        self.inner.keys()
    }

    fn size(&self) -> registry::repository::Result<usize> {
        self.inner.size()
    }

    fn clear(&self) -> registry::repository::Result<()> {
        self.inner.clear()
    }

    fn snapshot(&self) -> registry::repository::Result<Vec<Arc<Event>>> {
        self.inner.snapshot()
    }

    fn compare_and_put(
        &self,
        id: EventId,
        expected: &Arc<Event>,
        replacement: Arc<Event>,
    ) -> registry::repository::Result<bool> {
        self.inner.compare_and_put(id, expected, replacement)
    }
}

/// Attaches "Competitor" to event 1 behind the reader's back.
fn attach_competitor(repo: &InMemoryEventRepository) {
    let current = repo.get(EventId(1)).unwrap().unwrap();
    let mut markets = current.market_ref_types().to_vec();
    markets.push(MarketRefType::new(99, "Competitor"));
    repo.put(EventId(1), Arc::new(current.with_market_ref_types(markets)))
        .unwrap();
}

#[test]
fn optimistic_mode_keeps_interleaved_update() {
    let repo = InterleavingRepository::new([fixture(1)], attach_competitor);
    let registry = RegistryService::new(Arc::new(repo)).with_mode(ConcurrencyMode::Optimistic);

    assert!(
        registry
            .attach_market(EventId(1), MarketRefType::new(10, "Picks"))
            .unwrap()
    );

    let event = registry.event(EventId(1)).unwrap().unwrap();
    assert!(event.supports_market("Competitor"));
    assert!(event.supports_market("Picks"));
}

#[test]
fn unchecked_mode_loses_interleaved_update() {
    let repo = InterleavingRepository::new([fixture(1)], attach_competitor);
    let registry = RegistryService::new(Arc::new(repo)).with_mode(ConcurrencyMode::Unchecked);

    assert!(
        registry
            .attach_market(EventId(1), MarketRefType::new(10, "Picks"))
            .unwrap()
    );

    // Last writer wins: the competitor's market was built on and then dropped.
    let event = registry.event(EventId(1)).unwrap().unwrap();
    assert!(!event.supports_market("Competitor"));
    assert!(event.supports_market("Picks"));
}

#[test]
fn optimistic_mode_stops_when_event_vanishes_mid_update() {
    let repo = InterleavingRepository::new([fixture(1)], |repo: &InMemoryEventRepository| {
        repo.clear().unwrap()
    });
    let registry = RegistryService::new(Arc::new(repo));

    assert!(!registry.mark_completed(EventId(1)).unwrap());
    assert!(registry.is_empty().unwrap());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_attaches_all_survive() {
    let registry = RegistryService::in_memory();
    registry.add_event(fixture(1)).unwrap();

    let mut tasks = JoinSet::new();
    for writer in 0..WRITERS {
        let registry = registry.clone();
        tasks.spawn(async move {
            registry
                .attach_market(EventId(1), MarketRefType::new(writer, format!("market {writer}")))
                .unwrap()
        });
    }
    while let Some(published) = tasks.join_next().await {
        assert!(published.unwrap());
    }

    let event = registry.event(EventId(1)).unwrap().unwrap();
    assert_eq!(event.market_ref_types().len(), WRITERS as usize);
    for writer in 0..WRITERS {
        assert!(event.has_market(&MarketRefType::new(writer, format!("market {writer}"))));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_mixed_updates_on_same_event_compose() {
    let registry = RegistryService::in_memory();
    let initial: Vec<_> = (0..WRITERS)
        .map(|n| MarketRefType::new(n, format!("initial {n}")))
        .collect();
    registry
        .add_event(fixture(1).with_market_ref_types(initial.clone()))
        .unwrap();

    let mut tasks = JoinSet::new();
    for market in initial {
        let registry = registry.clone();
        tasks.spawn(async move { registry.detach_market(EventId(1), market).unwrap() });
    }
    for writer in 0..WRITERS {
        let registry = registry.clone();
        tasks.spawn(async move {
            registry
                .attach_market(EventId(1), MarketRefType::new(1000 + writer, "added"))
                .unwrap()
        });
    }
    {
        let registry = registry.clone();
        tasks.spawn(async move { registry.mark_completed(EventId(1)).unwrap() });
    }
    while let Some(published) = tasks.join_next().await {
        assert!(published.unwrap());
    }

    let event = registry.event(EventId(1)).unwrap().unwrap();
    assert!(event.is_completed());
    assert_eq!(event.market_ref_types().len(), WRITERS as usize);
    assert!(
        event
            .market_ref_types()
            .iter()
            .all(|market| market.market_ref_name() == "added")
    );
}

#[test]
fn concurrent_adds_of_distinct_ids_are_all_visible() {
    let registry = RegistryService::in_memory();

    std::thread::scope(|scope| {
        for id in 0..WRITERS {
            let registry = &registry;
            scope.spawn(move || registry.add_event(fixture(id)).unwrap());
        }
    });

    assert_eq!(registry.len().unwrap(), WRITERS as usize);
    assert_eq!(
        registry.repository().keys().unwrap(),
        (0..WRITERS).map(EventId).collect::<Vec<_>>()
    );
}

#[test]
fn readers_never_observe_torn_events() {
    let registry = RegistryService::in_memory();
    registry.add_event(fixture(1)).unwrap();

    std::thread::scope(|scope| {
        let writer = &registry;
        scope.spawn(move || {
            for n in 0..200 {
                writer
                    .attach_market(EventId(1), MarketRefType::new(n, format!("market {n}")))
                    .unwrap();
            }
        });

        for _ in 0..4 {
            let reader = &registry;
            scope.spawn(move || {
                let mut last_len = 0;
                for _ in 0..200 {
                    let event = reader.event(EventId(1)).unwrap().unwrap();
                    let len = event.market_ref_types().len();
                    // One writer only appends, so a reader never sees the list shrink.
                    assert!(len >= last_len);
                    assert_eq!(event.name(), "fixture 1");
                    last_len = len;

                    let names = reader.incomplete_event_names(None, None, None).unwrap();
                    assert_eq!(names, vec!["fixture 1"]);
                }
            });
        }
    });

    let event = registry.event(EventId(1)).unwrap().unwrap();
    assert_eq!(event.market_ref_types().len(), 200);
}
