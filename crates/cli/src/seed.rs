//! Seed files: a JSON array of events loaded before a command runs.
use std::path::Path;

use anyhow::{Context, Result};
use registry::{Event, EventRegistry, RegistryService};

/// Parse every event in the seed file at `path`.
pub fn read_events(path: &Path) -> Result<Vec<Event>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse seed file: {}", path.display()))
}

/// Load the seed file into `registry`, returning how many events were added.
///
/// Later entries replace earlier ones with the same id.
pub fn load_into(registry: &RegistryService, path: &Path) -> Result<usize> {
    let events = read_events(path)?;
    let count = events.len();

    for event in events {
        registry.add_event(event)?;
    }

    tracing::info!(events = count, path = %path.display(), "seeded registry");
    Ok(count)
}
