//! Execute a script of registry operations.
//!
//! A script is a JSON array of operations tagged by `"op"`:
//!
//! ```json
//! [
//!   {"op": "complete", "id": 2},
//!   {"op": "attach", "id": 1, "market": {"marketRefId": 10, "marketRefName": "Picks"}},
//!   {"op": "query", "category": "Football", "market": "Picks"},
//!   {"op": "dump"}
//! ]
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use registry::{Event, EventFilter, EventId, EventRegistry, MarketRefType, RegistryService};
use serde::Deserialize;

/// Run a JSON script of operations against the registry
#[derive(Parser)]
pub struct Run {
    /// Path to the script file
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Operation {
    Add {
        event: Event,
    },
    Complete {
        id: EventId,
    },
    Attach {
        id: EventId,
        market: MarketRefType,
    },
    Detach {
        id: EventId,
        market: MarketRefType,
    },
    Query {
        category: Option<String>,
        #[serde(rename = "subCategory")]
        sub_category: Option<String>,
        market: Option<String>,
    },
    Dump,
}

impl Run {
    pub fn execute(self, registry: &RegistryService, out: &mut impl Write) -> Result<()> {
        let operations = read_script(&self.script)?;
        let total = operations.len();

        let mut published = 0;
        for (index, operation) in operations.into_iter().enumerate() {
            if apply(registry, operation, out)
                .with_context(|| format!("Operation #{index} failed"))?
            {
                published += 1;
            }
        }

        eprintln!(
            "{} Ran {} operations ({} published updates)",
            style("✓").green().bold(),
            style(total).cyan(),
            style(published).cyan()
        );
        Ok(())
    }
}

fn read_script(path: &Path) -> Result<Vec<Operation>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script: {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse script: {}", path.display()))
}

/// Apply one operation, returning whether it published a replacement.
fn apply(registry: &RegistryService, operation: Operation, out: &mut impl Write) -> Result<bool> {
    tracing::debug!(?operation, "applying operation");

    let published = match operation {
        Operation::Add { event } => registry.add_event(event)?,
        Operation::Complete { id } => registry.mark_completed(id)?,
        Operation::Attach { id, market } => registry.attach_market(id, market)?,
        Operation::Detach { id, market } => registry.detach_market(id, market)?,
        Operation::Query {
            category,
            sub_category,
            market,
        } => {
            let filter = EventFilter {
                category,
                sub_category,
                market_name: market,
            };
            for name in registry.query(&filter)? {
                writeln!(out, "{name}")?;
            }
            false
        }
        Operation::Dump => {
            writeln!(out, "{}", registry.dump()?)?;
            false
        }
    };

    Ok(published)
}
