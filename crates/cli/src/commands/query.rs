//! Query incomplete events.

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use registry::{EventFilter, RegistryService};

/// List names of incomplete events, one per line, in id order
///
/// Omitted filters match everything.
#[derive(Parser)]
pub struct Query {
    /// Category reference (e.g., "Football")
    #[arg(short, long, value_name = "CATEGORY")]
    category: Option<String>,

    /// Sub-category reference (e.g., "Premier League")
    #[arg(short, long, value_name = "SUB_CATEGORY")]
    sub_category: Option<String>,

    /// Name of a market the event must carry (e.g., "Over/Under")
    #[arg(short, long, value_name = "MARKET")]
    market: Option<String>,
}

impl Query {
    pub fn execute(self, registry: &RegistryService, out: &mut impl Write) -> Result<()> {
        let filter = EventFilter {
            category: self.category,
            sub_category: self.sub_category,
            market_name: self.market,
        };

        for name in registry.query(&filter)? {
            writeln!(out, "{name}")?;
        }
        Ok(())
    }
}
