//! Print the registry export.

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use registry::{EventRegistry, RegistryService};

/// Print every registered event as pretty JSON keyed by id
#[derive(Parser)]
pub struct Dump {}

impl Dump {
    pub fn execute(self, registry: &RegistryService, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", registry.dump()?)?;
        Ok(())
    }
}
