//! Subcommand implementations
//!
//! Each command writes its result to the supplied writer so stdout stays
//! free of log output.

mod dump;
mod query;
mod run;

pub use dump::Dump;
pub use query::Query;
pub use run::Run;
