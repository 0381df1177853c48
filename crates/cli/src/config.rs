//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use registry::ConcurrencyMode;

/// Configuration required to bootstrap the registry and logging.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub seed_file: Option<PathBuf>,
    pub concurrency: ConcurrencyMode,
    pub logging: LogConfig,
}

#[derive(Clone, Debug, Default)]
pub struct LogConfig {
    pub to_file: bool,
    pub dir: Option<PathBuf>,
    pub session_id: Option<String>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `FIXTURES_SEED_FILE` - Events loaded before the command runs (default: none)
    /// - `FIXTURES_CONCURRENCY` - `optimistic` or `unchecked` (default: optimistic)
    /// - `FIXTURES_LOG_TO_FILE` - Also write logs to a session file (default: false)
    /// - `FIXTURES_LOG_DIR` - Directory for log files (default: platform-specific)
    /// - `FIXTURES_SESSION_ID` - Log session label (default: timestamp-based)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary key lookup.
    ///
    /// Values that fail to parse fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.seed_file = lookup("FIXTURES_SEED_FILE").map(PathBuf::from);

        if let Some(mode) = parse(&lookup, "FIXTURES_CONCURRENCY") {
            config.concurrency = mode;
        }

        if let Some(enable) = parse::<bool>(&lookup, "FIXTURES_LOG_TO_FILE") {
            config.logging.to_file = enable;
        } else if lookup("FIXTURES_LOG_TO_FILE").is_some_and(|value| value.is_empty()) {
            // Setting the variable without a value counts as enabling it
            config.logging.to_file = true;
        }

        config.logging.dir = lookup("FIXTURES_LOG_DIR").map(PathBuf::from);
        config.logging.session_id = lookup("FIXTURES_SESSION_ID");

        config
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.parse().ok()
}
