//! Platform-specific directory utilities

use std::path::PathBuf;

/// Platform-specific log directory for the fixtures CLI
///
/// - macOS: `~/Library/Caches/fixtures/logs`
/// - Linux: `~/.cache/fixtures/logs` (or `$XDG_CACHE_HOME/fixtures/logs`)
/// - Windows: `%LOCALAPPDATA%\fixtures\cache\logs`
/// - Fallback: `/tmp/fixtures/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "fixtures")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/fixtures"))
        .join("logs")
}
