//! Tracing subscriber setup.
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LogConfig;
use crate::dirs;

/// Install the global subscriber.
///
/// Logs always go to stderr so stdout stays reserved for command output.
/// With file logging enabled they are mirrored to
/// `<log dir>/<session>/fixtures.log`; the returned guard must be held
/// until exit to flush that file.
pub fn setup_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let mut session_log_dir = None;
    let (file_layer, guard) = if config.to_file {
        let session_id = config.session_id.clone().unwrap_or_else(|| {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{timestamp}")
        });

        let dir = config
            .dir
            .clone()
            .unwrap_or_else(dirs::log_dir)
            .join(&session_id);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

        let file_appender = tracing_appender::rolling::never(&dir, "fixtures.log");
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
        session_log_dir = Some(dir);

        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_file)
            .with_ansi(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    if let Some(dir) = session_log_dir {
        tracing::info!("Log file: {}/fixtures.log", dir.display());
    }

    Ok(guard)
}
