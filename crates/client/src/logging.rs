//! File-only tracing setup.
//!
//! The terminal belongs to the game, so logs go to
//! `<log dir>/<session>/client.log` through a non-blocking writer.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "client.log";

/// Platform cache directory for logs.
///
/// - macOS: `~/Library/Caches/wumpus/logs`
/// - Linux: `~/.cache/wumpus/logs` (or `$XDG_CACHE_HOME/wumpus/logs`)
/// - Windows: `%LOCALAPPDATA%\wumpus\cache\logs`
/// - Fallback: `/tmp/wumpus/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "wumpus")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/wumpus"))
        .join("logs")
}

/// Session name used when none is configured.
pub fn default_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{timestamp}")
}

/// Creates `<base>/<session_id>` and returns it.
pub fn session_log_dir(base: &Path, session_id: &str) -> Result<PathBuf> {
    let dir = base.join(session_id);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    Ok(dir)
}

/// Installs the global subscriber. Returns the log file path.
///
/// `RUST_LOG` refines the filter; INFO is always enabled.
pub fn setup_logging(log_dir: Option<&Path>, session_id: Option<&str>) -> Result<PathBuf> {
    let base = log_dir.map(Path::to_path_buf).unwrap_or_else(default_log_dir);
    let session_id = session_id.map(str::to_owned).unwrap_or_else(default_session_id);
    let dir = session_log_dir(&base, &session_id)?;

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    // The writer must outlive main.
    std::mem::forget(guard);

    let path = dir.join(LOG_FILE);
    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", path.display());
    Ok(path)
}
