//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use wumpus_core::Mode;
use wumpus_runtime::RuntimeConfig;

/// Configuration required to bootstrap the runtime and the terminal driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Practice first (tutorial, then live) or straight into the live game.
    pub mode: Mode,
    pub runtime: RuntimeConfig,
    /// Overrides the platform cache directory for log files.
    pub log_dir: Option<PathBuf>,
    /// Names the per-session log directory (default: timestamp based).
    pub session_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Practice,
            runtime: RuntimeConfig::default(),
            log_dir: None,
            session_id: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WUMPUS_MODE` - `practice` or `live` (default: practice)
    /// - `WUMPUS_GRID_SIZE` - Live board size, clamped by the authority (default: 10)
    /// - `WUMPUS_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `WUMPUS_SESSION_ID` - Log session name (default: auto-generated)
    /// - `RUNTIME_COMMAND_BUFFER` - Worker command queue size (default: 32)
    /// - `RUNTIME_EVENT_CAPACITY` - Event bus capacity per topic (default: 64)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(mode) = lookup("WUMPUS_MODE") {
            match mode.trim().to_ascii_lowercase().as_str() {
                "live" | "authoritative" => config.mode = Mode::Authoritative,
                "practice" | "tutorial" => config.mode = Mode::Practice,
                other => tracing::warn!("Ignoring unknown WUMPUS_MODE `{other}`"),
            }
        }

        if let Some(size) = read_env::<u32>(&lookup, "WUMPUS_GRID_SIZE") {
            config.runtime.grid_size = size;
        }
        if let Some(capacity) = read_env::<usize>(&lookup, "RUNTIME_COMMAND_BUFFER") {
            config.runtime.command_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>(&lookup, "RUNTIME_EVENT_CAPACITY") {
            config.runtime.event_buffer_size = capacity.max(1);
        }

        config.log_dir = lookup("WUMPUS_LOG_DIR").map(PathBuf::from);
        config.session_id = lookup("WUMPUS_SESSION_ID").filter(|id| !id.trim().is_empty());

        config
    }
}

fn read_env<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_practice() {
        let config = config_from(&[]);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.mode, Mode::Practice);
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("WUMPUS_MODE", "Live"),
            ("WUMPUS_GRID_SIZE", "12"),
            ("WUMPUS_LOG_DIR", "/tmp/wumpus-logs"),
            ("WUMPUS_SESSION_ID", "run-1"),
            ("RUNTIME_COMMAND_BUFFER", "0"),
            ("RUNTIME_EVENT_CAPACITY", "16"),
        ]);
        assert_eq!(config.mode, Mode::Authoritative);
        assert_eq!(config.runtime.grid_size, 12);
        assert_eq!(config.runtime.command_buffer_size, 1);
        assert_eq!(config.runtime.event_buffer_size, 16);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/wumpus-logs")));
        assert_eq!(config.session_id.as_deref(), Some("run-1"));
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let config = config_from(&[("WUMPUS_GRID_SIZE", "huge"), ("WUMPUS_MODE", "chaos")]);
        assert_eq!(config.runtime.grid_size, RuntimeConfig::DEFAULT_GRID_SIZE);
        assert_eq!(config.mode, Mode::Practice);
    }
}
