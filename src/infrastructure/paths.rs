//! Platform path resolution.
//!
//! This module resolves the per-user directories eventfinder reads and
//! writes: the TOML configuration, the saved-events JSON file, and the trace
//! log. Locations follow the platform conventions reported by the `dirs`
//! crate, with a relative fallback when the platform reports none.

use std::path::PathBuf;

/// Application directory name under the platform config and data roots.
const APP_DIR: &str = "eventfinder";

/// Returns the configuration directory, e.g. `~/.config/eventfinder` on
/// Linux.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Returns the data directory, e.g. `~/.local/share/eventfinder` on Linux.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Path of the TOML configuration file.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Path of the persisted saved-events list.
#[must_use]
pub fn saved_events_file() -> PathBuf {
    data_dir().join("saved_events.json")
}

/// Path of the trace log file.
#[must_use]
pub fn log_file() -> PathBuf {
    data_dir().join("eventfinder.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_live_under_the_app_directory() {
        assert!(config_file().to_string_lossy().contains(APP_DIR));
        assert!(saved_events_file().ends_with("eventfinder/saved_events.json"));
        assert!(log_file().ends_with("eventfinder/eventfinder.log"));
    }
}
