//! eventfinder: a terminal client for browsing a live events catalog.
//!
//! eventfinder searches a Ticketmaster-style events catalog from the
//! terminal, with:
//! - Keyword, calendar-date, and category filtered searches
//! - Client-side sorting by date, name, or popularity
//! - A card grid or compact list presentation, with a lazy detail overlay
//! - A locally persisted saved-events list backed by a JSON file
//! - All network and disk I/O on a background worker thread
//!
//! # Architecture
//!
//! The crate follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal runtime (main.rs)                         │  ← raw mode, key loop
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← state machine
//! │  - Event handling and sequencing                    │
//! │  - Filtering, sorting, selection                    │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - JSON file   │   │ - HTTP fetch  │
//! │ - Theming     │   │ - Saved list  │   │ - Store owner │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  API, Infrastructure & Domain Layers                │
//! │  - Catalog client and wire types (api/)             │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Event models and errors (domain/)                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Configuration is read from `<config_dir>/eventfinder/config.toml`:
//!
//! ```toml
//! api_key = "your-catalog-api-key"
//! country_code = "US"
//! page_size = 20
//! theme = "catppuccin-mocha"
//! trace_level = "info"
//! ```
//!
//! The `EVENTFINDER_API_KEY` environment variable overrides the file's
//! `api_key`. Without a key the application still starts; searches are
//! replaced by a configuration hint and the saved list remains usable.
//!
//! # Example
//!
//! ```no_run
//! use eventfinder::{handle_event, initialize, Config, Event};
//!
//! let config = Config::load().unwrap_or_default();
//! let mut state = initialize(&config);
//!
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! # let _ = (should_render, actions);
//! # Ok::<(), eventfinder::Error>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{Error, Result};
pub use ui::Theme;

use serde::Deserialize;

/// Default catalog endpoint.
const DEFAULT_BASE_URL: &str = "https://app.ticketmaster.com/discovery/v2";

/// Application configuration.
///
/// Loaded from the TOML configuration file with every field optional; see
/// the crate docs for the file format and location.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Catalog API key. `None` disables searching until one is provided.
    pub api_key: Option<String>,

    /// Catalog endpoint base URL.
    pub base_url: String,

    /// Two-letter country filter sent with every search.
    pub country_code: String,

    /// Result page size sent with every search.
    pub page_size: u32,

    /// Built-in theme name: `catppuccin-mocha` or `catppuccin-latte`.
    /// Ignored if `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme`.
    pub theme_file: Option<String>,

    /// Tracing filter directive: `trace`, `debug`, `info`, `warn`, `error`.
    /// Overridden by `RUST_LOG`. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            country_code: "US".to_string(),
            page_size: 20,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from the platform config file, then applies
    /// environment overrides.
    ///
    /// A missing file yields the defaults; `EVENTFINDER_API_KEY` replaces
    /// the file's `api_key` when set and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file exists but cannot be read or
    /// parsed. A malformed file is reported rather than silently ignored, so
    /// a typo cannot quietly disable the API key.
    pub fn load() -> Result<Self> {
        let path = infrastructure::paths::config_file();
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
            Self::from_toml(&contents)?
        } else {
            Self::default()
        };

        if let Ok(key) = std::env::var("EVENTFINDER_API_KEY") {
            if !key.trim().is_empty() {
                config.api_key = Some(key);
            }
        }

        Ok(config)
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] on invalid TOML or unknown keys.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config(format!("invalid config: {e}")))
    }
}

/// Creates the initial application state from configuration.
///
/// Resolves the theme (custom file, then built-in name, then the default)
/// and records whether an API key is available so the UI can surface the
/// configuration hint instead of issuing doomed searches.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing eventfinder");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme, config.api_key.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.country_code, "US");
        assert_eq!(config.page_size, 20);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn fields_parse_from_toml() {
        let config = Config::from_toml(
            r#"
            api_key = "k-123"
            page_size = 40
            theme = "catppuccin-latte"
            trace_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("k-123"));
        assert_eq!(config.page_size, 40);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_toml("api_kye = \"oops\"").is_err());
    }

    #[test]
    fn initialize_records_missing_api_key() {
        let state = initialize(&Config::default());
        assert!(!state.api_key_present);
    }

    #[test]
    fn initialize_falls_back_to_default_theme_on_unknown_name() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }
}
