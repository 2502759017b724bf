//! Tracing initialization with file-based log output.
//!
//! The UI owns the terminal, so diagnostics can never go to stdout or
//! stderr. Instead the `tracing` subscriber writes plain-text (no ANSI)
//! lines to a log file in the data directory.
//!
//! # Configuration
//!
//! The filter directive is resolved in priority order:
//! 1. `RUST_LOG` environment variable
//! 2. `trace_level` in the configuration file
//! 3. Default: `"info"`

use crate::Config;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber writing to the application log file.
///
/// Creates the data directory and opens the log in append mode. Failures
/// leave tracing uninitialized rather than aborting startup; the application
/// works fine without diagnostics. Safe to call more than once, only the
/// first call takes effect.
pub fn init_tracing(config: &Config) {
    let directive = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        config
            .trace_level
            .clone()
            .unwrap_or_else(|| "info".to_string())
    });

    let data_dir = crate::infrastructure::paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(crate::infrastructure::paths::log_file())
    else {
        return;
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file));

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(directive))
        .with(fmt_layer);

    let _ = subscriber.try_init();
}
