//! Infrastructure utilities.
//!
//! Platform-specific concerns with no domain logic of their own.

pub mod paths;

pub use paths::{config_dir, config_file, data_dir, log_file, saved_events_file};
