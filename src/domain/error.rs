//! Error types for eventfinder.
//!
//! This module defines the centralized error type [`Error`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors
//! are implemented using the `thiserror` crate for automatic `Error` trait
//! implementation.

use thiserror::Error as ThisError;

/// The main error type for eventfinder operations.
///
/// This enum consolidates all error conditions that can occur, from remote
/// catalog requests to storage operations and configuration issues. Variants
/// that wrap underlying errors from external crates use `#[from]` for
/// automatic conversion.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A catalog request failed.
    ///
    /// Covers transport failures, non-success HTTP statuses, and malformed
    /// response bodies. All three surface as this single uniform outcome;
    /// requests are never retried automatically.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// Storage operation failed.
    ///
    /// Occurs when the saved-events file cannot be written. Unreadable or
    /// corrupt storage is not an error; it is treated as an empty list.
    #[error("storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    ///
    /// Occurs when the worker thread has shut down and a message can no
    /// longer be delivered.
    #[error("worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values (notably the API key) are
    /// missing or malformed. Detected at startup and surfaced once via a
    /// notification; not fatal.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for eventfinder operations.
pub type Result<T> = std::result::Result<T, Error>;
