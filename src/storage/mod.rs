//! Storage layer for the persisted saved-events list.
//!
//! This module provides the persistence abstraction for the user's saved
//! events: a small, insertion-ordered list unique by event id, kept as a
//! versioned JSON file with atomic writes.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation

pub mod backend;
pub mod json;

pub use backend::{AddOutcome, SavedEventStore};
pub use json::JsonStore;
