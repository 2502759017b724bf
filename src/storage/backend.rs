//! Storage backend abstraction.
//!
//! This module defines the [`SavedEventStore`] trait that abstracts over the
//! persistence backend for the saved-events list. The trait is minimal and
//! maps directly to the three operations the worker performs; it is not a
//! generic ORM.

use crate::domain::{Result, SavedEvent};

/// Outcome of an [`SavedEventStore::add`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The event was appended and persisted.
    Added,

    /// An entry with the same identifier already exists; nothing was written.
    /// The caller surfaces this as an "already saved" notice.
    AlreadySaved,
}

/// Abstraction over the saved-events persistence backend.
///
/// Implementations persist an insertion-ordered list unique by event id. The
/// store is owned by the worker thread, so all access is serialized through
/// its message queue.
pub trait SavedEventStore: Send {
    /// Appends an event unless its id is already present.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-back fails.
    fn add(&mut self, event: SavedEvent) -> Result<AddOutcome>;

    /// Removes the event with the given id. Removing an unknown id is a
    /// silent no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-back fails.
    fn remove(&mut self, id: &str) -> Result<()>;

    /// Returns the current list in insertion order. Missing or corrupt
    /// storage reads as an empty list, never an error.
    fn list(&self) -> Vec<SavedEvent>;
}
