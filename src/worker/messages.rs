//! Message types for cross-thread communication with the worker.
//!
//! This module defines the request and response protocol between the UI
//! thread and the background worker that performs catalog fetches and
//! saved-list storage operations. Search and detail requests carry a
//! monotonically increasing sequence number; the UI discards any response
//! whose sequence is older than the latest request it issued, so a slow
//! superseded fetch can never overwrite fresher results.

use crate::api::SearchParams;
use crate::domain::{EventDetail, EventSummary, SavedEvent};

/// Messages sent from the UI thread to the worker thread.
///
/// Each variant corresponds to one blocking operation the worker performs
/// off the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerMessage {
    /// Run a catalog search with the given filters.
    Search {
        /// Sequence number of this request; echoed back in the response.
        seq: u64,
        params: SearchParams,
    },

    /// Fetch the full detail for one event id.
    FetchDetail {
        /// Sequence number of this request; echoed back in the response.
        seq: u64,
        id: String,
    },

    /// Append an event to the saved list (deduplicated by id).
    SaveEvent { event: SavedEvent },

    /// Remove an event from the saved list by id.
    RemoveEvent { id: String },

    /// Load the persisted saved list.
    LoadSaved,
}

/// Responses sent from the worker thread back to the UI thread.
///
/// Storage responses carry the full post-mutation list so the UI can redraw
/// the saved panel from the store's current contents without a second round
/// trip.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerResponse {
    /// A search completed; `events` replaces the current result set if `seq`
    /// is still the latest issued.
    SearchCompleted {
        seq: u64,
        events: Vec<EventSummary>,
    },

    /// A search failed with the uniform fetch-failure outcome.
    SearchFailed { seq: u64, message: String },

    /// An event detail arrived for the overlay.
    DetailLoaded { seq: u64, detail: EventDetail },

    /// A detail fetch failed; the current result set is left untouched.
    DetailFailed { seq: u64, message: String },

    /// A save completed. `already_saved` is true when the id was a duplicate
    /// and nothing was written.
    SaveCompleted {
        events: Vec<SavedEvent>,
        already_saved: bool,
    },

    /// A removal completed (silently, even if the id was unknown).
    RemoveCompleted { events: Vec<SavedEvent> },

    /// The persisted saved list was loaded at startup.
    SavedLoaded { events: Vec<SavedEvent> },

    /// A storage operation failed.
    Error { message: String },
}
