//! Background worker that owns all I/O.
//!
//! The worker thread is the only place catalog requests and storage writes
//! happen. It owns the HTTP client and the saved-events store outright, so
//! store access is serialized by construction: mutations arrive one at a time
//! through the message queue and are applied in order.

use crate::api::CatalogClient;
use crate::domain::Error;
use crate::storage::{AddOutcome, SavedEventStore};
use crate::worker::messages::{WorkerMessage, WorkerResponse};
use std::sync::mpsc::{Receiver, Sender};

/// Uniform user-facing message for any failed catalog fetch.
///
/// Transport errors, non-success statuses, and malformed responses all
/// collapse to this one string; the distinguishing detail goes to the trace
/// log only.
const FETCH_FAILED: &str = "Couldn't load events. Check your connection and try again.";

/// The background worker servicing [`WorkerMessage`]s.
///
/// `client` is `None` when no API key was configured at startup; searches
/// then fail immediately with a configuration hint instead of issuing a
/// request that would be rejected anyway.
pub struct EventWorker {
    client: Option<CatalogClient>,
    store: Box<dyn SavedEventStore>,
}

impl EventWorker {
    #[must_use]
    pub fn new(client: Option<CatalogClient>, store: Box<dyn SavedEventStore>) -> Self {
        Self { client, store }
    }

    /// Processes one message and produces its response.
    ///
    /// Every message yields exactly one response; failures are reported as
    /// response variants, never panics, so the UI loop always hears back.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        match message {
            WorkerMessage::Search { seq, params } => {
                let _span = tracing::debug_span!("worker_search", seq).entered();
                match self.client_ref() {
                    Err(e) => {
                        tracing::warn!(error = %e, "search rejected");
                        WorkerResponse::SearchFailed { seq, message: e.to_string() }
                    }
                    Ok(client) => match client.fetch_list(&params) {
                        Ok(events) => WorkerResponse::SearchCompleted { seq, events },
                        Err(e) => {
                            tracing::warn!(error = %e, "search failed");
                            WorkerResponse::SearchFailed { seq, message: FETCH_FAILED.to_string() }
                        }
                    },
                }
            }

            WorkerMessage::FetchDetail { seq, id } => {
                let _span = tracing::debug_span!("worker_detail", seq, event_id = %id).entered();
                match self.client_ref() {
                    Err(e) => {
                        tracing::warn!(error = %e, "detail fetch rejected");
                        WorkerResponse::DetailFailed { seq, message: e.to_string() }
                    }
                    Ok(client) => match client.fetch_detail(&id) {
                        Ok(detail) => WorkerResponse::DetailLoaded { seq, detail },
                        Err(e) => {
                            tracing::warn!(error = %e, "detail fetch failed");
                            WorkerResponse::DetailFailed { seq, message: FETCH_FAILED.to_string() }
                        }
                    },
                }
            }

            WorkerMessage::SaveEvent { event } => match self.store.add(event) {
                Ok(outcome) => WorkerResponse::SaveCompleted {
                    events: self.store.list(),
                    already_saved: outcome == AddOutcome::AlreadySaved,
                },
                Err(e) => {
                    tracing::error!(error = %e, "failed to save event");
                    WorkerResponse::Error { message: format!("Couldn't save event: {e}") }
                }
            },

            WorkerMessage::RemoveEvent { id } => match self.store.remove(&id) {
                Ok(()) => WorkerResponse::RemoveCompleted { events: self.store.list() },
                Err(e) => {
                    tracing::error!(error = %e, "failed to remove event");
                    WorkerResponse::Error { message: format!("Couldn't remove event: {e}") }
                }
            },

            WorkerMessage::LoadSaved => WorkerResponse::SavedLoaded { events: self.store.list() },
        }
    }

    /// Runs the worker loop until the sending side hangs up.
    ///
    /// A dead response channel also ends the loop; both ends closing is the
    /// normal shutdown path when the UI thread exits.
    pub fn run(mut self, rx: Receiver<WorkerMessage>, tx: Sender<WorkerResponse>) {
        tracing::debug!("worker thread started");

        while let Ok(message) = rx.recv() {
            tracing::trace!(?message, "worker received message");
            let response = self.handle_message(message);
            if tx.send(response).is_err() {
                break;
            }
        }

        tracing::debug!("worker thread exiting");
    }

    fn client_ref(&self) -> crate::domain::Result<&CatalogClient> {
        self.client
            .as_ref()
            .ok_or_else(|| Error::Config("No API key configured. Set EVENTFINDER_API_KEY.".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Result, SavedEvent};

    /// In-memory store double; mirrors the JSON backend's dedupe semantics.
    struct MemStore {
        events: Vec<SavedEvent>,
        fail_writes: bool,
    }

    impl MemStore {
        fn new() -> Self {
            Self { events: Vec::new(), fail_writes: false }
        }
    }

    impl SavedEventStore for MemStore {
        fn add(&mut self, event: SavedEvent) -> Result<AddOutcome> {
            if self.fail_writes {
                return Err(Error::Storage("disk full".to_string()));
            }
            if self.events.iter().any(|e| e.id == event.id) {
                return Ok(AddOutcome::AlreadySaved);
            }
            self.events.push(event);
            Ok(AddOutcome::Added)
        }

        fn remove(&mut self, id: &str) -> Result<()> {
            if self.fail_writes {
                return Err(Error::Storage("disk full".to_string()));
            }
            self.events.retain(|e| e.id != id);
            Ok(())
        }

        fn list(&self) -> Vec<SavedEvent> {
            self.events.clone()
        }
    }

    fn saved(id: &str) -> SavedEvent {
        SavedEvent {
            id: id.to_string(),
            name: format!("Event {id}"),
            date: "2026-09-01".to_string(),
            image_url: None,
            venue: None,
            category: None,
            url: format!("https://catalog.example/event/{id}"),
        }
    }

    fn worker_without_client() -> EventWorker {
        EventWorker::new(None, Box::new(MemStore::new()))
    }

    #[test]
    fn save_reports_full_list_and_dedupe_flag() {
        let mut worker = worker_without_client();

        let first = worker.handle_message(WorkerMessage::SaveEvent { event: saved("A") });
        assert_eq!(
            first,
            WorkerResponse::SaveCompleted { events: vec![saved("A")], already_saved: false }
        );

        let second = worker.handle_message(WorkerMessage::SaveEvent { event: saved("A") });
        assert_eq!(
            second,
            WorkerResponse::SaveCompleted { events: vec![saved("A")], already_saved: true }
        );
    }

    #[test]
    fn remove_reports_remaining_list() {
        let mut worker = worker_without_client();
        worker.handle_message(WorkerMessage::SaveEvent { event: saved("A") });
        worker.handle_message(WorkerMessage::SaveEvent { event: saved("B") });

        let response = worker.handle_message(WorkerMessage::RemoveEvent { id: "A".to_string() });
        assert_eq!(response, WorkerResponse::RemoveCompleted { events: vec![saved("B")] });
    }

    #[test]
    fn load_saved_returns_current_list() {
        let mut worker = worker_without_client();
        worker.handle_message(WorkerMessage::SaveEvent { event: saved("A") });

        let response = worker.handle_message(WorkerMessage::LoadSaved);
        assert_eq!(response, WorkerResponse::SavedLoaded { events: vec![saved("A")] });
    }

    #[test]
    fn storage_failure_surfaces_as_error_response() {
        let mut worker = EventWorker::new(
            None,
            Box::new(MemStore { events: Vec::new(), fail_writes: true }),
        );

        let response = worker.handle_message(WorkerMessage::SaveEvent { event: saved("A") });
        assert!(matches!(response, WorkerResponse::Error { .. }));
    }

    #[test]
    fn search_without_api_key_fails_with_config_hint() {
        let mut worker = worker_without_client();

        let response = worker.handle_message(WorkerMessage::Search {
            seq: 7,
            params: crate::api::SearchParams::default(),
        });

        match response {
            WorkerResponse::SearchFailed { seq, message } => {
                assert_eq!(seq, 7);
                assert!(message.contains("API key"));
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn run_loop_answers_until_hangup() {
        let (msg_tx, msg_rx) = std::sync::mpsc::channel();
        let (resp_tx, resp_rx) = std::sync::mpsc::channel();

        let handle = std::thread::spawn(move || {
            worker_without_client().run(msg_rx, resp_tx);
        });

        msg_tx.send(WorkerMessage::LoadSaved).unwrap();
        assert_eq!(resp_rx.recv().unwrap(), WorkerResponse::SavedLoaded { events: vec![] });

        drop(msg_tx);
        handle.join().unwrap();
    }
}
