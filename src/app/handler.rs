//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input, timer
//! ticks, and worker responses, translating them into state changes and
//! action sequences. It is the only place application state is mutated.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive from the terminal loop or the worker channel
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! The returned `bool` reports whether the mutation is visible, so the main
//! loop can skip redundant repaints.
//!
//! # Stale Response Handling
//!
//! Search and detail responses carry the sequence number of the request that
//! produced them. A response whose sequence differs from the latest one the
//! state issued is dropped without touching state, so results from a
//! superseded search can never appear after a newer search completed.

use crate::app::{Action, AppState};
use crate::app::modes::{InputMode, PaneFocus, SortKey, ViewMode};
use crate::app::state::{ToastSeverity, CATEGORIES};
use crate::domain::error::Result;
use crate::domain::SavedEvent;
use crate::worker::{WorkerMessage, WorkerResponse};
use std::time::Instant;

/// Events triggered by user input, the tick timer, or worker responses.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// First event after startup: loads the saved list and issues the
    /// initial unfiltered search.
    Initialize,

    /// Periodic timer event; expires toasts.
    Tick,

    /// Exits the application.
    Quit,

    /// Moves the cursor down in the focused pane (wraps to top).
    KeyDown,
    /// Moves the cursor up in the focused pane (wraps to bottom).
    KeyUp,

    /// Moves focus between the results pane and the saved panel.
    SwitchPane,

    /// Toggles between grid and list layout without re-fetching.
    ToggleView,

    /// Applies a sort order to the current and all future result sets.
    SortBy(SortKey),

    /// Advances the category filter to the next entry and re-searches.
    CycleCategory,

    /// Enters keyword editing mode, seeding the buffer with the committed
    /// keyword.
    KeywordMode,

    /// Enters date editing mode, seeding the buffer with the committed date.
    DateMode,

    /// Appends a character to the active input buffer.
    Char(char),
    /// Removes the last character from the active input buffer.
    Backspace,
    /// Commits the active input buffer and re-searches.
    SubmitInput,
    /// Abandons the edit, keeping the previously committed filter.
    CancelInput,

    /// Saves the selected event (or the open overlay's event).
    SaveSelected,

    /// Removes the selected event from the saved list.
    RemoveSelected,

    /// Opens the detail overlay for the selected result.
    ShowDetails,

    /// Closes the detail overlay.
    CloseOverlay,

    /// Re-runs the current search with unchanged filters.
    Refresh,

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the screen needs repainting, and the
/// side effects the main loop must run.
///
/// # Errors
///
/// Currently infallible; the `Result` return keeps the signature stable for
/// handlers that need to propagate failures.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = discriminant_name(event)).entered();

    match event {
        Event::Initialize => {
            let mut actions = vec![Action::PostToWorker(WorkerMessage::LoadSaved)];
            if state.api_key_present {
                actions.extend(start_search(state));
            } else {
                tracing::warn!("no API key configured, skipping initial search");
                state.show_toast(
                    "No API key configured. Set EVENTFINDER_API_KEY.",
                    ToastSeverity::Error,
                );
            }
            Ok((true, actions))
        }

        Event::Tick => {
            let expired = state.clear_expired_toast(Instant::now());
            Ok((expired, vec![]))
        }

        Event::Quit => Ok((false, vec![Action::Quit])),

        Event::KeyDown => {
            if state.overlay.is_some() {
                return Ok((false, vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.overlay.is_some() {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }

        Event::SwitchPane => {
            state.pane = match state.pane {
                PaneFocus::Results => PaneFocus::Saved,
                PaneFocus::Saved => PaneFocus::Results,
            };
            Ok((true, vec![]))
        }

        Event::ToggleView => {
            state.view_mode = match state.view_mode {
                ViewMode::Grid => ViewMode::List,
                ViewMode::List => ViewMode::Grid,
            };
            tracing::debug!(view_mode = ?state.view_mode, "view toggled");
            Ok((true, vec![]))
        }

        Event::SortBy(key) => {
            state.sort_key = Some(*key);
            state.apply_sort();
            tracing::debug!(sort = key.label(), "sort applied");
            Ok((true, vec![]))
        }

        Event::CycleCategory => {
            state.category_index = (state.category_index + 1) % CATEGORIES.len();
            tracing::debug!(category = state.category(), "category cycled");
            let actions = start_search(state);
            Ok((true, actions))
        }

        Event::KeywordMode => {
            state.input_mode = InputMode::Keyword;
            state.input_buffer = state.keyword.clone();
            Ok((true, vec![]))
        }

        Event::DateMode => {
            state.input_mode = InputMode::Date;
            state.input_buffer = state
                .date_filter
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            Ok((true, vec![]))
        }

        Event::Char(c) => {
            if state.input_mode == InputMode::Normal {
                return Ok((false, vec![]));
            }
            state.input_buffer.push(*c);
            Ok((true, vec![]))
        }

        Event::Backspace => {
            if state.input_mode == InputMode::Normal {
                return Ok((false, vec![]));
            }
            state.input_buffer.pop();
            Ok((true, vec![]))
        }

        Event::SubmitInput => match state.input_mode {
            InputMode::Normal => Ok((false, vec![])),
            InputMode::Keyword => {
                state.keyword = state.input_buffer.clone();
                state.input_mode = InputMode::Normal;
                tracing::debug!(keyword = %state.keyword, "keyword committed");
                let actions = start_search(state);
                Ok((true, actions))
            }
            InputMode::Date => {
                let raw = state.input_buffer.trim();
                if raw.is_empty() {
                    state.date_filter = None;
                } else {
                    match chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                        Ok(date) => state.date_filter = Some(date),
                        Err(_) => {
                            state.show_toast("Invalid date. Use YYYY-MM-DD.", ToastSeverity::Error);
                            return Ok((true, vec![]));
                        }
                    }
                }
                state.input_mode = InputMode::Normal;
                tracing::debug!(date = ?state.date_filter, "date filter committed");
                let actions = start_search(state);
                Ok((true, actions))
            }
        },

        Event::CancelInput => {
            if state.input_mode == InputMode::Normal {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Normal;
            state.input_buffer.clear();
            Ok((true, vec![]))
        }

        Event::SaveSelected => {
            let to_save = if let Some(detail) = &state.overlay {
                Some(SavedEvent::from_summary(&detail.summary))
            } else if state.pane == PaneFocus::Results {
                state.selected_event().map(SavedEvent::from_summary)
            } else {
                None
            };

            let Some(event) = to_save else {
                return Ok((false, vec![]));
            };

            tracing::debug!(event_id = %event.id, "saving event");
            Ok((false, vec![Action::PostToWorker(WorkerMessage::SaveEvent { event })]))
        }

        Event::RemoveSelected => {
            let id = match state.pane {
                PaneFocus::Saved => state.selected_saved().map(|e| e.id.clone()),
                PaneFocus::Results => state
                    .selected_event()
                    .filter(|e| state.is_saved(&e.id))
                    .map(|e| e.id.clone()),
            };

            let Some(id) = id else {
                return Ok((false, vec![]));
            };

            tracing::debug!(event_id = %id, "removing saved event");
            Ok((false, vec![Action::PostToWorker(WorkerMessage::RemoveEvent { id })]))
        }

        Event::ShowDetails => {
            if state.overlay.is_some() || state.pane != PaneFocus::Results {
                return Ok((false, vec![]));
            }
            let Some(event) = state.selected_event() else {
                return Ok((false, vec![]));
            };

            let id = event.id.clone();
            let seq = state.begin_detail();
            tracing::debug!(event_id = %id, seq, "fetching details");
            Ok((false, vec![Action::PostToWorker(WorkerMessage::FetchDetail { seq, id })]))
        }

        Event::CloseOverlay => {
            if state.overlay.take().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, vec![]))
        }

        Event::Refresh => {
            let actions = start_search(state);
            Ok((true, actions))
        }

        Event::WorkerResponse(response) => handle_worker_response(state, response),
    }
}

/// Applies a worker response to state, discarding stale sequenced responses.
fn handle_worker_response(
    state: &mut AppState,
    response: &WorkerResponse,
) -> Result<(bool, Vec<Action>)> {
    match response {
        WorkerResponse::SearchCompleted { seq, events } => {
            if *seq != state.search_seq {
                tracing::debug!(seq, latest = state.search_seq, "discarding stale search response");
                return Ok((false, vec![]));
            }
            state.loading = false;
            state.apply_results(events.clone());
            Ok((true, vec![]))
        }

        WorkerResponse::SearchFailed { seq, message } => {
            if *seq != state.search_seq {
                tracing::debug!(seq, latest = state.search_seq, "discarding stale search failure");
                return Ok((false, vec![]));
            }
            state.loading = false;
            state.apply_results(vec![]);
            state.show_toast(message.clone(), ToastSeverity::Error);
            Ok((true, vec![]))
        }

        WorkerResponse::DetailLoaded { seq, detail } => {
            if *seq != state.detail_seq {
                tracing::debug!(seq, latest = state.detail_seq, "discarding stale detail response");
                return Ok((false, vec![]));
            }
            state.overlay = Some(detail.clone());
            Ok((true, vec![]))
        }

        WorkerResponse::DetailFailed { seq, message } => {
            if *seq != state.detail_seq {
                return Ok((false, vec![]));
            }
            state.show_toast(message.clone(), ToastSeverity::Error);
            Ok((true, vec![]))
        }

        WorkerResponse::SaveCompleted { events, already_saved } => {
            state.set_saved(events.clone());
            if *already_saved {
                state.show_toast("Already in your saved events.", ToastSeverity::Info);
            } else {
                state.show_toast("Event saved.", ToastSeverity::Success);
            }
            Ok((true, vec![]))
        }

        WorkerResponse::RemoveCompleted { events } => {
            state.set_saved(events.clone());
            state.show_toast("Event removed.", ToastSeverity::Info);
            Ok((true, vec![]))
        }

        WorkerResponse::SavedLoaded { events } => {
            state.set_saved(events.clone());
            Ok((true, vec![]))
        }

        WorkerResponse::Error { message } => {
            tracing::error!(message = %message, "worker error");
            state.show_toast(message.clone(), ToastSeverity::Error);
            Ok((true, vec![]))
        }
    }
}

/// Issues a new sequenced search for the committed filters.
///
/// Without an API key no request is sent; the user gets the configuration
/// hint instead of a guaranteed failure.
fn start_search(state: &mut AppState) -> Vec<Action> {
    if !state.api_key_present {
        state.show_toast(
            "No API key configured. Set EVENTFINDER_API_KEY.",
            ToastSeverity::Error,
        );
        return vec![];
    }

    let seq = state.begin_search();
    let params = state.current_params();
    tracing::debug!(seq, "search issued");
    vec![Action::PostToWorker(WorkerMessage::Search { seq, params })]
}

/// Short name of the event variant for tracing spans, without payload noise.
const fn discriminant_name(event: &Event) -> &'static str {
    match event {
        Event::Initialize => "Initialize",
        Event::Tick => "Tick",
        Event::Quit => "Quit",
        Event::KeyDown => "KeyDown",
        Event::KeyUp => "KeyUp",
        Event::SwitchPane => "SwitchPane",
        Event::ToggleView => "ToggleView",
        Event::SortBy(_) => "SortBy",
        Event::CycleCategory => "CycleCategory",
        Event::KeywordMode => "KeywordMode",
        Event::DateMode => "DateMode",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::SubmitInput => "SubmitInput",
        Event::CancelInput => "CancelInput",
        Event::SaveSelected => "SaveSelected",
        Event::RemoveSelected => "RemoveSelected",
        Event::ShowDetails => "ShowDetails",
        Event::CloseOverlay => "CloseOverlay",
        Event::Refresh => "Refresh",
        Event::WorkerResponse(_) => "WorkerResponse",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EventDetail, EventSummary};
    use crate::ui::theme::Theme;

    fn event_summary(id: &str, name: &str) -> EventSummary {
        EventSummary {
            id: id.to_string(),
            name: name.to_string(),
            local_date: "2026-09-01".to_string(),
            local_time: None,
            images: vec![],
            venue: None,
            category: Some("Music".to_string()),
            popularity: None,
            url: format!("https://catalog.example/event/{id}"),
            price_range: None,
        }
    }

    fn state() -> AppState {
        AppState::new(Theme::default(), true)
    }

    fn search_seq(actions: &[Action]) -> u64 {
        match &actions[0] {
            Action::PostToWorker(WorkerMessage::Search { seq, .. }) => *seq,
            other => panic!("expected a search action, got {other:?}"),
        }
    }

    #[test]
    fn initialize_loads_saved_and_searches() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Initialize).unwrap();

        assert_eq!(actions[0], Action::PostToWorker(WorkerMessage::LoadSaved));
        assert!(matches!(
            actions[1],
            Action::PostToWorker(WorkerMessage::Search { .. })
        ));
        assert!(state.loading);
    }

    #[test]
    fn initialize_without_api_key_skips_search_and_warns() {
        let mut state = AppState::new(Theme::default(), false);
        let (_, actions) = handle_event(&mut state, &Event::Initialize).unwrap();

        assert_eq!(actions, vec![Action::PostToWorker(WorkerMessage::LoadSaved)]);
        assert!(state.toast.is_some());
    }

    #[test]
    fn fresh_search_response_replaces_results() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Refresh).unwrap();
        let seq = search_seq(&actions);

        let response = WorkerResponse::SearchCompleted {
            seq,
            events: vec![event_summary("1", "Concert")],
        };
        let (render, _) = handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();

        assert!(render);
        assert!(!state.loading);
        assert_eq!(state.events.len(), 1);
    }

    #[test]
    fn stale_search_response_is_discarded() {
        let mut state = state();
        let (_, first) = handle_event(&mut state, &Event::Refresh).unwrap();
        let stale_seq = search_seq(&first);
        handle_event(&mut state, &Event::Refresh).unwrap();

        let response = WorkerResponse::SearchCompleted {
            seq: stale_seq,
            events: vec![event_summary("old", "Stale")],
        };
        let (render, _) = handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();

        assert!(!render);
        assert!(state.events.is_empty());
        assert!(state.loading);
    }

    #[test]
    fn search_failure_clears_results_and_toasts() {
        let mut state = state();
        state.apply_results(vec![event_summary("1", "Old Result")]);
        let (_, actions) = handle_event(&mut state, &Event::Refresh).unwrap();
        let seq = search_seq(&actions);

        let response = WorkerResponse::SearchFailed { seq, message: "Couldn't load events.".to_string() };
        handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();

        assert!(state.events.is_empty());
        let toast = state.toast.unwrap();
        assert_eq!(toast.severity, ToastSeverity::Error);
    }

    #[test]
    fn cycle_category_advances_and_searches() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::CycleCategory).unwrap();

        assert_eq!(state.category(), "Music");
        assert_eq!(actions.len(), 1);
        assert!(matches!(
            actions[0],
            Action::PostToWorker(WorkerMessage::Search { .. })
        ));
    }

    #[test]
    fn keyword_edit_commits_on_submit() {
        let mut state = state();
        handle_event(&mut state, &Event::KeywordMode).unwrap();
        for c in "jazz".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        let (_, actions) = handle_event(&mut state, &Event::SubmitInput).unwrap();

        assert_eq!(state.keyword, "jazz");
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn cancel_keeps_previous_keyword() {
        let mut state = state();
        state.keyword = "rock".to_string();
        handle_event(&mut state, &Event::KeywordMode).unwrap();
        handle_event(&mut state, &Event::Char('x')).unwrap();
        handle_event(&mut state, &Event::CancelInput).unwrap();

        assert_eq!(state.keyword, "rock");
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn invalid_date_stays_in_edit_mode_with_error() {
        let mut state = state();
        handle_event(&mut state, &Event::DateMode).unwrap();
        for c in "not-a-date".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        let (_, actions) = handle_event(&mut state, &Event::SubmitInput).unwrap();

        assert!(actions.is_empty());
        assert_eq!(state.input_mode, InputMode::Date);
        assert!(state.toast.is_some());
        assert!(state.date_filter.is_none());
    }

    #[test]
    fn empty_date_clears_the_filter() {
        let mut state = state();
        state.date_filter = chrono::NaiveDate::from_ymd_opt(2026, 9, 1);
        handle_event(&mut state, &Event::DateMode).unwrap();
        state.input_buffer.clear();
        handle_event(&mut state, &Event::SubmitInput).unwrap();

        assert!(state.date_filter.is_none());
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn save_selected_posts_the_projection() {
        let mut state = state();
        state.apply_results(vec![event_summary("G5", "Open Air")]);

        let (_, actions) = handle_event(&mut state, &Event::SaveSelected).unwrap();

        match &actions[0] {
            Action::PostToWorker(WorkerMessage::SaveEvent { event }) => {
                assert_eq!(event.id, "G5");
                assert_eq!(event.name, "Open Air");
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn save_from_overlay_uses_overlay_event() {
        let mut state = state();
        state.overlay = Some(EventDetail {
            summary: event_summary("OV", "Overlay Event"),
            description: None,
        });

        let (_, actions) = handle_event(&mut state, &Event::SaveSelected).unwrap();
        match &actions[0] {
            Action::PostToWorker(WorkerMessage::SaveEvent { event }) => {
                assert_eq!(event.id, "OV");
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn duplicate_save_shows_info_toast() {
        let mut state = state();
        let response = WorkerResponse::SaveCompleted { events: vec![], already_saved: true };
        handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();

        let toast = state.toast.unwrap();
        assert_eq!(toast.severity, ToastSeverity::Info);
    }

    #[test]
    fn stale_detail_response_does_not_open_overlay() {
        let mut state = state();
        state.apply_results(vec![event_summary("1", "Concert")]);
        handle_event(&mut state, &Event::ShowDetails).unwrap();
        let stale = state.detail_seq;
        handle_event(&mut state, &Event::ShowDetails).unwrap();

        let response = WorkerResponse::DetailLoaded {
            seq: stale,
            detail: EventDetail { summary: event_summary("1", "Concert"), description: None },
        };
        let (render, _) = handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();

        assert!(!render);
        assert!(state.overlay.is_none());
    }

    #[test]
    fn detail_failure_leaves_results_intact() {
        let mut state = state();
        state.apply_results(vec![event_summary("1", "Concert")]);
        handle_event(&mut state, &Event::ShowDetails).unwrap();

        let response = WorkerResponse::DetailFailed {
            seq: state.detail_seq,
            message: "Couldn't load events.".to_string(),
        };
        handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();

        assert_eq!(state.events.len(), 1);
        assert!(state.toast.is_some());
    }

    #[test]
    fn remove_from_results_pane_requires_saved_event() {
        let mut state = state();
        state.apply_results(vec![event_summary("1", "Concert")]);

        let (_, actions) = handle_event(&mut state, &Event::RemoveSelected).unwrap();
        assert!(actions.is_empty());

        state.set_saved(vec![SavedEvent::from_summary(&event_summary("1", "Concert"))]);
        let (_, actions) = handle_event(&mut state, &Event::RemoveSelected).unwrap();
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::RemoveEvent { id: "1".to_string() })]
        );
    }

    #[test]
    fn quit_emits_quit_action() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::Quit).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::Quit]);
    }
}
