//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single source of truth for all
//! transient UI state: the current result list, the saved panel, filters,
//! selection, modes, and the active toast or overlay. The event handler
//! mutates it; the renderer only ever sees the [`UiViewModel`] computed from
//! a state snapshot.
//!
//! # State Components
//!
//! - **Events**: the displayed result list, post filter and sort
//! - **Saved**: the persisted bookmark list mirrored from the worker
//! - **Filters**: committed keyword, date, and category, plus the live input
//!   buffer while one of them is being edited
//! - **Selection**: one cursor per pane, clamped to list bounds
//! - **Sequencing**: monotonic request numbers used to discard stale worker
//!   responses
//!
//! # View Model Computation
//!
//! `compute_viewmodel` transforms state into a renderable representation,
//! handling card formatting, windowing centered on the selection, and the
//! empty, loading, toast, and overlay states.

use crate::api::SearchParams;
use crate::domain::{EventDetail, EventSummary, SavedEvent, TBA};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    EditingField, EventCard, FilterBarInfo, FooterInfo, HeaderInfo, OverlayInfo, SavedItem,
    ToastInfo, UiViewModel,
};
use super::modes::{InputMode, PaneFocus, SortKey, ViewMode};
use chrono::NaiveDate;
use std::time::{Duration, Instant};

/// Category filter cycle, in the order the `c` key walks through them.
///
/// The first entry is the "no restriction" sentinel; the rest are the
/// catalog's top-level classification segments.
pub const CATEGORIES: [&str; 6] = [
    "All",
    "Music",
    "Sports",
    "Arts & Theatre",
    "Film",
    "Miscellaneous",
];

/// How long a toast stays on screen before the tick handler clears it.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Severity of a toast notification, mapped to a theme color when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Error,
    Info,
}

/// A transient notification with its expiry time.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub severity: ToastSeverity,
    pub expires_at: Instant,
}

/// Central application state container.
///
/// Mutated only by the event handler; rendered only through
/// [`AppState::compute_viewmodel`]. A new toast replaces the previous one,
/// and a new overlay replaces the previous one; neither stacks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The displayed result list: the last completed search's events after
    /// the category re-check and the active sort.
    pub events: Vec<EventSummary>,

    /// The saved-events panel contents, mirrored from worker responses.
    pub saved: Vec<SavedEvent>,

    /// Cursor position within `events`.
    pub selected_index: usize,

    /// Cursor position within `saved`.
    pub saved_index: usize,

    /// Which pane the cursor currently lives in.
    pub pane: PaneFocus,

    pub input_mode: InputMode,
    pub view_mode: ViewMode,

    /// Active sort, re-applied to every new result set. `None` keeps the
    /// catalog's relevance order.
    pub sort_key: Option<SortKey>,

    /// Committed keyword filter. May be blank, which means no keyword.
    pub keyword: String,

    /// Live edit buffer while `input_mode` is `Keyword` or `Date`.
    pub input_buffer: String,

    /// Committed date filter.
    pub date_filter: Option<NaiveDate>,

    /// Index into [`CATEGORIES`] of the committed category filter.
    pub category_index: usize,

    /// True between issuing a search and receiving its response.
    pub loading: bool,

    pub toast: Option<Toast>,

    /// Detail overlay contents, when open.
    pub overlay: Option<EventDetail>,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// False when startup found no API key; searches are not issued and the
    /// user sees a configuration hint instead.
    pub api_key_present: bool,

    /// Monotonic request counter shared by searches and detail fetches.
    next_seq: u64,

    /// Sequence of the most recently issued search; responses with an older
    /// sequence are discarded.
    pub search_seq: u64,

    /// Sequence of the most recently issued detail fetch.
    pub detail_seq: u64,
}

impl AppState {
    /// Creates the initial application state.
    #[must_use]
    pub fn new(theme: Theme, api_key_present: bool) -> Self {
        Self {
            events: vec![],
            saved: vec![],
            selected_index: 0,
            saved_index: 0,
            pane: PaneFocus::Results,
            input_mode: InputMode::Normal,
            view_mode: ViewMode::Grid,
            sort_key: None,
            keyword: String::new(),
            input_buffer: String::new(),
            date_filter: None,
            category_index: 0,
            loading: false,
            toast: None,
            overlay: None,
            theme,
            api_key_present,
            next_seq: 0,
            search_seq: 0,
            detail_seq: 0,
        }
    }

    /// Returns the committed category label, e.g. `"All"` or `"Music"`.
    #[must_use]
    pub fn category(&self) -> &'static str {
        CATEGORIES[self.category_index % CATEGORIES.len()]
    }

    /// Returns the committed category when it restricts results, `None` for
    /// the `"All"` sentinel.
    #[must_use]
    pub fn active_category(&self) -> Option<&'static str> {
        if self.category_index % CATEGORIES.len() == 0 {
            None
        } else {
            Some(self.category())
        }
    }

    /// Builds the search parameters for the committed filters.
    #[must_use]
    pub fn current_params(&self) -> SearchParams {
        SearchParams {
            keyword: Some(self.keyword.clone()),
            date: self.date_filter,
            category: Some(self.category().to_string()),
        }
    }

    /// Allocates the sequence number for a new search and marks the state
    /// loading. Any in-flight search response with an older sequence will be
    /// discarded on arrival.
    pub fn begin_search(&mut self) -> u64 {
        self.next_seq += 1;
        self.search_seq = self.next_seq;
        self.loading = true;
        self.search_seq
    }

    /// Allocates the sequence number for a new detail fetch.
    pub fn begin_detail(&mut self) -> u64 {
        self.next_seq += 1;
        self.detail_seq = self.next_seq;
        self.detail_seq
    }

    /// Installs a fresh result set: re-checks the category filter, applies
    /// the active sort, and clamps the selection.
    ///
    /// The category re-check repeats what the server-side filter already did.
    /// The catalog occasionally returns events outside the requested segment,
    /// so events whose category does not match the committed filter are
    /// dropped here as well; with `"All"` selected everything passes.
    pub fn apply_results(&mut self, events: Vec<EventSummary>) {
        let _span = tracing::debug_span!(
            "apply_results",
            fetched = events.len(),
            category = self.category()
        )
        .entered();

        self.events = match self.active_category() {
            None => events,
            Some(category) => events
                .into_iter()
                .filter(|e| {
                    e.category
                        .as_deref()
                        .is_some_and(|c| c.eq_ignore_ascii_case(category))
                })
                .collect(),
        };

        self.apply_sort();
        self.clamp_selection();

        tracing::debug!(displayed = self.events.len(), "result set installed");
    }

    /// Re-sorts the displayed events by the active sort key.
    ///
    /// Sorts are stable, so ties keep their catalog order, and sorting twice
    /// with the same key changes nothing.
    pub fn apply_sort(&mut self) {
        match self.sort_key {
            None => {}
            Some(SortKey::Date) => {
                // ISO dates compare correctly as strings.
                self.events.sort_by(|a, b| a.local_date.cmp(&b.local_date));
            }
            Some(SortKey::Name) => {
                self.events
                    .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            }
            Some(SortKey::Popularity) => {
                self.events.sort_by(|a, b| {
                    let pa = a.popularity.unwrap_or(0.0);
                    let pb = b.popularity.unwrap_or(0.0);
                    pb.total_cmp(&pa)
                });
            }
        }
    }

    /// Moves the cursor in the focused pane down by one, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        match self.pane {
            PaneFocus::Results => {
                if !self.events.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.events.len();
                }
            }
            PaneFocus::Saved => {
                if !self.saved.is_empty() {
                    self.saved_index = (self.saved_index + 1) % self.saved.len();
                }
            }
        }
    }

    /// Moves the cursor in the focused pane up by one, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        match self.pane {
            PaneFocus::Results => {
                if !self.events.is_empty() {
                    self.selected_index = self
                        .selected_index
                        .checked_sub(1)
                        .unwrap_or(self.events.len() - 1);
                }
            }
            PaneFocus::Saved => {
                if !self.saved.is_empty() {
                    self.saved_index =
                        self.saved_index.checked_sub(1).unwrap_or(self.saved.len() - 1);
                }
            }
        }
    }

    /// Returns the selected search result, if any.
    #[must_use]
    pub fn selected_event(&self) -> Option<&EventSummary> {
        self.events.get(self.selected_index)
    }

    /// Returns the selected saved event, if any.
    #[must_use]
    pub fn selected_saved(&self) -> Option<&SavedEvent> {
        self.saved.get(self.saved_index)
    }

    /// True if the given event id is in the saved list.
    #[must_use]
    pub fn is_saved(&self, id: &str) -> bool {
        self.saved.iter().any(|e| e.id == id)
    }

    /// Replaces the saved list and clamps its cursor.
    pub fn set_saved(&mut self, saved: Vec<SavedEvent>) {
        self.saved = saved;
        self.clamp_selection();
    }

    /// Shows a toast, replacing any current one.
    pub fn show_toast(&mut self, message: impl Into<String>, severity: ToastSeverity) {
        self.toast = Some(Toast {
            message: message.into(),
            severity,
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    /// Clears the toast if it has expired. Returns true if one was cleared.
    pub fn clear_expired_toast(&mut self, now: Instant) -> bool {
        if self.toast.as_ref().is_some_and(|t| t.expires_at <= now) {
            self.toast = None;
            true
        } else {
            false
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self
            .selected_index
            .min(self.events.len().saturating_sub(1));
        self.saved_index = self.saved_index.min(self.saved.len().saturating_sub(1));
    }

    /// Computes a renderable view model from the current state and terminal
    /// dimensions.
    ///
    /// Handles card formatting, windowing of both panes centered on their
    /// cursors, and the header, filter bar, footer, empty-state, toast, and
    /// overlay contents. The renderer consumes the result verbatim.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UiViewModel {
        let available_rows = rows.saturating_sub(CHROME_ROWS);

        let capacity = match self.view_mode {
            ViewMode::Grid => (available_rows / GRID_CARD_ROWS).max(1) * 2,
            ViewMode::List => available_rows.max(1),
        };

        let (cards, selected_display_index) = self.compute_cards(capacity, cols);
        let saved_items = self.compute_saved_items(available_rows / SAVED_ITEM_ROWS);

        UiViewModel {
            header: self.compute_header(),
            filter_bar: self.compute_filter_bar(),
            cards,
            selected_index: selected_display_index,
            view_mode: self.view_mode,
            saved_items,
            saved_focused: self.pane == PaneFocus::Saved,
            empty_state: self.compute_empty_state(),
            loading: self.loading,
            toast: self.toast.as_ref().map(|t| ToastInfo {
                message: t.message.clone(),
                severity: t.severity,
            }),
            overlay: self.overlay.as_ref().map(Self::compute_overlay),
            footer: self.compute_footer(),
        }
    }

    /// Windows the result list around the cursor and formats each visible
    /// event as a card.
    fn compute_cards(&self, capacity: usize, cols: usize) -> (Vec<EventCard>, usize) {
        if self.events.is_empty() {
            return (vec![], 0);
        }

        let mut start = self.selected_index.saturating_sub(capacity / 2);
        let end = (start + capacity).min(self.events.len());
        if end - start < capacity && self.events.len() >= capacity {
            start = end.saturating_sub(capacity);
        }

        let name_width = match self.view_mode {
            ViewMode::Grid => cols.saturating_sub(SAVED_PANEL_COLS) / 2,
            ViewMode::List => cols.saturating_sub(SAVED_PANEL_COLS),
        }
        .saturating_sub(4);

        let cards = self.events[start..end]
            .iter()
            .enumerate()
            .map(|(relative_idx, event)| EventCard {
                name: truncate(&event.name, name_width),
                date: event.formatted_date(),
                time: event.display_time().to_string(),
                venue: event.venue.clone().unwrap_or_else(|| TBA.to_string()),
                category: event.category.clone().unwrap_or_default(),
                price: event
                    .price_range
                    .map_or_else(|| TBA.to_string(), |p| p.display()),
                is_selected: start + relative_idx == self.selected_index
                    && self.pane == PaneFocus::Results,
                is_saved: self.is_saved(&event.id),
            })
            .collect();

        (cards, self.selected_index - start)
    }

    fn compute_saved_items(&self, capacity: usize) -> Vec<SavedItem> {
        if self.saved.is_empty() {
            return vec![];
        }

        let capacity = capacity.max(1);
        let mut start = self.saved_index.saturating_sub(capacity / 2);
        let end = (start + capacity).min(self.saved.len());
        if end - start < capacity && self.saved.len() >= capacity {
            start = end.saturating_sub(capacity);
        }

        self.saved[start..end]
            .iter()
            .enumerate()
            .map(|(relative_idx, event)| SavedItem {
                name: truncate(&event.name, SAVED_PANEL_COLS - 4),
                date: event.formatted_date(),
                is_selected: start + relative_idx == self.saved_index
                    && self.pane == PaneFocus::Saved,
            })
            .collect()
    }

    fn compute_header(&self) -> HeaderInfo {
        let count = self.events.len();
        let noun = if count == 1 { "event" } else { "events" };
        HeaderInfo {
            title: format!(" eventfinder  |  {count} {noun} "),
        }
    }

    fn compute_filter_bar(&self) -> FilterBarInfo {
        let editing = match self.input_mode {
            InputMode::Normal => None,
            InputMode::Keyword => Some(EditingField::Keyword),
            InputMode::Date => Some(EditingField::Date),
        };

        let keyword = if self.input_mode == InputMode::Keyword {
            self.input_buffer.clone()
        } else {
            self.keyword.clone()
        };

        let date = if self.input_mode == InputMode::Date {
            self.input_buffer.clone()
        } else {
            self.date_filter
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };

        FilterBarInfo {
            keyword,
            date,
            category: self.category().to_string(),
            sort: self.sort_key.map_or("relevance", SortKey::label).to_string(),
            editing,
        }
    }

    fn compute_empty_state(&self) -> Option<String> {
        if self.loading || !self.events.is_empty() {
            return None;
        }
        if !self.api_key_present {
            return Some(
                "No API key configured. Set EVENTFINDER_API_KEY or add one to the config file."
                    .to_string(),
            );
        }
        Some("No events match your filters. Try a different keyword, date, or category.".to_string())
    }

    fn compute_overlay(detail: &EventDetail) -> OverlayInfo {
        let summary = &detail.summary;
        OverlayInfo {
            title: summary.name.clone(),
            image: summary.preferred_image().unwrap_or_default().to_string(),
            date: summary.formatted_date(),
            time: summary.display_time().to_string(),
            venue: summary.venue.clone().unwrap_or_else(|| TBA.to_string()),
            category: summary.category.clone().unwrap_or_else(|| TBA.to_string()),
            price: summary
                .price_range
                .map_or_else(|| TBA.to_string(), |p| p.display()),
            url: summary.url.clone(),
            description: detail
                .description
                .clone()
                .unwrap_or_else(|| "No description available.".to_string()),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.overlay.is_some() {
            "ESC: close  s: save  q: quit".to_string()
        } else {
            match (self.input_mode, self.pane) {
                (InputMode::Keyword, _) => {
                    "Enter: search  ESC: cancel  Type to edit keyword".to_string()
                }
                (InputMode::Date, _) => {
                    "Enter: apply (YYYY-MM-DD, empty clears)  ESC: cancel".to_string()
                }
                (InputMode::Normal, PaneFocus::Results) => {
                    "j/k: move  Enter: details  s: save  Tab: saved  /: keyword  f: date  c: category  1/2/3: sort  v: view  r: refresh  q: quit"
                        .to_string()
                }
                (InputMode::Normal, PaneFocus::Saved) => {
                    "j/k: move  d: remove  Tab: results  q: quit".to_string()
                }
            }
        };

        FooterInfo { keybindings }
    }
}

/// Rows consumed by header, filter bar, and footer.
const CHROME_ROWS: usize = 7;

/// Rows one grid card occupies, including its trailing blank line.
const GRID_CARD_ROWS: usize = 5;

/// Rows one saved-panel entry occupies.
const SAVED_ITEM_ROWS: usize = 2;

/// Columns reserved for the saved-events side panel.
pub const SAVED_PANEL_COLS: usize = 32;

/// Truncates to `max_width` characters, appending `...` when cut.
fn truncate(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    let keep = max_width.saturating_sub(3);
    let cut: String = text.chars().take(keep).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, name: &str, date: &str, popularity: Option<f64>) -> EventSummary {
        EventSummary {
            id: id.to_string(),
            name: name.to_string(),
            local_date: date.to_string(),
            local_time: None,
            images: vec![],
            venue: None,
            category: Some("Music".to_string()),
            popularity,
            url: format!("https://catalog.example/event/{id}"),
            price_range: None,
        }
    }

    fn state() -> AppState {
        AppState::new(Theme::default(), true)
    }

    #[test]
    fn sort_by_date_is_ascending_and_stable() {
        let mut state = state();
        state.sort_key = Some(SortKey::Date);
        state.apply_results(vec![
            event("B", "Beta", "2026-09-02", None),
            event("A", "Alpha", "2026-09-01", None),
            event("C", "Gamma", "2026-09-02", None),
        ]);

        let ids: Vec<&str> = state.events.iter().map(|e| e.id.as_str()).collect();
        // B and C tie on date and keep their original relative order.
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn sort_by_name_ignores_case() {
        let mut state = state();
        state.sort_key = Some(SortKey::Name);
        state.apply_results(vec![
            event("1", "zebra crossing", "2026-09-01", None),
            event("2", "Aardvark Night", "2026-09-01", None),
        ]);

        assert_eq!(state.events[0].id, "2");
    }

    #[test]
    fn sort_by_popularity_is_descending_with_missing_as_zero() {
        let mut state = state();
        state.sort_key = Some(SortKey::Popularity);
        state.apply_results(vec![
            event("low", "Low", "2026-09-01", Some(0.1)),
            event("none", "None", "2026-09-01", None),
            event("high", "High", "2026-09-01", Some(0.9)),
        ]);

        let ids: Vec<&str> = state.events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "low", "none"]);
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let mut state = state();
        state.sort_key = Some(SortKey::Name);
        state.apply_results(vec![
            event("1", "Beta", "2026-09-01", None),
            event("2", "Alpha", "2026-09-01", None),
        ]);
        let once = state.events.clone();
        state.apply_sort();
        assert_eq!(state.events, once);
    }

    #[test]
    fn all_category_passes_everything_through() {
        let mut state = state();
        assert_eq!(state.category(), "All");

        let mut uncategorized = event("1", "Mystery", "2026-09-01", None);
        uncategorized.category = None;
        state.apply_results(vec![uncategorized, event("2", "Show", "2026-09-01", None)]);

        assert_eq!(state.events.len(), 2);
    }

    #[test]
    fn concrete_category_drops_mismatched_and_uncategorized_events() {
        let mut state = state();
        state.category_index = 1; // Music
        let mut sports = event("s", "Match", "2026-09-01", None);
        sports.category = Some("Sports".to_string());
        let mut uncategorized = event("u", "Mystery", "2026-09-01", None);
        uncategorized.category = None;

        state.apply_results(vec![
            event("m", "Concert", "2026-09-01", None),
            sports,
            uncategorized,
        ]);

        let ids: Vec<&str> = state.events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["m"]);
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut state = state();
        state.apply_results(vec![
            event("1", "A", "2026-09-01", None),
            event("2", "B", "2026-09-01", None),
        ]);

        state.move_selection_up();
        assert_eq!(state.selected_index, 1);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn selection_clamps_when_results_shrink() {
        let mut state = state();
        state.apply_results(vec![
            event("1", "A", "2026-09-01", None),
            event("2", "B", "2026-09-01", None),
            event("3", "C", "2026-09-01", None),
        ]);
        state.selected_index = 2;

        state.apply_results(vec![event("1", "A", "2026-09-01", None)]);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn expired_toast_is_cleared_on_tick() {
        let mut state = state();
        state.show_toast("saved", ToastSeverity::Success);
        assert!(!state.clear_expired_toast(Instant::now()));
        assert!(state.clear_expired_toast(Instant::now() + TOAST_DURATION * 2));
        assert!(state.toast.is_none());
    }

    #[test]
    fn empty_results_produce_an_empty_state_message() {
        let mut state = state();
        state.apply_results(vec![]);
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.cards.is_empty());
        assert!(vm.empty_state.is_some());
    }

    #[test]
    fn loading_suppresses_the_empty_state() {
        let mut state = state();
        state.begin_search();
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.empty_state.is_none());
        assert!(vm.loading);
    }

    #[test]
    fn missing_api_key_shows_configuration_hint() {
        let state = AppState::new(Theme::default(), false);
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.empty_state.unwrap().contains("API key"));
    }

    #[test]
    fn sequence_numbers_increase_across_request_kinds() {
        let mut state = state();
        let s1 = state.begin_search();
        let d1 = state.begin_detail();
        let s2 = state.begin_search();
        assert!(s1 < d1 && d1 < s2);
        assert_eq!(state.search_seq, s2);
    }

    #[test]
    fn viewmodel_windows_cards_around_the_selection() {
        let mut state = state();
        state.view_mode = ViewMode::List;
        state.apply_results(
            (0..50)
                .map(|i| event(&format!("{i}"), &format!("Event {i}"), "2026-09-01", None))
                .collect(),
        );
        state.selected_index = 40;

        let vm = state.compute_viewmodel(24, 120);
        assert!(vm.cards.len() < 50);
        assert!(vm.cards[vm.selected_index].is_selected);
        assert_eq!(vm.cards[vm.selected_index].name, "Event 40");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate("A Very Long Event Name", 10), "A Very ...");
        assert_eq!(truncate("Short", 10), "Short");
    }
}
