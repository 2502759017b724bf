//! View model types consumed by the renderer.
//!
//! The view model is the fully formatted, pre-windowed representation of one
//! frame. Every string in it is already truncated and placeholder-filled;
//! component renderers only position the cursor and apply colors. This keeps
//! layout decisions in `AppState::compute_viewmodel`, where they are
//! unit-testable without a terminal.

use crate::app::modes::ViewMode;
use crate::app::state::ToastSeverity;

/// Title bar contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Pre-formatted title including the result count.
    pub title: String,
}

/// Footer keybinding hints for the current mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Which filter field the user is currently editing, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditingField {
    Keyword,
    Date,
}

/// Filter bar contents: the committed filters, or the live buffer for the
/// field being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarInfo {
    pub keyword: String,
    pub date: String,
    pub category: String,
    pub sort: String,
    pub editing: Option<EditingField>,
}

/// One formatted result card. All fields are display-ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    pub name: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    /// Empty string when the catalog reported no classification.
    pub category: String,
    pub price: String,
    pub is_selected: bool,
    /// True when the event is in the saved list; rendered as a marker.
    pub is_saved: bool,
}

/// One entry in the saved-events side panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedItem {
    pub name: String,
    pub date: String,
    pub is_selected: bool,
}

/// Toast notification contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastInfo {
    pub message: String,
    pub severity: ToastSeverity,
}

/// Detail overlay contents, with placeholders already substituted for
/// unannounced fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayInfo {
    pub title: String,
    /// Preferred image URL, empty when the event has none.
    pub image: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub category: String,
    pub price: String,
    pub url: String,
    pub description: String,
}

/// Complete renderable representation of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct UiViewModel {
    pub header: HeaderInfo,
    pub filter_bar: FilterBarInfo,

    /// Visible window of result cards.
    pub cards: Vec<EventCard>,
    /// Index of the selected card within `cards`.
    pub selected_index: usize,
    pub view_mode: ViewMode,

    /// Visible window of the saved panel.
    pub saved_items: Vec<SavedItem>,
    /// True when the cursor lives in the saved panel.
    pub saved_focused: bool,

    /// Message shown in place of the result cards, when there are none.
    pub empty_state: Option<String>,
    /// True while a search is in flight; shows the loading indicator.
    pub loading: bool,

    pub toast: Option<ToastInfo>,
    pub overlay: Option<OverlayInfo>,
    pub footer: FooterInfo,
}
