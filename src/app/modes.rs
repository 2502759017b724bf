//! Input, view, and sort mode types for the application.
//!
//! This module defines the small state machine enums that control how key
//! presses are interpreted and how the result list is presented. They carry
//! no data beyond the discriminant; all associated state (the live input
//! buffer, the committed filters) lives on `AppState`.

/// Current input handling mode.
///
/// Determines whether key presses navigate the lists or edit a filter field,
/// and which footer hints are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    Normal,

    /// Editing the keyword filter; printable keys append to the input buffer.
    Keyword,

    /// Editing the date filter as a `YYYY-MM-DD` string.
    Date,
}

/// Presentation layout for the results pane.
///
/// Switching layouts never re-fetches; the same result list is re-rendered
/// in the other shape with the selection preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Two-column card grid.
    Grid,

    /// Single-column rows, one event per row.
    List,
}

/// Sort order applied to the current result list.
///
/// Sorting is client-side and stable: ties keep the catalog's original
/// relative order. The chosen key persists across searches and is re-applied
/// to each new result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending by start date (`YYYY-MM-DD` strings compare lexically).
    Date,

    /// Ascending by event name, case-insensitive.
    Name,

    /// Descending by popularity score; events without a score sort as zero.
    Popularity,
}

impl SortKey {
    /// Short label for the filter bar, e.g. `"date"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Name => "name",
            Self::Popularity => "popularity",
        }
    }
}

/// Which pane the selection cursor lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneFocus {
    /// The search results pane.
    Results,

    /// The saved-events side panel.
    Saved,
}
