//! Event domain models.
//!
//! This module defines the core event types flowing through the application:
//! [`EventSummary`] for search results, [`EventDetail`] for the lazily fetched
//! detail view, and [`SavedEvent`] for the locally persisted bookmark list.
//! Summaries and details are created by deserializing a catalog response and
//! discarded once rendered; saved events live until the user removes them.

use serde::{Deserialize, Serialize};

/// Placeholder shown when an event has no announced start time or price.
pub const TBA: &str = "TBA";

/// An image attached to an event, tagged with an aspect-ratio hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventImage {
    /// Absolute URL of the image.
    pub url: String,

    /// Aspect-ratio hint as reported by the catalog (e.g. `"16_9"`, `"4_3"`).
    pub ratio: Option<String>,
}

/// Minimum/maximum ticket price pair. Either bound may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    /// Formats the range for display, e.g. `"$25.00 - $110.00"`.
    ///
    /// A single known bound renders alone; a fully unknown range renders as
    /// [`TBA`].
    #[must_use]
    pub fn display(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("${min:.2} - ${max:.2}"),
            (Some(min), None) => format!("${min:.2}"),
            (None, Some(max)) => format!("${max:.2}"),
            (None, None) => TBA.to_string(),
        }
    }
}

/// A single event as returned by the catalog search endpoint.
///
/// The identifier is stable and unique per event; `local_date` is required
/// (events without a start date are dropped during response mapping). All
/// other optional fields mirror what the catalog may omit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: String,
    pub name: String,

    /// Calendar start date in `YYYY-MM-DD` form, as reported by the catalog.
    pub local_date: String,

    /// Optional start time in `HH:MM:SS` form.
    pub local_time: Option<String>,

    pub images: Vec<EventImage>,
    pub venue: Option<String>,

    /// Primary classification segment (e.g. "Music", "Sports").
    pub category: Option<String>,

    /// Relative popularity score; absent scores sort as zero.
    pub popularity: Option<f64>,

    /// Detail-page URL on the catalog site.
    pub url: String,

    pub price_range: Option<PriceRange>,
}

impl EventSummary {
    /// Returns the preferred card image: the 16:9-tagged image if present,
    /// else the first image, else `None`.
    #[must_use]
    pub fn preferred_image(&self) -> Option<&str> {
        self.images
            .iter()
            .find(|img| img.ratio.as_deref() == Some("16_9"))
            .or_else(|| self.images.first())
            .map(|img| img.url.as_str())
    }

    /// Formats the start date for display, e.g. `"Sat, Jun 13 2026"`.
    ///
    /// Falls back to the raw `local_date` string if it does not parse as a
    /// calendar date.
    #[must_use]
    pub fn formatted_date(&self) -> String {
        chrono::NaiveDate::parse_from_str(&self.local_date, "%Y-%m-%d")
            .map_or_else(|_| self.local_date.clone(), |d| d.format("%a, %b %-d %Y").to_string())
    }

    /// Returns the start time for display, or [`TBA`] when unannounced.
    #[must_use]
    pub fn display_time(&self) -> &str {
        self.local_time.as_deref().unwrap_or(TBA)
    }
}

/// Full event detail: the summary fields plus a free-text description.
///
/// Fetched lazily per event id when the user opens the detail overlay; not
/// cached, so reopening the same event re-fetches.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetail {
    pub summary: EventSummary,
    pub description: Option<String>,
}

/// A user-curated bookmark persisted in local storage.
///
/// This is the minimal projection of an [`EventSummary`] the saved list
/// keeps: one chosen image URL instead of the full image set, and no
/// popularity or price data. Saved events are unique by `id` and rendered in
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedEvent {
    pub id: String,
    pub name: String,

    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,

    /// The preferred image chosen at save time, if the event had any.
    pub image_url: Option<String>,

    pub venue: Option<String>,
    pub category: Option<String>,

    /// Detail-page URL on the catalog site.
    pub url: String,
}

impl SavedEvent {
    /// Extracts the saved-event projection from a search result.
    #[must_use]
    pub fn from_summary(summary: &EventSummary) -> Self {
        Self {
            id: summary.id.clone(),
            name: summary.name.clone(),
            date: summary.local_date.clone(),
            image_url: summary.preferred_image().map(str::to_string),
            venue: summary.venue.clone(),
            category: summary.category.clone(),
            url: summary.url.clone(),
        }
    }

    /// Formats the date for display, matching [`EventSummary::formatted_date`].
    #[must_use]
    pub fn formatted_date(&self) -> String {
        chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_or_else(|_| self.date.clone(), |d| d.format("%a, %b %-d %Y").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_with_images(images: Vec<EventImage>) -> EventSummary {
        EventSummary {
            id: "ev1".to_string(),
            name: "Test Event".to_string(),
            local_date: "2026-06-13".to_string(),
            local_time: Some("19:30:00".to_string()),
            images,
            venue: Some("The Venue".to_string()),
            category: Some("Music".to_string()),
            popularity: Some(0.8),
            url: "https://example.com/ev1".to_string(),
            price_range: None,
        }
    }

    #[test]
    fn preferred_image_picks_16_9_when_present() {
        let summary = summary_with_images(vec![
            EventImage { url: "a.jpg".to_string(), ratio: Some("4_3".to_string()) },
            EventImage { url: "b.jpg".to_string(), ratio: Some("16_9".to_string()) },
        ]);
        assert_eq!(summary.preferred_image(), Some("b.jpg"));
    }

    #[test]
    fn preferred_image_falls_back_to_first() {
        let summary = summary_with_images(vec![
            EventImage { url: "a.jpg".to_string(), ratio: Some("4_3".to_string()) },
            EventImage { url: "b.jpg".to_string(), ratio: None },
        ]);
        assert_eq!(summary.preferred_image(), Some("a.jpg"));
    }

    #[test]
    fn preferred_image_is_none_without_images() {
        let summary = summary_with_images(vec![]);
        assert_eq!(summary.preferred_image(), None);
    }

    #[test]
    fn saved_projection_uses_preferred_image() {
        let summary = summary_with_images(vec![
            EventImage { url: "a.jpg".to_string(), ratio: None },
            EventImage { url: "b.jpg".to_string(), ratio: Some("16_9".to_string()) },
        ]);
        let saved = SavedEvent::from_summary(&summary);
        assert_eq!(saved.id, "ev1");
        assert_eq!(saved.image_url.as_deref(), Some("b.jpg"));
        assert_eq!(saved.date, "2026-06-13");
        assert_eq!(saved.url, "https://example.com/ev1");
    }

    #[test]
    fn price_range_display_handles_missing_bounds() {
        let full = PriceRange { min: Some(25.0), max: Some(110.0) };
        assert_eq!(full.display(), "$25.00 - $110.00");

        let open = PriceRange { min: Some(25.0), max: None };
        assert_eq!(open.display(), "$25.00");

        let unknown = PriceRange { min: None, max: None };
        assert_eq!(unknown.display(), TBA);
    }

    #[test]
    fn formatted_date_falls_back_to_raw_string() {
        let mut summary = summary_with_images(vec![]);
        summary.local_date = "someday".to_string();
        assert_eq!(summary.formatted_date(), "someday");
    }
}
