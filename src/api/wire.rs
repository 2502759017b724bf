//! Wire-format types for the events catalog API.
//!
//! These serde structs mirror the catalog's JSON response shape and are kept
//! separate from the domain models, which carry only the fields the
//! application actually uses. Conversion drops events that lack an id, a
//! name, or a start date.

use crate::domain::{EventDetail, EventImage, EventSummary, PriceRange};
use serde::Deserialize;

/// Top-level list response. Events live at `_embedded.events`; a response
/// without an embedded collection is a valid empty result, not an error.
#[derive(Debug, Deserialize)]
pub struct ListResponse {
    #[serde(rename = "_embedded")]
    embedded: Option<EmbeddedEvents>,
}

impl ListResponse {
    /// Extracts the ordered event summaries, skipping malformed entries.
    #[must_use]
    pub fn into_summaries(self) -> Vec<EventSummary> {
        self.embedded
            .map(|e| e.events.into_iter().filter_map(EventDoc::into_summary).collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct EmbeddedEvents {
    #[serde(default)]
    events: Vec<EventDoc>,
}

/// A single event document, shared by the list and detail endpoints.
#[derive(Debug, Deserialize)]
pub struct EventDoc {
    id: Option<String>,
    name: Option<String>,
    url: Option<String>,

    #[serde(default)]
    images: Vec<ImageDoc>,

    dates: Option<DatesDoc>,

    #[serde(rename = "_embedded")]
    embedded: Option<EmbeddedVenues>,

    #[serde(default)]
    classifications: Vec<ClassificationDoc>,

    #[serde(rename = "priceRanges", default)]
    price_ranges: Vec<PriceRangeDoc>,

    popularity: Option<f64>,

    /// Present on the detail endpoint only.
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImageDoc {
    url: String,
    ratio: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DatesDoc {
    start: Option<StartDoc>,
}

#[derive(Debug, Deserialize)]
struct StartDoc {
    #[serde(rename = "localDate")]
    local_date: Option<String>,
    #[serde(rename = "localTime")]
    local_time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EmbeddedVenues {
    #[serde(default)]
    venues: Vec<VenueDoc>,
}

#[derive(Debug, Deserialize)]
struct VenueDoc {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ClassificationDoc {
    segment: Option<SegmentDoc>,
}

#[derive(Debug, Deserialize)]
struct SegmentDoc {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PriceRangeDoc {
    min: Option<f64>,
    max: Option<f64>,
}

impl EventDoc {
    /// Converts the document into a domain summary.
    ///
    /// Returns `None` when the id, name, or start date is missing; the start
    /// date is required by the data model and such entries are dropped rather
    /// than surfaced as errors.
    pub fn into_summary(self) -> Option<EventSummary> {
        let id = self.id?;
        let name = self.name?;
        let start = self.dates.and_then(|d| d.start)?;
        let local_date = start.local_date?;

        let venue = self
            .embedded
            .and_then(|e| e.venues.into_iter().next())
            .and_then(|v| v.name);

        let category = self
            .classifications
            .into_iter()
            .next()
            .and_then(|c| c.segment)
            .and_then(|s| s.name);

        let price_range = self
            .price_ranges
            .into_iter()
            .next()
            .map(|p| PriceRange { min: p.min, max: p.max });

        Some(EventSummary {
            id,
            name,
            local_date,
            local_time: start.local_time,
            images: self
                .images
                .into_iter()
                .map(|img| EventImage { url: img.url, ratio: img.ratio })
                .collect(),
            venue,
            category,
            popularity: self.popularity,
            url: self.url.unwrap_or_default(),
            price_range,
        })
    }

    /// Converts the document into a domain detail, splitting off the
    /// description before the summary conversion.
    pub fn into_detail(mut self) -> Option<EventDetail> {
        let description = self.description.take();
        let summary = self.into_summary()?;
        Some(EventDetail { summary, description })
    }
}
