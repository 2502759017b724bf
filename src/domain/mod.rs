//! Domain layer for eventfinder.
//!
//! This module contains the core domain types, independent of the catalog
//! wire format, the terminal, or infrastructure concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`event`]: Event summaries, details, and saved-event projections

pub mod error;
pub mod event;

pub use error::{Error, Result};
pub use event::{EventDetail, EventImage, EventSummary, PriceRange, SavedEvent, TBA};
