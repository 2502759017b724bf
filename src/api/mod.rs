//! Catalog API layer.
//!
//! This module talks to the remote events catalog: [`client`] builds and
//! executes the HTTP requests, [`wire`] holds the serde response types and
//! their conversion into domain models.

pub mod client;
pub mod wire;

pub use client::{day_window, CatalogClient, SearchParams};
