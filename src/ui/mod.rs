//! User interface layer.
//!
//! Rendering follows a strict two-step pipeline: `AppState` is transformed
//! into a [`viewmodel::UiViewModel`] (pure, unit-testable), which the
//! [`renderer`] then paints with raw ANSI escape sequences via the
//! [`components`].
//!
//! # Modules
//!
//! - [`components`]: per-region renderers (header, cards, overlay, ...)
//! - [`helpers`]: cursor positioning and text utilities
//! - [`renderer`]: top-level frame coordinator
//! - [`theme`]: color schemes and ANSI color generation
//! - [`viewmodel`]: the renderable frame representation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::UiViewModel;
