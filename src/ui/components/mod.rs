//! UI component renderers.
//!
//! Each component draws one region of the frame from its slice of the view
//! model, positioning the cursor with raw ANSI sequences and returning the
//! next free row where applicable. Components never read `AppState`; all
//! formatting decisions happen in the view model.

pub mod cards;
pub mod empty;
pub mod filter;
pub mod footer;
pub mod header;
pub mod overlay;
pub mod saved;
pub mod toast;

pub use cards::{render_grid, render_list};
pub use empty::{render_empty_state, render_loading};
pub use filter::render_filter_bar;
pub use footer::render_footer;
pub use header::render_header;
pub use overlay::render_overlay;
pub use saved::render_saved_panel;
pub use toast::render_toast;
