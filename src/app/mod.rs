//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the terminal runtime (main.rs) and the
//! domain/api/storage/worker layers. It implements the event-driven core
//! that powers the interactive UI.
//!
//! # Architecture
//!
//! ```text
//! Key Presses → Events → Event Handler → State Mutations → Actions → Worker
//!                            ↑                                         ↓
//!                            └──────────── Worker Responses ───────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effect commands emitted by the event handler
//! - [`handler`]: event processing and state transition coordinator
//! - [`modes`]: input, view, sort, and focus mode types
//! - [`state`]: central state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, PaneFocus, SortKey, ViewMode};
pub use state::{AppState, Toast, ToastSeverity};
