//! Background worker infrastructure.
//!
//! All catalog fetches and storage mutations run on a dedicated thread that
//! owns the HTTP client and the saved-events store. The UI thread talks to it
//! exclusively through the [`messages`] protocol over `std::sync::mpsc`
//! channels.
//!
//! # Modules
//!
//! - `messages`: request/response enums exchanged with the UI thread
//! - `handler`: the worker itself and its run loop

pub mod handler;
pub mod messages;

pub use handler::EventWorker;
pub use messages::{WorkerMessage, WorkerResponse};
