//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler never performs I/O itself; it mutates state and returns
//! a list of [`Action`]s for the main loop to execute. This keeps every state
//! transition a pure function over `AppState` and makes the handler directly
//! testable.

use crate::worker::WorkerMessage;

/// Commands produced by the event handler for the main loop to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Posts a message to the background worker thread.
    ///
    /// All catalog fetches and storage mutations go through here; the UI
    /// thread never blocks on the network or the disk.
    PostToWorker(WorkerMessage),

    /// Tears down the terminal and exits the application.
    Quit,
}
