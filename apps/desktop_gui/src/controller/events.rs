//! Events flowing from the backend worker back to the UI thread.

use client_core::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Info(String),
    /// A request finished; the action feeds straight into the view state.
    Completed(Action),
    /// The worker could not start and will not process commands.
    BridgeFailed(String),
}
