//! Applies UI actions and backend completions to the view state and
//! translates resulting effects into backend commands.

use client_core::{Action, ViewState};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn reduce_action(state: &mut ViewState, action: Action) -> Option<BackendCommand> {
    state.apply(action).map(BackendCommand::from)
}

pub fn reduce_event(
    state: &mut ViewState,
    event: UiEvent,
    status: &mut String,
) -> Option<BackendCommand> {
    match event {
        UiEvent::Info(message) => {
            *status = message;
            None
        }
        UiEvent::BridgeFailed(message) => {
            *status = message;
            None
        }
        UiEvent::Completed(action) => {
            if let Action::ProblemsLoaded(problems) = &action {
                *status = format!("{} problems loaded", problems.len());
            }
            reduce_action(state, action)
        }
    }
}
