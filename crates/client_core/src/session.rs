//! Runs reducer effects against a backend. Each request is bound to a
//! cancellation token owned by whoever hosts the view; once the token fires
//! a pending request is abandoned and its completion is never delivered.

use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::{
    view_state::{Action, Effect, ViewState},
    CatalogBackend,
};

/// Performs one effect and turns the outcome into the follow-up action.
/// Failures are logged here and come back as the matching `*Failed` action.
/// Returns `None` when `cancel` fired first.
pub async fn execute_effect<B>(
    backend: &B,
    effect: Effect,
    cancel: &CancellationToken,
) -> Option<Action>
where
    B: CatalogBackend + ?Sized,
{
    let request = async move {
        match effect {
            Effect::LoadAll => match backend.list_all().await {
                Ok(problems) => Action::ProblemsLoaded(problems),
                Err(err) => {
                    error!(error = %err, "there was an error fetching the catalog");
                    Action::LoadFailed {
                        reason: err.to_string(),
                    }
                }
            },
            Effect::Create(draft) => match backend.add_problem(&draft).await {
                Ok(problem) => Action::ProblemCreated(problem),
                Err(err) => {
                    error!(error = %err, "there was an error adding the new problem");
                    Action::CreateFailed {
                        reason: err.to_string(),
                    }
                }
            },
            Effect::FetchRandom => match backend.random_problem().await {
                Ok(problem) => Action::RandomFetched(problem),
                Err(err) => {
                    error!(error = %err, "there was an error fetching a random problem");
                    Action::RandomFailed {
                        reason: err.to_string(),
                    }
                }
            },
        }
    };

    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!("request cancelled before completion");
            None
        }
        action = request => Some(action),
    }
}

/// Owns a [`ViewState`] and drives it to rest: every effect a transition
/// emits is awaited and its completion fed back in before `dispatch`
/// returns. Suited to sequential hosts such as the command line.
pub struct CatalogSession<B> {
    backend: B,
    state: ViewState,
    cancel: CancellationToken,
}

impl<B: CatalogBackend> CatalogSession<B> {
    pub fn new(backend: B) -> Self {
        Self::with_cancellation(backend, CancellationToken::new())
    }

    pub fn with_cancellation(backend: B, cancel: CancellationToken) -> Self {
        Self {
            backend,
            state: ViewState::new(),
            cancel,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    pub async fn dispatch(&mut self, action: Action) {
        let mut next = Some(action);
        while let Some(action) = next.take() {
            let Some(effect) = self.state.apply(action) else {
                break;
            };
            next = execute_effect(&self.backend, effect, &self.cancel).await;
        }
    }

    /// Tears the session down; any request still in flight is dropped.
    pub fn close(&self) {
        self.cancel.cancel();
    }
}

impl<B> Drop for CatalogSession<B> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
