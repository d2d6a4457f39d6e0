//! Backend commands queued from UI to backend worker.

use client_core::Effect;
use shared::domain::ProblemDraft;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    LoadProblems,
    AddProblem { draft: ProblemDraft },
    FetchRandom,
    /// Cancels every request still in flight and stops the worker.
    Shutdown,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadProblems => "load_problems",
            Self::AddProblem { .. } => "add_problem",
            Self::FetchRandom => "fetch_random",
            Self::Shutdown => "shutdown",
        }
    }

    pub fn into_effect(self) -> Option<Effect> {
        match self {
            Self::LoadProblems => Some(Effect::LoadAll),
            Self::AddProblem { draft } => Some(Effect::Create(draft)),
            Self::FetchRandom => Some(Effect::FetchRandom),
            Self::Shutdown => None,
        }
    }
}

impl From<Effect> for BackendCommand {
    fn from(effect: Effect) -> Self {
        match effect {
            Effect::LoadAll => Self::LoadProblems,
            Effect::Create(draft) => Self::AddProblem { draft },
            Effect::FetchRandom => Self::FetchRandom,
        }
    }
}
