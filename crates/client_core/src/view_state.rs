//! The listing screen as one serializable state value plus the reducer that
//! moves it between states. Rendering layers only read [`ViewState`] and
//! feed [`Action`]s back in; network work leaves the reducer as [`Effect`]s.

use serde::{Deserialize, Serialize};
use shared::{
    domain::{DraftField, Problem, ProblemDraft, SearchField},
    error::DraftError,
};
use tracing::debug;

use crate::catalog::{self, FilterCriteria, PageControl};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreateStage {
    #[default]
    Closed,
    Editing,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The screen was shown for the first time.
    Mounted,
    ProblemsLoaded(Vec<Problem>),
    LoadFailed { reason: String },
    SearchChanged { field: SearchField, value: String },
    PageSelected(usize),
    OpenCreate,
    CloseCreate,
    DraftEdited { field: DraftField, value: String },
    SubmitDraft,
    ProblemCreated(Problem),
    CreateFailed { reason: String },
    ReviseRequested,
    RandomFetched(Problem),
    RandomFailed { reason: String },
    CloseRevision,
}

/// Backend work requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadAll,
    Create(ProblemDraft),
    FetchRandom,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub problems: Vec<Problem>,
    pub filtered: Vec<Problem>,
    pub criteria: FilterCriteria,
    pub page: usize,
    pub create_stage: CreateStage,
    pub draft: ProblemDraft,
    /// Set when a submit was held back by the form checks.
    pub draft_error: Option<DraftError>,
    /// A create request is pending. Independent of form visibility, so
    /// closing and reopening the form does not allow a second submit.
    pub create_in_flight: bool,
    pub revision: Option<Problem>,
    pub revision_open: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Mounted => Some(Effect::LoadAll),
            Action::ProblemsLoaded(problems) => {
                debug!(count = problems.len(), "catalog loaded");
                self.filtered = problems.clone();
                self.problems = problems;
                None
            }
            Action::LoadFailed { .. } => None,
            Action::SearchChanged { field, value } => {
                self.criteria.set(field, value);
                self.refilter();
                None
            }
            Action::PageSelected(page) => {
                self.page = page;
                None
            }
            Action::OpenCreate => {
                if self.create_stage == CreateStage::Closed {
                    self.create_stage = if self.create_in_flight {
                        CreateStage::Submitting
                    } else {
                        CreateStage::Editing
                    };
                }
                None
            }
            Action::CloseCreate => {
                self.create_stage = CreateStage::Closed;
                self.draft_error = None;
                None
            }
            Action::DraftEdited { field, value } => {
                self.draft.set(field, value);
                self.draft_error = None;
                None
            }
            Action::SubmitDraft => self.submit_draft(),
            Action::ProblemCreated(problem) => {
                debug!(id = %problem.id, "problem created");
                // Appended to the visible list as-is, even when it does not
                // match the active criteria.
                self.problems.push(problem.clone());
                self.filtered.push(problem);
                self.create_in_flight = false;
                self.create_stage = CreateStage::Closed;
                self.draft = ProblemDraft::default();
                self.draft_error = None;
                None
            }
            Action::CreateFailed { .. } => {
                self.create_in_flight = false;
                if self.create_stage == CreateStage::Submitting {
                    self.create_stage = CreateStage::Editing;
                }
                None
            }
            Action::ReviseRequested => Some(Effect::FetchRandom),
            Action::RandomFetched(problem) => {
                self.revision = Some(problem);
                self.revision_open = true;
                None
            }
            Action::RandomFailed { .. } => None,
            Action::CloseRevision => {
                self.revision_open = false;
                None
            }
        }
    }

    fn refilter(&mut self) {
        self.filtered = catalog::filter_problems(&self.problems, &self.criteria);
        self.page = 0;
    }

    fn submit_draft(&mut self) -> Option<Effect> {
        if self.create_in_flight {
            debug!("create already in flight; ignoring submit");
            return None;
        }
        if self.create_stage != CreateStage::Editing {
            return None;
        }

        if let Err(err) = self.draft.validate() {
            debug!(field = ?err.field(), "draft held back: {err}");
            self.draft_error = Some(err);
            return None;
        }

        self.create_stage = CreateStage::Submitting;
        self.create_in_flight = true;
        Some(Effect::Create(self.draft.clone()))
    }

    pub fn visible_page(&self) -> &[Problem] {
        catalog::page_slice(&self.filtered, self.page)
    }

    pub fn page_count(&self) -> usize {
        catalog::page_count(self.filtered.len())
    }

    pub fn page_controls(&self) -> Vec<PageControl> {
        catalog::page_controls(self.page_count(), self.page)
    }

    pub fn is_create_open(&self) -> bool {
        self.create_stage != CreateStage::Closed
    }

    /// The random pick while its panel is showing.
    pub fn open_revision(&self) -> Option<&Problem> {
        if self.revision_open {
            self.revision.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/view_state_tests.rs"]
mod tests;
