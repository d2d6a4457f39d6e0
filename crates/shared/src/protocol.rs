use serde::{Deserialize, Serialize};

use crate::domain::{Problem, ProblemDraft};

/// Request body of `POST /add-new-problem`.
pub type AddProblemRequest = ProblemDraft;
/// Response body of `GET /show-all`.
pub type ShowAllResponse = Vec<Problem>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    ShowAll,
    AddNewProblem,
    GetRandomOne,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::ShowAll => "/show-all",
            Self::AddNewProblem => "/add-new-problem",
            Self::GetRandomOne => "/get-random-one",
        }
    }

    pub fn method(self) -> &'static str {
        match self {
            Self::ShowAll | Self::GetRandomOne => "GET",
            Self::AddNewProblem => "POST",
        }
    }
}
