use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::DraftField;

/// Why a draft was held back before any request was made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum DraftError {
    #[error("{} is required", .0.label())]
    MissingField(DraftField),
    #[error("link '{link}' is not a valid URL: {reason}")]
    InvalidLink { link: String, reason: String },
}

impl DraftError {
    pub fn field(&self) -> DraftField {
        match self {
            Self::MissingField(field) => *field,
            Self::InvalidLink { .. } => DraftField::Link,
        }
    }
}
