use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DraftError;

/// Backend-assigned identifier. The backend may hand out numeric or
/// string keys, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProblemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for ProblemId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: ProblemId,
    pub name: String,
    pub topic: String,
    pub level: String,
    pub link: String,
    pub platform: String,
}

impl Problem {
    pub fn searchable(&self, field: SearchField) -> &str {
        match field {
            SearchField::Name => &self.name,
            SearchField::Topic => &self.topic,
            SearchField::Level => &self.level,
            SearchField::Platform => &self.platform,
        }
    }
}

/// The four attributes the listing can be searched by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Name,
    Topic,
    Level,
    Platform,
}

impl SearchField {
    pub const ALL: [SearchField; 4] = [Self::Name, Self::Topic, Self::Level, Self::Platform];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Topic => "Topic",
            Self::Level => "Level",
            Self::Platform => "Platform",
        }
    }
}

/// Editable fields of the create form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Name,
    Topic,
    Level,
    Link,
    Platform,
}

impl DraftField {
    pub const ALL: [DraftField; 5] = [
        Self::Name,
        Self::Topic,
        Self::Level,
        Self::Link,
        Self::Platform,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Topic => "Topic",
            Self::Level => "Level",
            Self::Link => "Link",
            Self::Platform => "Platform",
        }
    }
}

/// Client-side staging value for a problem that has no id yet. This is
/// also the request body of the create endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDraft {
    pub name: String,
    pub topic: String,
    pub level: String,
    pub link: String,
    pub platform: String,
}

impl ProblemDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Topic => &self.topic,
            DraftField::Level => &self.level,
            DraftField::Link => &self.link,
            DraftField::Platform => &self.platform,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Topic => &mut self.topic,
            DraftField::Level => &mut self.level,
            DraftField::Link => &mut self.link,
            DraftField::Platform => &mut self.platform,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Same checks a browser form applies before it lets a submit through:
    /// every field is required and the link must be an absolute URL.
    /// Values are not trimmed, whitespace counts as filled in.
    pub fn validate(&self) -> Result<(), DraftError> {
        for field in DraftField::ALL {
            if self.field(field).is_empty() {
                return Err(DraftError::MissingField(field));
            }
        }

        url::Url::parse(self.link.trim()).map_err(|err| DraftError::InvalidLink {
            link: self.link.clone(),
            reason: err.to_string(),
        })?;

        Ok(())
    }

    pub fn with_id(self, id: ProblemId) -> Problem {
        Problem {
            id,
            name: self.name,
            topic: self.topic,
            level: self.level,
            link: self.link,
            platform: self.platform,
        }
    }
}
