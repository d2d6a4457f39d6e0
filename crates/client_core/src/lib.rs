use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::{Problem, ProblemDraft},
    protocol::{AddProblemRequest, Endpoint, ShowAllResponse},
};
use tracing::{debug, info};

pub mod catalog;
pub mod config;
pub mod error;
pub mod session;
pub mod view_state;

pub use catalog::{FilterCriteria, PageControl, PAGE_SIZE};
pub use config::{load_settings, ClientSettings};
pub use error::RequestError;
pub use session::{execute_effect, CatalogSession};
pub use view_state::{Action, CreateStage, Effect, ViewState};

/// The three backend operations the listing depends on.
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Problem>, RequestError>;
    async fn add_problem(&self, draft: &ProblemDraft) -> Result<Problem, RequestError>;
    async fn random_problem(&self) -> Result<Problem, RequestError>;
}

#[async_trait]
impl<T> CatalogBackend for Arc<T>
where
    T: CatalogBackend + ?Sized,
{
    async fn list_all(&self) -> Result<Vec<Problem>, RequestError> {
        (**self).list_all().await
    }

    async fn add_problem(&self, draft: &ProblemDraft) -> Result<Problem, RequestError> {
        (**self).add_problem(draft).await
    }

    async fn random_problem(&self) -> Result<Problem, RequestError> {
        (**self).random_problem().await
    }
}

pub struct HttpCatalogClient {
    http: Client,
    backend_url: String,
}

impl HttpCatalogClient {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), backend_url)
    }

    pub fn with_client(http: Client, backend_url: impl Into<String>) -> Self {
        let backend_url: String = backend_url.into();
        Self {
            http,
            backend_url: backend_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, RequestError> {
        let backend_url = config::normalize_backend_url(&settings.backend_url).map_err(|err| {
            RequestError::InvalidBaseUrl {
                url: settings.backend_url.clone(),
                reason: format!("{err:#}"),
            }
        })?;

        let mut builder = Client::builder();
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|err| RequestError::InvalidBaseUrl {
            url: backend_url.clone(),
            reason: err.to_string(),
        })?;

        info!(backend_url = %backend_url, "catalog client configured");
        Ok(Self::with_client(http, backend_url))
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.backend_url, endpoint.path())
    }

    async fn read_json<T: DeserializeOwned>(
        endpoint: Endpoint,
        res: reqwest::Result<Response>,
    ) -> Result<T, RequestError> {
        let res = res.map_err(|source| RequestError::Transport { endpoint, source })?;
        let status = res.status();
        if !status.is_success() {
            return Err(RequestError::Status { endpoint, status });
        }
        res.json::<T>()
            .await
            .map_err(|source| RequestError::Decode { endpoint, source })
    }
}

#[async_trait]
impl CatalogBackend for HttpCatalogClient {
    async fn list_all(&self) -> Result<Vec<Problem>, RequestError> {
        let endpoint = Endpoint::ShowAll;
        let res = self.http.get(self.url(endpoint)).send().await;
        let problems: ShowAllResponse = Self::read_json(endpoint, res).await?;
        debug!(count = problems.len(), "fetched catalog");
        Ok(problems)
    }

    async fn add_problem(&self, draft: &ProblemDraft) -> Result<Problem, RequestError> {
        let endpoint = Endpoint::AddNewProblem;
        let body: &AddProblemRequest = draft;
        let res = self.http.post(self.url(endpoint)).json(body).send().await;
        let created: Problem = Self::read_json(endpoint, res).await?;
        debug!(id = %created.id, "backend stored problem");
        Ok(created)
    }

    async fn random_problem(&self) -> Result<Problem, RequestError> {
        let endpoint = Endpoint::GetRandomOne;
        let res = self.http.get(self.url(endpoint)).send().await;
        Self::read_json(endpoint, res).await
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
