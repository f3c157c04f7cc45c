use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{Envelope, Task, TaskForm, TaskPatch};

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request never got an answer.
    #[error("cannot reach the server: {0}")]
    Connectivity(String),
    /// The server answered with something that is not an envelope.
    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}

/// The five task operations as seen from the client.
///
/// Non-2xx answers are not errors here: the envelope's `success` carries the
/// outcome.
#[async_trait]
pub trait TaskService: Send + Sync {
    async fn list(&self) -> Result<Envelope<Vec<Task>>, ClientError>;
    async fn create(&self, form: &TaskForm) -> Result<Envelope<Task>, ClientError>;
    async fn update(&self, id: &str, patch: &TaskPatch) -> Result<Envelope<Task>, ClientError>;
    async fn delete(&self, id: &str) -> Result<Envelope<()>, ClientError>;
}

/// HTTP implementation of [`TaskService`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` is the API root, e.g. `http://localhost:5000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn task_url(&self, id: &str) -> String {
        format!("{}/tasks/{}", self.base_url, id)
    }

    async fn send<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
    ) -> Result<Envelope<T>, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Connectivity(e.to_string()))?;
        tracing::debug!(status = %response.status(), url = %response.url(), "response");
        response
            .json::<Envelope<T>>()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl TaskService for ApiClient {
    async fn list(&self) -> Result<Envelope<Vec<Task>>, ClientError> {
        Self::send(self.http.get(self.tasks_url())).await
    }

    async fn create(&self, form: &TaskForm) -> Result<Envelope<Task>, ClientError> {
        Self::send(self.http.post(self.tasks_url()).json(form)).await
    }

    async fn update(&self, id: &str, patch: &TaskPatch) -> Result<Envelope<Task>, ClientError> {
        Self::send(self.http.put(self.task_url(id)).json(patch)).await
    }

    async fn delete(&self, id: &str) -> Result<Envelope<()>, ClientError> {
        Self::send(self.http.delete(self.task_url(id))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let client = ApiClient::new("http://localhost:5000/api/");
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.tasks_url(), "http://localhost:5000/api/tasks");
        assert_eq!(client.task_url("abc"), "http://localhost:5000/api/tasks/abc");
    }
}
