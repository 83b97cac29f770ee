use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;

use super::{
    ApiError, ApiResult, NewProject, NewTask, Project, ProjectUpdate, Section, SectionQuery, Task,
    TaskQuery, TaskUpdate, TodoistApi,
};

const USER_AGENT: &str = concat!("todoist-mcp/", env!("CARGO_PKG_VERSION"));

/// Error bodies longer than this (in characters) are cut before they reach
/// the caller; proxies answer 5xx with whole HTML pages.
const MAX_ERROR_MESSAGE_CHARS: usize = 300;

/// HTTP client for the Todoist REST API.
///
/// Holds only immutable state: the base URL, the bearer token and a pooled
/// `reqwest::Client`. Safe to share between concurrent tool calls.
pub struct TodoistClient {
    base_url: String,
    token: String,
    client: Client,
}

impl TodoistClient {
    /// Create a client from the resolved configuration.
    ///
    /// A rustls crypto provider must be installed before calling this.
    pub fn new(config: &Config) -> ApiResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| ApiError::Transport { source })?;

        Ok(Self {
            base_url: config.api_url().to_string(),
            token: config.api_token().to_string(),
            client,
        })
    }

    /// Authenticated request builder for a path below the base URL.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(%method, path, "Todoist request");
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url).bearer_auth(&self.token)
    }

    /// Send the request and turn non-2xx statuses into [`ApiError::Remote`].
    async fn send(request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .ok()
            .map(|text| truncate_message(text.trim()))
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });
        warn!(status = status.as_u16(), %message, "Todoist request failed");

        Err(ApiError::Remote {
            status: status.as_u16(),
            message,
        })
    }

    /// Send the request and deserialize the JSON body.
    async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
        let response = Self::send(request).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Send the request and discard the body (204 endpoints).
    async fn execute(request: RequestBuilder) -> ApiResult<()> {
        Self::send(request).await.map(|_| ())
    }
}

fn truncate_message(text: &str) -> String {
    match text.char_indices().nth(MAX_ERROR_MESSAGE_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[async_trait]
impl TodoistApi for TodoistClient {
    async fn get_tasks(&self, query: &TaskQuery) -> ApiResult<Vec<Task>> {
        Self::fetch(self.request(Method::GET, "/tasks").query(query)).await
    }

    async fn get_task(&self, task_id: &str) -> ApiResult<Task> {
        Self::fetch(self.request(Method::GET, &format!("/tasks/{}", task_id))).await
    }

    async fn create_task(&self, task: &NewTask) -> ApiResult<Task> {
        Self::fetch(self.request(Method::POST, "/tasks").json(task)).await
    }

    async fn update_task(&self, task_id: &str, update: &TaskUpdate) -> ApiResult<Task> {
        Self::fetch(
            self.request(Method::POST, &format!("/tasks/{}", task_id))
                .json(update),
        )
        .await
    }

    async fn complete_task(&self, task_id: &str) -> ApiResult<()> {
        Self::execute(self.request(Method::POST, &format!("/tasks/{}/close", task_id))).await
    }

    async fn reopen_task(&self, task_id: &str) -> ApiResult<()> {
        Self::execute(self.request(Method::POST, &format!("/tasks/{}/reopen", task_id))).await
    }

    async fn delete_task(&self, task_id: &str) -> ApiResult<()> {
        Self::execute(self.request(Method::DELETE, &format!("/tasks/{}", task_id))).await
    }

    async fn get_projects(&self) -> ApiResult<Vec<Project>> {
        Self::fetch(self.request(Method::GET, "/projects")).await
    }

    async fn get_project(&self, project_id: &str) -> ApiResult<Project> {
        Self::fetch(self.request(Method::GET, &format!("/projects/{}", project_id))).await
    }

    async fn create_project(&self, project: &NewProject) -> ApiResult<Project> {
        Self::fetch(self.request(Method::POST, "/projects").json(project)).await
    }

    async fn update_project(
        &self,
        project_id: &str,
        update: &ProjectUpdate,
    ) -> ApiResult<Project> {
        Self::fetch(
            self.request(Method::POST, &format!("/projects/{}", project_id))
                .json(update),
        )
        .await
    }

    async fn get_sections(&self, query: &SectionQuery) -> ApiResult<Vec<Section>> {
        Self::fetch(self.request(Method::GET, "/sections").query(query)).await
    }
}
