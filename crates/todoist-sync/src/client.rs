//! HTTP client wrapper for the Todoist REST API.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ApiError, Error, Result};
use crate::records::{CreateTask, RawProject, RawSection, RawTask};

/// Base URL for the Todoist REST API.
const BASE_URL: &str = "https://api.todoist.com/rest/v2";

/// Selects which tasks a fetch should return.
///
/// This is the fetch-side image of a parsed query directive, with the
/// caller's default already applied: at most one narrowing criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSelection {
    /// All active tasks.
    All,
    /// Tasks in the given project.
    Project(String),
    /// Tasks in the given section.
    Section(String),
    /// Tasks matching a server-side filter expression.
    Filter(String),
}

/// Client for interacting with the Todoist REST API.
#[derive(Clone)]
pub struct TodoistClient {
    token: String,
    http_client: reqwest::Client,
    base_url: String,
}

impl TodoistClient {
    /// Creates a new TodoistClient with the given API token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            http_client: reqwest::Client::new(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Creates a new TodoistClient with a custom base URL (for testing).
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches active tasks matching the given selection.
    pub async fn get_tasks(&self, selection: &TaskSelection) -> Result<Vec<RawTask>> {
        let query: Vec<(&str, &str)> = match selection {
            TaskSelection::All => vec![],
            TaskSelection::Project(id) => vec![("project_id", id.as_str())],
            TaskSelection::Section(id) => vec![("section_id", id.as_str())],
            TaskSelection::Filter(expr) => vec![("filter", expr.as_str())],
        };
        self.get("/tasks", &query).await
    }

    /// Fetches all projects.
    pub async fn get_projects(&self) -> Result<Vec<RawProject>> {
        self.get("/projects", &[]).await
    }

    /// Fetches all sections.
    pub async fn get_sections(&self) -> Result<Vec<RawSection>> {
        self.get("/sections", &[]).await
    }

    /// Creates a new task and returns the created record.
    pub async fn create_task(&self, request: &CreateTask) -> Result<RawTask> {
        self.post("/tasks", request).await
    }

    /// Marks a task as completed.
    pub async fn close_task(&self, id: &str) -> Result<()> {
        self.post_no_content(&format!("/tasks/{id}/close")).await
    }

    /// Reopens a completed task.
    pub async fn reopen_task(&self, id: &str) -> Result<()> {
        self.post_no_content(&format!("/tasks/{id}/reopen")).await
    }

    /// Performs a GET request to the given endpoint.
    async fn get<T: DeserializeOwned>(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .http_client
            .get(&url)
            .query(query)
            .bearer_auth(&self.token)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Performs a POST request to the given endpoint with a JSON body.
    async fn post<T: DeserializeOwned, B: Serialize>(&self, endpoint: &str, body: &B) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Performs a POST request expecting no response body (e.g., 204 No Content).
    async fn post_no_content(&self, endpoint: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        Err(self.parse_error_response(response).await)
    }

    /// Handles the HTTP response, converting it to our error types.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.json::<T>().await?;
            return Ok(body);
        }

        Err(self.parse_error_response(response).await)
    }

    /// Parses an error response into our error types.
    async fn parse_error_response(&self, response: reqwest::Response) -> Error {
        let status = response.status();
        let status_code = status.as_u16();

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let message = response.text().await.unwrap_or_default();

        let api_error = match status_code {
            401 | 403 => ApiError::Auth {
                message: if message.is_empty() {
                    "Authentication failed".to_string()
                } else {
                    message
                },
            },
            404 => ApiError::NotFound {
                resource: "resource".to_string(),
                id: "unknown".to_string(),
            },
            429 => ApiError::RateLimit { retry_after },
            400 => ApiError::Validation {
                message: if message.is_empty() {
                    "Bad request".to_string()
                } else {
                    message
                },
            },
            _ => ApiError::Http {
                status: status_code,
                message: if message.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                } else {
                    message
                },
            },
        };

        Error::Api(api_error)
    }
}

impl fmt::Debug for TodoistClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoistClient")
            .field("token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}
