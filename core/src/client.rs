//! Stateless HTTP request builder and response parser for the `/todos`
//! resource.
//!
//! # Design
//! `TaskClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies.
//!
//! Any 2xx status counts as success. Update and delete look at the status
//! only; create and list read the body, and treat an empty or `null` body as
//! "nothing returned" rather than an error.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Task;

/// Synchronous, stateless client for the `/todos` resource.
#[derive(Debug, Clone)]
pub struct TaskClient {
    base_url: String,
}

impl TaskClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_tasks(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_task(&self, task: &Task) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/todos", self.base_url),
            headers: json_headers(),
            body: Some(to_body(task)?),
        })
    }

    /// The path id is always taken from `task`, so path and body agree.
    pub fn build_update_task(&self, task: &Task) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/todos/{}", self.base_url, task.id()),
            headers: json_headers(),
            body: Some(to_body(task)?),
        })
    }

    pub fn build_delete_task(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_tasks(&self, response: HttpResponse) -> Result<Vec<Task>, ApiError> {
        check_status(&response)?;
        if response.body.trim().is_empty() {
            return Ok(Vec::new());
        }
        let tasks: Option<Vec<Task>> = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        Ok(tasks.unwrap_or_default())
    }

    /// Returns `Ok(None)` when the server accepted the request but sent back
    /// nothing usable as a `Task`.
    pub fn parse_create_task(&self, response: HttpResponse) -> Result<Option<Task>, ApiError> {
        check_status(&response)?;
        if response.body.trim().is_empty() {
            return Ok(None);
        }
        Ok(serde_json::from_str::<Option<Task>>(&response.body).unwrap_or(None))
    }

    pub fn parse_update_task(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_delete_task(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_body(task: &Task) -> Result<String, ApiError> {
    serde_json::to_string(task).map_err(|e| ApiError::SerializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
