//! Executes `HttpRequest` values built by `todo-core`.
//!
//! # Design
//! `Transport` is the only place the client touches the network. The ureq
//! implementation creates a fresh agent for every call and drops it when
//! the call returns, whatever the outcome, so no connection outlives a
//! single menu action. Non-2xx statuses are returned as data; deciding what
//! they mean is left to `TaskClient::parse_*`.

use todo_core::{ApiError, HttpMethod, HttpRequest, HttpResponse};
use tracing::debug;

/// Performs one HTTP round-trip.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport over `ureq`, using the library's default timeouts.
#[derive(Debug, Clone, Default)]
pub struct UreqTransport;

impl UreqTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();

        let HttpRequest {
            method,
            path,
            headers,
            body,
        } = request;
        debug!(method = method.as_str(), url = %path, "sending request");

        let result = match (method, body) {
            (HttpMethod::Get, _) => with_headers(agent.get(&path), &headers).call(),
            (HttpMethod::Delete, _) => with_headers(agent.delete(&path), &headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(agent.post(&path), &headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => with_headers(agent.post(&path), &headers).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                with_headers(agent.put(&path), &headers).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => with_headers(agent.put(&path), &headers).send_empty(),
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        debug!(status, bytes = body.len(), "received response");

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
