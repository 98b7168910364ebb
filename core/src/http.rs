//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network; whoever owns a transport executes the call.
//!
//! All fields use owned types (`String`, `Vec`) so values can be recorded and
//! compared in tests without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `TaskClient::build_*` methods. `path` is the absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed after executing an `HttpRequest`, then passed to
/// `TaskClient::parse_*` methods.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
