//! Synchronous request/response core for the `/todos` task resource.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The caller executes the HTTP round-trip, so every
//! operation here is deterministic and testable without a server.
//!
//! # Design
//! - `TaskClient` holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `Task` is defined independently from the mock-server crate; the
//!   integration tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TaskClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::Task;
