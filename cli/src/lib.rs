//! Interactive console client for the `/todos` task resource.
//!
//! # Overview
//! The binary shows a numbered menu, collects and validates the fields an
//! operation needs, performs one HTTP call through `todo-core`, prints the
//! result and shows the menu again until the user picks `0`.
//!
//! # Design
//! - `input`: pure string-to-value validation, no I/O.
//! - `prompt`: the console loops that re-ask until `input` accepts a line.
//! - `api`: the four task operations over a `Transport`, no console I/O.
//! - `transport`: the `Transport` seam and its blocking ureq implementation.
//! - `render`: everything the user reads.
//! - `menu`: the state machine that composes the above.
//!
//! Operation failures come back as `ApiError` values and are printed by the
//! menu; only console I/O errors leave the loop.

pub mod api;
pub mod config;
pub mod input;
pub mod menu;
pub mod prompt;
pub mod render;
pub mod telemetry;
pub mod transport;

pub use api::TaskApi;
pub use config::Config;
pub use prompt::Console;
pub use transport::{Transport, UreqTransport};
