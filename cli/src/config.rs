//! Client configuration.

/// Public test API the client talks to unless told otherwise.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Settings fixed at startup and passed explicitly to `TaskApi`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
