//! Defaults and per-command configuration.
//!
//! There are no config files or environment overrides. Each command builds
//! its config from parsed arguments and hands it to the handler by value.

use crate::domain::{QueryRequest, SearchParams, apply_positional_args};

pub const DEFAULT_BASE_URL: &str = "https://vitess-backend-api-fk655.ondigitalocean.app";
pub const DEFAULT_VERSION: &str = "v22.0 (Development)";
pub const DEFAULT_N_RESULTS: u32 = 10;
pub const DEFAULT_INCLUDE_RESOURCES: bool = true;

/// Settings for one search invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    pub query: String,
    pub params: SearchParams,
    pub base_url: String,
    pub json: bool,
    pub full: bool,
}

impl QueryConfig {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            params: SearchParams::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            json: false,
            full: false,
        }
    }

    /// Apply trailing positional overrides on top of the flag values.
    #[must_use]
    pub fn with_positionals<S: AsRef<str>>(mut self, args: &[S]) -> Self {
        apply_positional_args(args, &mut self.params);
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub const fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    #[must_use]
    pub const fn with_full(mut self, full: bool) -> Self {
        self.full = full;
        self
    }

    pub fn request(&self) -> QueryRequest {
        QueryRequest::new(self.query.clone(), self.params.clone())
    }
}

/// Settings for a model passthrough invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    pub prompt: String,
    pub base_url: String,
}

impl PromptConfig {
    pub fn new(prompt: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            base_url: base_url.into(),
        }
    }
}
