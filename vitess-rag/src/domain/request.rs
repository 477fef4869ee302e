use serde::{Deserialize, Serialize};

use super::positional::SearchParams;

/// Body sent to the search endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    pub version: String,
    pub n_results: u32,
    pub include_resources: bool,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>, params: SearchParams) -> Self {
        Self {
            query: query.into(),
            version: params.version,
            n_results: params.n_results,
            include_resources: params.include_resources,
        }
    }
}

/// Body sent to the model passthrough endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
}

impl PromptRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}
