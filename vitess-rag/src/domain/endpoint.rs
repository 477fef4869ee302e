use std::fmt;

/// Service endpoints, one per request shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Plain vector search.
    Query,
    /// Server rewrites the query, searches, then summarizes.
    Enhanced,
    /// Search without rewriting, still summarized.
    Raw,
    /// Direct model passthrough.
    Prompt,
}

impl Endpoint {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Query => "/query",
            Self::Enhanced => "/enhance-query-cli",
            Self::Raw => "/rawquery-cli",
            Self::Prompt => "/testgeminiflash",
        }
    }

    /// Full URL for this endpoint under `base_url`.
    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
