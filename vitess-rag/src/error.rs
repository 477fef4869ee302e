use thiserror::Error;

#[derive(Error, Debug)]
pub enum VitessRagError {
    #[error("Error marshaling JSON: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-200 reply. `body` holds the error payload when it decoded as a
    /// JSON object.
    #[error("Error: HTTP Status {status}")]
    HttpStatus {
        status: u16,
        body: Option<serde_json::Value>,
    },

    #[error("Error decoding response: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VitessRagError {
    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }

    /// Whether the error ends the invocation without failing the process.
    pub const fn is_reported(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, VitessRagError>;
