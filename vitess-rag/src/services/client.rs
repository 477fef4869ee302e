use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{Endpoint, PromptRequest, PromptResponse, QueryRequest, QueryResponse};
use crate::error::{Result, VitessRagError};
use crate::ports::Transport;

/// Client for the documentation RAG service.
///
/// Every call is a single POST: serialize, send, check for 200, decode.
pub struct RagClient<T>
where
    T: Transport,
{
    transport: T,
    base_url: String,
}

impl<T> RagClient<T>
where
    T: Transport,
{
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Run a search against one of the query endpoints.
    pub fn search(&self, endpoint: Endpoint, request: &QueryRequest) -> Result<QueryResponse> {
        debug_assert!(endpoint != Endpoint::Prompt, "prompt endpoint takes a PromptRequest");
        self.post(endpoint, request)
    }

    /// Send a prompt straight to the model endpoint.
    pub fn prompt(&self, request: &PromptRequest) -> Result<PromptResponse> {
        self.post(Endpoint::Prompt, request)
    }

    fn post<Req, Resp>(&self, endpoint: Endpoint, request: &Req) -> Result<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let body = serde_json::to_vec(request).map_err(VitessRagError::Serialization)?;
        let url = endpoint.url(&self.base_url);
        let reply = self.transport.post_json(&url, body)?;

        if !reply.is_ok() {
            debug!(status = reply.status, %endpoint, "non-success status");
            return Err(VitessRagError::HttpStatus {
                status: reply.status,
                body: error_body(&reply.body),
            });
        }

        serde_json::from_slice(&reply.body).map_err(VitessRagError::decode)
    }
}

/// Best-effort decode of an error payload as a JSON object.
fn error_body(body: &[u8]) -> Option<serde_json::Value> {
    serde_json::from_slice::<serde_json::Map<String, serde_json::Value>>(body)
        .ok()
        .map(serde_json::Value::Object)
}
