pub mod endpoint;
pub mod positional;
pub mod request;
pub mod response;
pub mod version;

pub use endpoint::Endpoint;
pub use positional::{SearchParams, apply_positional_args, bare_tokens};
pub use request::{PromptRequest, QueryRequest};
pub use response::{PromptResponse, QueryResponse, ResultMetadata, SearchResult};
pub use version::{ANNOTATED_VERSIONS, VERSION_LABELS, resolve_label};
