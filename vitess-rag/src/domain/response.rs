use serde::{Deserialize, Deserializer, Serialize};

/// Decoded reply from the search endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default, deserialize_with = "or_default")]
    pub results: Vec<SearchResult>,

    /// Metadata filter the server applied. Either an object or the string
    /// `"None"`, so it stays untyped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_used: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhanced_query: Option<String>,
}

impl QueryResponse {
    /// Summary text, treating an empty string as absent.
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.is_empty())
    }

    pub fn enhanced_query(&self) -> Option<&str> {
        self.enhanced_query.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "or_default")]
    pub document: String,
    #[serde(default, deserialize_with = "or_default")]
    pub metadata: ResultMetadata,
    #[serde(default, deserialize_with = "or_default")]
    pub similarity_score: f64,
}

/// Chunk metadata. Counts arrive as strings or numbers and are kept as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMetadata {
    #[serde(default, deserialize_with = "text")]
    pub approx_token_count: String,
    #[serde(default, deserialize_with = "text")]
    pub char_count: String,
    #[serde(default, deserialize_with = "text")]
    pub chunk_index: String,
    #[serde(default, deserialize_with = "text")]
    pub id_parent: String,
    #[serde(default, deserialize_with = "text")]
    pub title: String,
    #[serde(default, deserialize_with = "text")]
    pub total_chunks: String,
    #[serde(default, deserialize_with = "text")]
    pub url: String,
    #[serde(rename = "version_or_commonresource", default, deserialize_with = "text")]
    pub version: String,
}

/// Reply from the model passthrough endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptResponse {
    #[serde(default, deserialize_with = "or_default")]
    pub response: String,
}

/// `null` decodes to the type's zero value.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}
