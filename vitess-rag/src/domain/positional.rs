//! Trailing positional overrides: `-q "query" [version] [n_results] [include_resources]`.

use super::version::resolve_label;
use crate::config::{DEFAULT_INCLUDE_RESOURCES, DEFAULT_N_RESULTS, DEFAULT_VERSION};

/// The three request parameters a positional override can touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub version: String,
    pub n_results: u32,
    pub include_resources: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            n_results: DEFAULT_N_RESULTS,
            include_resources: DEFAULT_INCLUDE_RESOURCES,
        }
    }
}

/// Keep only the bare tokens; anything that looks like a flag is dropped.
pub fn bare_tokens<S: AsRef<str>>(args: &[S]) -> Vec<&str> {
    args.iter()
        .map(AsRef::as_ref)
        .filter(|arg| !arg.starts_with('-'))
        .collect()
}

/// Apply positional overrides in place.
///
/// Token 0 is a version (expanded through [`resolve_label`]), token 1 a
/// result count, token 2 a `true`/`false` include-resources switch. Tokens
/// that don't parse leave the prior value alone; extra tokens are ignored.
pub fn apply_positional_args<S: AsRef<str>>(args: &[S], params: &mut SearchParams) {
    let mut tokens = args.iter().map(AsRef::as_ref);

    let Some(version) = tokens.next() else {
        return;
    };
    params.version = resolve_label(version);

    if let Some(n) = tokens.next().and_then(|t| t.parse::<u32>().ok()) {
        params.n_results = n;
    }

    if let Some(flag) = tokens.next() {
        match flag.to_lowercase().as_str() {
            "true" => params.include_resources = true,
            "false" => params.include_resources = false,
            _ => tracing::debug!(token = flag, "ignoring include_resources override"),
        }
    }
}
