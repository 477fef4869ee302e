use std::io::Write;

use tracing::debug;

use crate::config::QueryConfig;
use crate::domain::{Endpoint, QueryResponse};
use crate::error::Result;
use crate::output::{self, SummaryKind};
use crate::ports::Transport;
use crate::services::RagClient;

/// `enhanced` and `raw`: summary first, search details behind `--full`.
pub fn run<T, W>(kind: SummaryKind, config: QueryConfig, transport: T, out: &mut W) -> Result<()>
where
    T: Transport,
    W: Write,
{
    let endpoint = match kind {
        SummaryKind::Enhanced => Endpoint::Enhanced,
        SummaryKind::Raw => Endpoint::Raw,
    };
    let (query, response) = fetch(endpoint, &config, transport)?;

    if config.json {
        return output::print_json(out, &response);
    }
    output::render_summary(out, kind, &query, &response, config.full)
}

/// Root command with `-q`: an enhanced query, summary-only by default.
pub fn run_root<T, W>(config: QueryConfig, transport: T, out: &mut W) -> Result<()>
where
    T: Transport,
    W: Write,
{
    let (query, response) = fetch(Endpoint::Enhanced, &config, transport)?;

    if config.json {
        return output::print_json(out, &response);
    }
    output::render_root_summary(out, &query, &response, config.full)
}

fn fetch<T: Transport>(
    endpoint: Endpoint,
    config: &QueryConfig,
    transport: T,
) -> Result<(String, QueryResponse)> {
    let request = config.request();
    debug!(?request, %endpoint, "summarized query");

    let client = RagClient::new(transport, config.base_url.as_str());
    let response = client.search(endpoint, &request)?;
    Ok((request.query, response))
}
