use std::io::Write;

use tracing::debug;

use crate::config::QueryConfig;
use crate::domain::Endpoint;
use crate::error::Result;
use crate::output;
use crate::ports::Transport;
use crate::services::RagClient;

pub fn run<T, W>(config: QueryConfig, transport: T, out: &mut W) -> Result<()>
where
    T: Transport,
    W: Write,
{
    let request = config.request();
    debug!(?request, "standard query");

    let client = RagClient::new(transport, config.base_url);
    let response = client.search(Endpoint::Query, &request)?;

    if config.json {
        return output::print_json(out, &response);
    }
    output::render_query(out, &request.query, &response)
}
