use std::io::Write;

use crate::config::PromptConfig;
use crate::domain::PromptRequest;
use crate::error::Result;
use crate::output;
use crate::ports::Transport;
use crate::services::RagClient;

pub fn run<T, W>(config: PromptConfig, transport: T, out: &mut W) -> Result<()>
where
    T: Transport,
    W: Write,
{
    let client = RagClient::new(transport, config.base_url);
    let response = client.prompt(&PromptRequest::new(config.prompt))?;
    output::render_prompt(out, &response)
}
