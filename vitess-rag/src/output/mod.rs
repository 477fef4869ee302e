//! Terminal rendering for service replies.
//!
//! Everything goes to stdout, errors included. Colors come from `console`
//! and switch off automatically when stdout is not a terminal.

use std::io::Write;

use console::style;
use serde::Serialize;

use crate::domain::{ANNOTATED_VERSIONS, PromptResponse, QueryResponse, SearchResult};
use crate::error::{Result, VitessRagError};

const SECTION_RULE: &str = "===================================";
const RESULT_RULE: &str = "-----------------------------------";
const SUMMARY_CLOSE: &str = "================================";

/// Which summarizing endpoint produced a reply. Selects the banner and the
/// layout of the `--full` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    Enhanced,
    Raw,
}

impl SummaryKind {
    const fn banner(self) -> &'static str {
        match self {
            Self::Enhanced => "=====summarized enhanced query response=====",
            Self::Raw => "=====summarized raw query response=====",
        }
    }
}

pub fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value).map_err(VitessRagError::Serialization)?;
    writeln!(out, "{pretty}")?;
    Ok(())
}

/// Standard search listing: header with count and query, then each result.
pub fn render_query<W: Write>(out: &mut W, query: &str, response: &QueryResponse) -> Result<()> {
    writeln!(
        out,
        "\nFound {} results for query: \"{query}\"",
        response.results.len()
    )?;
    writeln!(out, "{SECTION_RULE}")?;
    render_results(out, &response.results)
}

/// Summary block, then the search details when `full` is set.
pub fn render_summary<W: Write>(
    out: &mut W,
    kind: SummaryKind,
    query: &str,
    response: &QueryResponse,
    full: bool,
) -> Result<()> {
    render_summary_block(out, kind, response)?;

    if !full {
        return Ok(());
    }

    match kind {
        SummaryKind::Enhanced => {
            if let Some(enhanced) = response.enhanced_query() {
                render_rewrite(out, query, enhanced)?;
            }
            writeln!(out, "\nFound {} search results", response.results.len())?;
        }
        SummaryKind::Raw => {
            writeln!(
                out,
                "\nFound {} search results for query: \"{query}\"",
                response.results.len()
            )?;
        }
    }
    writeln!(out, "{SECTION_RULE}")?;
    render_results(out, &response.results)
}

/// Root-command flavor of the enhanced view: the full section only appears
/// when the server reported a rewritten query.
pub fn render_root_summary<W: Write>(
    out: &mut W,
    query: &str,
    response: &QueryResponse,
    full: bool,
) -> Result<()> {
    render_summary_block(out, SummaryKind::Enhanced, response)?;

    let Some(enhanced) = response.enhanced_query().filter(|_| full) else {
        return Ok(());
    };

    render_rewrite(out, query, enhanced)?;
    writeln!(out, "\nFound {} search results", response.results.len())?;
    writeln!(out, "{SECTION_RULE}")?;
    render_results(out, &response.results)
}

pub fn render_prompt<W: Write>(out: &mut W, response: &PromptResponse) -> Result<()> {
    writeln!(out, "\n===== GEMINI MODEL RESPONSE =====")?;
    writeln!(out, "{}", response.response)?;
    writeln!(out, "=================================\n")?;
    Ok(())
}

pub fn render_versions<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\nAvailable Vitess Documentation Versions:")?;
    writeln!(out, "-------------------------------------")?;
    for (label, note) in ANNOTATED_VERSIONS {
        writeln!(out, "{label:<22}- {note}")?;
    }
    Ok(())
}

/// Print a terminal error for the current invocation.
///
/// Status errors are followed by the server's error body, pretty-printed,
/// when it decoded as a JSON object.
pub fn report_error<W: Write>(out: &mut W, err: &VitessRagError) -> Result<()> {
    writeln!(out, "{}", style(err).red())?;

    if let VitessRagError::HttpStatus {
        body: Some(body), ..
    } = err
    {
        print_json(out, body)?;
    }
    Ok(())
}

fn render_summary_block<W: Write>(
    out: &mut W,
    kind: SummaryKind,
    response: &QueryResponse,
) -> Result<()> {
    if let Some(summary) = response.summary() {
        writeln!(out, "\n{}", kind.banner())?;
        writeln!(out, "{summary}")?;
        writeln!(out, "{SUMMARY_CLOSE}\n")?;
    }
    Ok(())
}

fn render_rewrite<W: Write>(out: &mut W, query: &str, enhanced: &str) -> Result<()> {
    writeln!(out, "\nOriginal query: \"{query}\"")?;
    writeln!(out, "Enhanced query: \"{enhanced}\"")?;
    Ok(())
}

fn render_results<W: Write>(out: &mut W, results: &[SearchResult]) -> Result<()> {
    for (i, result) in results.iter().enumerate() {
        let heading = format!("Result {} (Score: {:.4}):", i + 1, result.similarity_score);
        writeln!(out, "\n{}", style(heading).bold())?;
        writeln!(out, "{RESULT_RULE}")?;
        writeln!(out, "Title: {}", result.metadata.title)?;
        writeln!(out, "URL: {}", result.metadata.url)?;
        writeln!(out, "Version: {}", result.metadata.version)?;
        writeln!(out, "\nContent:")?;
        writeln!(out, "{}", result.document)?;
    }
    Ok(())
}
