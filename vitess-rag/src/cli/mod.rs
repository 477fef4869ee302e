use std::ffi::OsString;
use std::io::Write;

use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{ArgAction, Args, CommandFactory, FromArgMatches, Parser, Subcommand};

use crate::config::{
    DEFAULT_BASE_URL, DEFAULT_INCLUDE_RESOURCES, DEFAULT_N_RESULTS, DEFAULT_VERSION, PromptConfig,
    QueryConfig,
};
use crate::domain::bare_tokens;
use crate::error::Result;
use crate::output::{self, SummaryKind};
use crate::ports::Transport;

mod prompt;
mod query;
mod summarize;
mod versions;

const USAGE_GUIDE: &str = "\
Examples:
  Enhanced query (AI-improved search):
    vitess-rag -q \"your query\"                      AI-enhanced search with summary only
    vitess-rag -q \"your query\" v21.0                Specify just the version (other params default)
    vitess-rag -q \"your query\" v21.0 15             Specify version and result count
    vitess-rag -q \"your query\" v21.0 15 false       Specify all parameters
    vitess-rag -q \"your query\" -f                   Show full results with search results

  Raw query (direct search):
    vitess-rag raw -q \"your query\"                  Raw search with summary only
    vitess-rag raw -q \"your query\" v21.0 15 false   Specify all parameters
    vitess-rag raw -q \"your query\" -f               Show full results with search results

  Standard query (no AI enhancement):
    vitess-rag query -q \"your query\"                Standard vector search
    vitess-rag query -q \"your query\" v21.0 15 false Specify all parameters

Defaults:
  Version: v22.0 (Development)
  Number of results: 10
  Include common resources: true

Positional arguments MUST come after the -q/--query flag and its value.
  Correct:   vitess-rag -q \"your query\" v21.0 15 false
  Incorrect: vitess-rag v21.0 -q \"your query\" 15 false

Short version formats (e.g. \"v21.0\") are expanded to their full form
(e.g. \"v21.0 (Stable)\"). Run `vitess-rag versions` to list them.";

#[derive(Parser, Debug)]
#[command(name = "vitess-rag")]
#[command(about = "CLI for Vitess RAG API interaction")]
#[command(
    long_about = "A command-line interface for the Vitess documentation RAG service with AI-powered search.\n\n\
                  With -q and no subcommand, runs an AI-enhanced query and shows the summary."
)]
#[command(after_long_help = USAGE_GUIDE)]
pub struct Cli {
    #[arg(long, global = true, help = "Log request details to stderr")]
    pub verbose: bool,

    #[arg(short, long, help = "Search query")]
    pub query: Option<String>,

    #[command(flatten)]
    pub options: SearchOptions,

    #[arg(short, long, help = FULL_HELP)]
    pub full: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse a command line. Root search flags and a subcommand are mutually
    /// exclusive; mixing them is a usage error.
    pub fn parse_args<I, T>(argv: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut cmd = Self::command();
        let matches = cmd.try_get_matches_from_mut(argv)?;

        if let Some((name, _)) = matches.subcommand() {
            let root_flags: Vec<String> = matches
                .ids()
                .filter(|id| matches.value_source(id.as_str()) == Some(ValueSource::CommandLine))
                .filter_map(|id| cmd.get_arguments().find(|arg| arg.get_id() == id))
                .filter(|arg| !arg.is_global_set())
                .map(ToString::to_string)
                .collect();

            if !root_flags.is_empty() {
                let message = format!(
                    "the subcommand '{name}' cannot be used with '{}'",
                    root_flags.join("', '")
                );
                return Err(cmd.error(ErrorKind::ArgumentConflict, message));
            }
        }

        Self::from_arg_matches(&matches).map_err(|err| err.format(&mut cmd))
    }
}

const FULL_HELP: &str =
    "Show full results including search results (by default, only shows AI summary)";

/// Flags shared by every search command, plus trailing positional overrides.
#[derive(Args, Debug, Clone)]
pub struct SearchOptions {
    #[arg(
        short = 'v',
        long = "version",
        default_value = DEFAULT_VERSION,
        help = "Documentation version"
    )]
    pub doc_version: String,

    #[arg(
        short = 'n',
        long = "nresults",
        default_value_t = DEFAULT_N_RESULTS,
        help = "Number of results"
    )]
    pub n_results: u32,

    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = DEFAULT_INCLUDE_RESOURCES,
        default_missing_value = "true",
        value_name = "BOOL",
        help = "Include common resources"
    )]
    pub include_resources: bool,

    #[arg(
        short = 'u',
        long = "url",
        default_value = DEFAULT_BASE_URL,
        help = "FastAPI base URL (without endpoint path)"
    )]
    pub url: String,

    #[arg(short, long, help = "Output raw JSON response")]
    pub json: bool,

    #[arg(
        value_name = "OVERRIDES",
        help = "Positional overrides, in order: version, result count, include resources"
    )]
    pub overrides: Vec<String>,
}

impl SearchOptions {
    /// Flag values first, then any positional overrides on top.
    pub fn into_config(self, query: String, full: bool) -> QueryConfig {
        let mut config = QueryConfig::new(query)
            .with_base_url(self.url)
            .with_json(self.json)
            .with_full(full);
        config.params.version = self.doc_version;
        config.params.n_results = self.n_results;
        config.params.include_resources = self.include_resources;
        config.with_positionals(&bare_tokens(&self.overrides))
    }
}

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    #[arg(short, long, help = "Search query")]
    pub query: String,

    #[command(flatten)]
    pub options: SearchOptions,
}

impl QueryArgs {
    pub fn into_config(self, full: bool) -> QueryConfig {
        self.options.into_config(self.query, full)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Send query to FastAPI endpoint")]
    #[command(
        long_about = "Send a query to the standard endpoint.\n\
                      This performs a vector search on the Vitess documentation without any AI enhancement."
    )]
    Query(QueryArgs),

    #[command(about = "Send AI-enhanced query to search Vitess docs")]
    #[command(
        long_about = "Send a query that is first enhanced by AI before searching.\n\
                      The service rewrites your query for better recall, then returns both search results\n\
                      and an AI-generated summary that answers your question.\n\n\
                      By default, only the AI summary is shown. Use --full to see search results."
    )]
    Enhanced {
        #[command(flatten)]
        args: QueryArgs,

        #[arg(short, long, help = FULL_HELP)]
        full: bool,
    },

    #[command(about = "Send raw query and get AI-summarized results")]
    #[command(
        long_about = "Send a raw query to search Vitess docs and get AI-summarized results.\n\
                      This skips the query enhancement step but still uses AI to summarize the results.\n\n\
                      By default, only the AI summary is shown. Use --full to see search results."
    )]
    Raw {
        #[command(flatten)]
        args: QueryArgs,

        #[arg(short, long, help = FULL_HELP)]
        full: bool,
    },

    #[command(about = "Test the Gemini model directly")]
    #[command(
        long_about = "Send a prompt directly to the Gemini model for testing.\n\
                      This bypasses the RAG system and sends your prompt straight to the model."
    )]
    Test {
        #[arg(short, long, help = "Prompt to send to Gemini model")]
        prompt: String,

        #[arg(
            short = 'u',
            long = "url",
            default_value = DEFAULT_BASE_URL,
            help = "FastAPI base URL (without endpoint path)"
        )]
        url: String,
    },

    #[command(about = "List available Vitess documentation versions")]
    Versions,
}

/// Dispatch a parsed command line.
///
/// Service errors are printed to `out` and end the invocation normally;
/// only failures to write output come back as `Err`.
pub fn run<T, W>(cli: Cli, transport: T, out: &mut W) -> Result<()>
where
    T: Transport,
    W: Write,
{
    match dispatch(cli, transport, out) {
        Err(err) if err.is_reported() => output::report_error(out, &err),
        other => other,
    }
}

fn dispatch<T, W>(cli: Cli, transport: T, out: &mut W) -> Result<()>
where
    T: Transport,
    W: Write,
{
    match cli.command {
        Some(Commands::Query(args)) => query::run(args.into_config(false), transport, out),
        Some(Commands::Enhanced { args, full }) => summarize::run(
            SummaryKind::Enhanced,
            args.into_config(full),
            transport,
            out,
        ),
        Some(Commands::Raw { args, full }) => {
            summarize::run(SummaryKind::Raw, args.into_config(full), transport, out)
        }
        Some(Commands::Test { prompt: text, url }) => {
            prompt::run(PromptConfig::new(text, url), transport, out)
        }
        Some(Commands::Versions) => versions::run(out),
        None => match cli.query.filter(|q| !q.is_empty()) {
            Some(text) => {
                summarize::run_root(cli.options.into_config(text, cli.full), transport, out)
            }
            None => {
                write!(out, "{}", Cli::command().render_long_help())?;
                Ok(())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("vitess-rag").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn root_query_with_positionals() {
        let cli = parse(&["-q", "how to reshard", "v21.0", "15", "false"]);
        assert!(cli.command.is_none());
        let config = cli.options.into_config(cli.query.unwrap(), cli.full);

        assert_eq!(config.query, "how to reshard");
        assert_eq!(config.params.version, "v21.0 (Stable)");
        assert_eq!(config.params.n_results, 15);
        assert!(!config.params.include_resources);
    }

    #[test]
    fn flag_defaults() {
        let cli = parse(&["query", "-q", "vtgate"]);
        let Some(Commands::Query(args)) = cli.command else {
            panic!("expected query subcommand");
        };
        let config = args.into_config(false);
        assert_eq!(config.params.version, DEFAULT_VERSION);
        assert_eq!(config.params.n_results, 10);
        assert!(config.params.include_resources);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(!config.json);
    }

    #[test]
    fn explicit_flags() {
        let cli = parse(&[
            "raw",
            "-q",
            "vtgate",
            "-v",
            "v19.0 (Archived)",
            "-n",
            "3",
            "--include-resources=false",
            "-u",
            "http://localhost:8000",
            "-j",
            "-f",
        ]);
        let Some(Commands::Raw { args, full }) = cli.command else {
            panic!("expected raw subcommand");
        };
        let config = args.into_config(full);
        assert_eq!(config.params.version, "v19.0 (Archived)");
        assert_eq!(config.params.n_results, 3);
        assert!(!config.params.include_resources);
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.json);
        assert!(config.full);
    }

    #[test]
    fn bare_include_resources_means_true() {
        let cli = parse(&["enhanced", "-q", "x", "--include-resources"]);
        let Some(Commands::Enhanced { args, .. }) = cli.command else {
            panic!("expected enhanced subcommand");
        };
        assert!(args.options.include_resources);

        let cli = parse(&["enhanced", "-q", "x", "--include-resources=false"]);
        let Some(Commands::Enhanced { args, .. }) = cli.command else {
            panic!("expected enhanced subcommand");
        };
        assert!(!args.options.include_resources);
    }

    #[test]
    fn bare_include_resources_leaves_next_token_positional() {
        let cli = parse(&["query", "-q", "x", "--include-resources", "v21.0", "15"]);
        let Some(Commands::Query(args)) = cli.command else {
            panic!("expected query subcommand");
        };
        let config = args.into_config(false);
        assert_eq!(config.params.version, "v21.0 (Stable)");
        assert_eq!(config.params.n_results, 15);
        assert!(config.params.include_resources);

        let cli = parse(&["query", "-q", "x", "--include-resources", "false"]);
        let Some(Commands::Query(args)) = cli.command else {
            panic!("expected query subcommand");
        };
        let config = args.into_config(false);
        assert_eq!(config.params.version, "false");
        assert!(config.params.include_resources);
    }

    fn parse_args(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::parse_args(std::iter::once("vitess-rag").chain(args.iter().copied()))
    }

    #[test]
    fn root_flags_conflict_with_subcommands() {
        for args in [
            &["-q", "foo", "versions"][..],
            &["-q", "foo", "-n", "3", "versions"],
            &["-j", "raw", "-q", "x"],
            &["-f", "enhanced", "-q", "x"],
            &["-u", "http://h", "test", "-p", "hi"],
        ] {
            let err = parse_args(args).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ArgumentConflict, "{args:?}");
        }
    }

    #[test]
    fn subcommands_and_root_queries_parse_on_their_own() {
        let cli = parse_args(&["versions"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Versions)));

        let cli = parse_args(&["-q", "foo", "v21.0", "5"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.options.overrides, ["v21.0", "5"]);

        let cli = parse_args(&["--verbose", "query", "-q", "x"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Query(_))));

        let cli = parse_args(&["raw", "-q", "x", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn subcommands_require_query() {
        for sub in ["query", "enhanced", "raw"] {
            let err = Cli::try_parse_from(["vitess-rag", sub]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        }
        let err = Cli::try_parse_from(["vitess-rag", "test"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn query_subcommand_has_no_full_flag() {
        assert!(Cli::try_parse_from(["vitess-rag", "query", "-q", "x", "-f"]).is_err());
    }

    #[test]
    fn versions_takes_no_arguments() {
        assert!(Cli::try_parse_from(["vitess-rag", "versions", "extra"]).is_err());
    }
}
