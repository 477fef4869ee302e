use std::io;
use std::process;

use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;
use vitess_rag::adapters::HttpTransport;
use vitess_rag::cli::{self, Cli};

fn init_tracing(verbose: bool) {
    // Logs stay off unless --verbose, so they never interleave with rendered
    // output. With --verbose, RUST_LOG wins when set.
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vitess_rag=debug"))
    } else {
        EnvFilter::new("off")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = match Cli::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp => {
                let _ = err.print();
                return;
            }
            _ => {
                println!("{err}");
                process::exit(1);
            }
        },
    };

    init_tracing(cli.verbose);

    let mut stdout = io::stdout().lock();
    if let Err(err) = cli::run(cli, HttpTransport::new(), &mut stdout) {
        eprintln!("{err}");
        process::exit(1);
    }
}
