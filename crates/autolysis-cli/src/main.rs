//! Autolysis CLI - dataset summarizer.

mod cli;
mod commands;

use clap::Parser;
use clap::error::ErrorKind;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    init_logging(cli.verbose);

    if let Err(e) = commands::analyze::run(cli.file, cli.verbose) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

/// Send `tracing` output to stderr; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "autolysis=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
