//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Autolysis: summarize a dataset, narrate it with an LLM and chart it
#[derive(Parser)]
#[command(name = "autolysis")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the data file (CSV/TSV)
    #[arg(value_name = "DATASET")]
    pub file: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
