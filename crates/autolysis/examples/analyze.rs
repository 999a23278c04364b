//! Example: Summarize a CSV file without contacting the AI proxy.
//!
//! Usage:
//!   cargo run --example analyze -- <file_path>
//!
//! Charts and README.md are written to the current directory.

use std::env;
use std::path::Path;

use autolysis::{Autolysis, MockNarrator, Progress, ReportStatus};

fn main() -> autolysis::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example analyze -- <file_path>");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Autolysis: {}", path.display());
    println!("{}", separator);

    let outcome = Autolysis::new()
        .with_narrator(MockNarrator::new())
        .run(path, |progress| {
            if let Progress::StageStarted(stage) = progress {
                println!("  {:?}...", stage);
            }
        })?;

    println!();
    println!(
        "{} rows x {} columns ({})",
        outcome.source.row_count, outcome.source.column_count, outcome.source.encoding
    );
    println!();
    println!("{}", outcome.summary);
    println!();

    for artifact in &outcome.artifacts {
        println!("chart: {}", artifact.path.display());
    }
    match &outcome.report {
        ReportStatus::Written(report) => println!("report: {}", report.display()),
        ReportStatus::Failed(e) => println!("report failed: {}", e),
    }

    Ok(())
}
