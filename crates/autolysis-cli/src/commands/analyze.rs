//! Analyze command - run the whole pipeline on one dataset.

use std::path::PathBuf;

use autolysis::{Autolysis, AutolysisError, Progress, ReportStatus, Stage};
use colored::Colorize;

pub fn run(file: PathBuf, verbose: bool) -> Result<(), AutolysisError> {
    let autolysis = Autolysis::new();
    let report_file = autolysis.config().report_file.clone();

    let outcome = autolysis.run(&file, |progress| match progress {
        Progress::Analyzing(path) => {
            println!(
                "{} {}",
                "Analyzing dataset:".cyan().bold(),
                path.display().to_string().white()
            );
        }
        Progress::EncodingDetected(encoding) => {
            println!("Detected encoding: {}", encoding.white().bold());
        }
        Progress::Loaded(source) => {
            println!(
                "{} ({} rows, {} columns)",
                "Dataset loaded successfully.".green(),
                source.row_count,
                source.column_count
            );
            if source.had_replacements {
                println!(
                    "{}",
                    "Some bytes could not be decoded and were replaced.".yellow()
                );
            }
        }
        Progress::StageStarted(Stage::Narrate) => {
            println!("{}", "Requesting narrative...".cyan());
        }
        Progress::StageStarted(Stage::Visualize) => {
            println!("{}", "Generating visualizations...".cyan());
        }
        Progress::NoNumericColumns => {
            println!("No numeric columns available for visualizations.");
        }
        Progress::StageStarted(Stage::Write) => {
            println!("{}", format!("Saving {} and visualizations...", report_file).cyan());
        }
        Progress::StageStarted(_) => {}
        Progress::ReportWritten(path) => {
            println!(
                "{} {}",
                "Created".green().bold(),
                path.display().to_string().white()
            );
        }
        Progress::ReportFailed(e) => {
            eprintln!("{} {}", format!("Error saving {}:", report_file).red(), e);
        }
    })?;

    if verbose {
        println!();
        println!("{}", "Columns:".yellow().bold());
        for col in &outcome.summary.columns {
            println!("  {:20} {:12} {} values", col.name, col.column_type.to_string(), col.count);
        }
        println!();
    }

    if outcome.narrative.is_placeholder() {
        println!(
            "{}",
            "The model response had no content; the report uses a placeholder.".yellow()
        );
    }

    if matches!(outcome.report, ReportStatus::Written(_)) {
        println!(
            "Analysis complete for {}. Check the {} and generated images.",
            file.display(),
            report_file
        );
    }

    Ok(())
}
