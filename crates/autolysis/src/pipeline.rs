//! The `Autolysis` pipeline and its public API.

use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::error::{AutolysisError, Result};
use crate::input::{Parser, SourceMetadata};
use crate::llm::{AiProxyNarrator, Narrative, Narrator};
use crate::report::{compose_story, write_report};
use crate::schema::classify_table;
use crate::summary::{DescribeTable, describe};
use crate::visualize::{self, Artifact, ChartRenderer, PlottersRenderer};

/// Pipeline stages, in the only order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Load,
    Summarize,
    Narrate,
    Visualize,
    Write,
}

/// Progress notifications emitted while a run advances.
#[derive(Debug)]
pub enum Progress<'a> {
    /// The run started for this dataset.
    Analyzing(&'a Path),
    /// A stage is about to run.
    StageStarted(Stage),
    /// Encoding detection finished.
    EncodingDetected(&'a str),
    /// The dataset was parsed.
    Loaded(&'a SourceMetadata),
    /// No numeric column exists, so no chart will be drawn.
    NoNumericColumns,
    /// The report was written.
    ReportWritten(&'a Path),
    /// Writing the report failed; the run still succeeds.
    ReportFailed(&'a AutolysisError),
}

/// Whether the report made it to disk.
#[derive(Debug)]
pub enum ReportStatus {
    Written(PathBuf),
    Failed(AutolysisError),
}

/// Everything a completed run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub source: SourceMetadata,
    pub summary: DescribeTable,
    pub narrative: Narrative,
    pub artifacts: Vec<Artifact>,
    pub report: ReportStatus,
}

/// Main entry point: load, summarize, narrate, visualize, write.
///
/// # Example
///
/// ```no_run
/// use autolysis::{Autolysis, MockNarrator};
///
/// let outcome = Autolysis::new()
///     .with_narrator(MockNarrator::new())
///     .run("data.csv", |_| {})
///     .unwrap();
/// println!("{} charts", outcome.artifacts.len());
/// ```
pub struct Autolysis {
    config: AppConfig,
    parser: Parser,
    narrator: Box<dyn Narrator>,
    renderer: Box<dyn ChartRenderer>,
}

impl Autolysis {
    /// Create a pipeline with the default configuration, the AI proxy
    /// narrator and the plotters renderer.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a pipeline with a custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            narrator: Box::new(AiProxyNarrator::new(config.clone())),
            renderer: Box::new(PlottersRenderer::new()),
            parser: Parser::new(),
            config,
        }
    }

    /// Use a different narrator.
    pub fn with_narrator<N: Narrator + 'static>(mut self, narrator: N) -> Self {
        self.narrator = Box::new(narrator);
        self
    }

    /// Use a different chart renderer.
    pub fn with_renderer<R: ChartRenderer + 'static>(mut self, renderer: R) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run every stage on the dataset at `path`.
    ///
    /// Fatal errors stop the run and are returned. A report that cannot be
    /// written is recorded in [`RunOutcome::report`] instead.
    pub fn run(
        &self,
        path: impl AsRef<Path>,
        mut on_progress: impl FnMut(Progress<'_>),
    ) -> Result<RunOutcome> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AutolysisError::NotFound(path.to_path_buf()));
        }
        on_progress(Progress::Analyzing(path));

        on_progress(Progress::StageStarted(Stage::Load));
        let (table, source) = self.parser.parse_file(path)?;
        on_progress(Progress::EncodingDetected(&source.encoding));
        on_progress(Progress::Loaded(&source));

        on_progress(Progress::StageStarted(Stage::Summarize));
        let schema = classify_table(&table);
        let summary = describe(&table, &schema);
        let summary_text = summary.to_string();
        tracing::debug!(columns = summary.columns.len(), "summarized dataset");

        on_progress(Progress::StageStarted(Stage::Narrate));
        let narrative = self.narrator.narrate(&summary_text)?;
        tracing::debug!(
            narrator = self.narrator.name(),
            placeholder = narrative.is_placeholder(),
            "received narrative"
        );

        on_progress(Progress::StageStarted(Stage::Visualize));
        let plan = visualize::plan(&table, &schema, self.config.histogram_bins);
        if plan.is_empty() {
            on_progress(Progress::NoNumericColumns);
        }
        let artifacts = visualize::generate(&plan, self.renderer.as_ref(), &self.config.output_dir)?;

        on_progress(Progress::StageStarted(Stage::Write));
        let story = compose_story(&narrative.text, &artifacts);
        let report = match write_report(
            &self.config.output_dir,
            &self.config.report_file,
            &story,
            &artifacts,
        ) {
            Ok(report_path) => {
                on_progress(Progress::ReportWritten(&report_path));
                ReportStatus::Written(report_path)
            }
            Err(e) => {
                tracing::debug!(error = %e, "report was not written");
                on_progress(Progress::ReportFailed(&e));
                ReportStatus::Failed(e)
            }
        };

        Ok(RunOutcome {
            source,
            summary,
            narrative,
            artifacts,
            report,
        })
    }
}

impl Default for Autolysis {
    fn default() -> Self {
        Self::new()
    }
}
