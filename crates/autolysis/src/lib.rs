//! Autolysis: single-pass dataset summarizer.
//!
//! Given a delimited data file, autolysis detects its encoding, loads it,
//! computes descriptive statistics, asks a language model to narrate them,
//! draws a few charts and writes a Markdown report referencing them.
//!
//! # Stages
//!
//! - **Load**: encoding detection, lossy decoding, delimiter detection
//! - **Summarize**: column classification and descriptive statistics
//! - **Narrate**: one chat-completion request with the statistics text
//! - **Visualize**: histograms and a correlation heatmap of numeric columns
//! - **Write**: `README.md` with the story and image links
//!
//! # Example
//!
//! ```no_run
//! use autolysis::Autolysis;
//!
//! let outcome = Autolysis::new().run("data.csv", |_| {}).unwrap();
//!
//! println!("Encoding: {}", outcome.source.encoding);
//! println!("Charts: {}", outcome.artifacts.len());
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod llm;
pub mod report;
pub mod schema;
pub mod summary;
pub mod visualize;

mod pipeline;

pub use crate::pipeline::{Autolysis, Progress, ReportStatus, RunOutcome, Stage};
pub use config::AppConfig;
pub use error::{AutolysisError, ErrorCategory, Result};
pub use input::{DataTable, Parser, SourceMetadata};
pub use llm::{AiProxyClient, AiProxyNarrator, ChatMessage, Credential, MockNarrator, Narrative, NarrativeSource, Narrator};
pub use schema::{ColumnSchema, ColumnType, TableSchema};
pub use summary::DescribeTable;
pub use visualize::{Artifact, ArtifactKind, Chart, ChartRenderer, PlottersRenderer, VisualizationPlan};
