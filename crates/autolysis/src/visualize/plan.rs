//! Which charts a dataset gets.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::correlation::correlation_matrix;
use super::histogram::Histogram;
use crate::input::DataTable;
use crate::schema::{TableSchema, numeric_values};

/// Number of leading numeric columns that get a histogram.
pub const MAX_HISTOGRAMS: usize = 2;

/// File name of the correlation heatmap.
pub const HEATMAP_FILE: &str = "correlation_heatmap.png";

/// A chart to draw, with the data it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    Histogram {
        column: String,
        histogram: Histogram,
    },
    CorrelationHeatmap {
        columns: Vec<String>,
        matrix: Vec<Vec<f64>>,
    },
}

impl Chart {
    /// File the chart is saved as.
    pub fn file_name(&self) -> String {
        match self {
            Chart::Histogram { column, .. } => format!("{}_distribution.png", column),
            Chart::CorrelationHeatmap { .. } => HEATMAP_FILE.to_string(),
        }
    }

    /// Kind of artifact this chart produces.
    pub fn kind(&self) -> ArtifactKind {
        match self {
            Chart::Histogram { column, .. } => ArtifactKind::Histogram {
                column: column.clone(),
            },
            Chart::CorrelationHeatmap { .. } => ArtifactKind::CorrelationHeatmap,
        }
    }
}

/// Ordered list of charts for one dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisualizationPlan {
    pub charts: Vec<Chart>,
}

impl VisualizationPlan {
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// File names in render order.
    pub fn file_names(&self) -> Vec<String> {
        self.charts.iter().map(Chart::file_name).collect()
    }
}

/// Kind of generated image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ArtifactKind {
    Histogram { column: String },
    CorrelationHeatmap,
}

/// A generated image file referenced by the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub kind: ArtifactKind,
    /// Name used to reference the image from the report.
    pub file_name: String,
    /// Where the image was written.
    pub path: PathBuf,
}

/// Plan the charts for a table.
///
/// Only numeric columns are considered, in table order. The first
/// [`MAX_HISTOGRAMS`] get a histogram; with more than one numeric column a
/// correlation heatmap over all of them follows. No numeric columns gives an
/// empty plan.
pub fn plan(table: &DataTable, schema: &TableSchema, bins: usize) -> VisualizationPlan {
    let numeric: Vec<(String, Vec<Option<f64>>)> = schema
        .numeric_columns()
        .map(|col| (col.name.clone(), numeric_values(table, col.position)))
        .collect();

    let mut charts: Vec<Chart> = numeric
        .iter()
        .take(MAX_HISTOGRAMS)
        .map(|(name, values)| {
            let present: Vec<f64> = values.iter().flatten().copied().collect();
            Chart::Histogram {
                column: name.clone(),
                histogram: Histogram::new(&present, bins),
            }
        })
        .collect();

    if numeric.len() > 1 {
        let (columns, values): (Vec<String>, Vec<Vec<Option<f64>>>) = numeric.into_iter().unzip();
        charts.push(Chart::CorrelationHeatmap {
            matrix: correlation_matrix(&values),
            columns,
        });
    }

    VisualizationPlan { charts }
}
