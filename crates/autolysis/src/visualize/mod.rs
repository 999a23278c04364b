//! Chart selection and rendering.
//!
//! [`plan`] decides which charts a table gets, [`generate`] draws them in
//! order through a [`ChartRenderer`] and returns the artifacts.

mod correlation;
mod histogram;
mod plan;
mod render;

use std::path::Path;

pub use correlation::{correlation_matrix, pearson};
pub use histogram::Histogram;
pub use plan::{Artifact, ArtifactKind, Chart, HEATMAP_FILE, MAX_HISTOGRAMS, VisualizationPlan, plan};
pub use render::{ChartRenderer, PlottersRenderer, annotation, coolwarm};

use crate::error::Result;

/// Render every planned chart into `out_dir`.
///
/// Stops at the first failure; images already written stay on disk.
pub fn generate(
    plan: &VisualizationPlan,
    renderer: &dyn ChartRenderer,
    out_dir: &Path,
) -> Result<Vec<Artifact>> {
    let mut artifacts = Vec::with_capacity(plan.charts.len());

    for chart in &plan.charts {
        let file_name = chart.file_name();
        let path = out_dir.join(&file_name);
        renderer.render(chart, &path)?;
        tracing::debug!(file = %file_name, "rendered chart");

        artifacts.push(Artifact {
            kind: chart.kind(),
            file_name,
            path,
        });
    }

    Ok(artifacts)
}
