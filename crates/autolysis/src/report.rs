//! Markdown report assembly.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AutolysisError, Result};
use crate::visualize::Artifact;

/// Story embedded in the report: the narrative plus a list of the charts.
pub fn compose_story(narrative: &str, artifacts: &[Artifact]) -> String {
    let mut story = String::from("### Dataset Story\n");
    story.push_str("Here is the summary of the dataset:\n\n");
    story.push_str(narrative);
    story.push_str("\n\n### Visual Insights\n");
    story.push_str("The following visualizations were generated based on the dataset:\n");
    for artifact in artifacts {
        story.push_str(&format!("- {}\n", artifact.file_name));
    }
    story
}

/// Report text for a story and its images, images in the given order.
pub fn render_report(story: &str, artifacts: &[Artifact]) -> String {
    let mut report = String::from("# Analysis Report\n\n");
    report.push_str("## Generated Story\n");
    report.push_str(story);
    report.push_str("\n\n## Visualizations\n");
    for artifact in artifacts {
        report.push_str(&format!("![{0}]({0})\n", artifact.file_name));
    }
    report
}

/// Write the report as `file_name` inside `dir`, replacing any existing file.
pub fn write_report(
    dir: &Path,
    file_name: &str,
    story: &str,
    artifacts: &[Artifact],
) -> Result<PathBuf> {
    let path = dir.join(file_name);
    fs::write(&path, render_report(story, artifacts)).map_err(|e| AutolysisError::Report {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualize::ArtifactKind;

    fn artifact(file_name: &str) -> Artifact {
        Artifact {
            kind: ArtifactKind::CorrelationHeatmap,
            file_name: file_name.to_string(),
            path: PathBuf::from(file_name),
        }
    }

    #[test]
    fn test_report_layout() {
        let artifacts = [artifact("age_distribution.png"), artifact("correlation_heatmap.png")];
        let report = render_report("Story text.", &artifacts);

        assert_eq!(
            report,
            "# Analysis Report\n\n\
             ## Generated Story\n\
             Story text.\n\n\
             ## Visualizations\n\
             ![age_distribution.png](age_distribution.png)\n\
             ![correlation_heatmap.png](correlation_heatmap.png)\n"
        );
    }

    #[test]
    fn test_empty_visualizations_section() {
        let report = render_report("Nothing numeric.", &[]);
        assert!(report.ends_with("## Visualizations\n"));
    }

    #[test]
    fn test_story_lists_artifacts_after_narrative() {
        let story = compose_story("The data is tidy.", &[artifact("x_distribution.png")]);
        assert_eq!(
            story,
            "### Dataset Story\n\
             Here is the summary of the dataset:\n\n\
             The data is tidy.\n\n\
             ### Visual Insights\n\
             The following visualizations were generated based on the dataset:\n\
             - x_distribution.png\n"
        );
    }

    #[test]
    fn test_write_report_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "old contents").unwrap();

        let path = write_report(dir.path(), "README.md", "new", &[]).unwrap();
        let written = fs::read_to_string(path).unwrap();
        assert!(written.starts_with("# Analysis Report"));
        assert!(!written.contains("old contents"));
    }

    #[test]
    fn test_write_report_failure_is_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_report(&dir.path().join("missing"), "README.md", "x", &[]).unwrap_err();
        assert_eq!(err.category(), crate::error::ErrorCategory::Output);
    }
}
