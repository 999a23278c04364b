//! Prompt templates for LLM interactions.

/// Build the narration prompt for a statistics summary.
pub fn narration_prompt(summary: &str) -> String {
    format!("Summarize this dataset for storytelling:\n\n{}", summary)
}
