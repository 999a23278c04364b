//! Run configuration.

use std::path::PathBuf;

/// Immutable settings for one run, built once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the OpenAI-compatible proxy, with or without trailing slash.
    pub api_base_url: String,
    /// Path of the chat-completions endpoint under the base URL.
    pub chat_endpoint: String,
    /// Path of the embeddings endpoint under the base URL.
    pub embeddings_endpoint: String,
    /// Environment variable holding the bearer token.
    pub token_env_var: String,
    /// Model used for narration.
    pub chat_model: String,
    /// Model used for embeddings.
    pub embedding_model: String,
    /// Directory that receives charts and the report.
    pub output_dir: PathBuf,
    /// File name of the Markdown report.
    pub report_file: String,
    /// Number of histogram bins.
    pub histogram_bins: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://aiproxy.sanand.workers.dev/openai/v1/".to_string(),
            chat_endpoint: "chat/completions".to_string(),
            embeddings_endpoint: "embeddings".to_string(),
            token_env_var: "AIPROXY_TOKEN".to_string(),
            chat_model: "gpt-4o-mini".to_string(),
            embedding_model: "text-embedding-3-small".to_string(),
            output_dir: PathBuf::from("."),
            report_file: "README.md".to_string(),
            histogram_bins: 10,
        }
    }
}

impl AppConfig {
    /// Full URL for an endpoint path.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Use a different output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Point the API client at a different base URL.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Read the bearer token from a different variable.
    pub fn with_token_env_var(mut self, var: impl Into<String>) -> Self {
        self.token_env_var = var.into();
        self
    }
}
