//! Blocking client for the OpenAI-compatible AI proxy.

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::config::AppConfig;
use crate::error::{AutolysisError, Result};

/// Bearer token for the remote API.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    /// Read the token from `var`. Unset or empty is an error.
    pub fn from_env(var: &str) -> Result<Self> {
        Self::from_value(var, std::env::var(var).ok())
    }

    fn from_value(var: &str, value: Option<String>) -> Result<Self> {
        match value {
            Some(token) if !token.is_empty() => Ok(Self(token)),
            _ => Err(AutolysisError::MissingCredential(var.to_string())),
        }
    }

    /// Wrap an already known token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// One role/content pair of a chat request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// A user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Client for the chat-completions and embeddings endpoints.
pub struct AiProxyClient {
    client: Client,
    credential: Credential,
    chat_url: String,
    embeddings_url: String,
    chat_model: String,
    embedding_model: String,
}

impl AiProxyClient {
    /// Create a client for the endpoints named in `config`.
    pub fn new(config: &AppConfig, credential: Credential) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| AutolysisError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            credential,
            chat_url: config.endpoint_url(&config.chat_endpoint),
            embeddings_url: config.endpoint_url(&config.embeddings_endpoint),
            chat_model: config.chat_model.clone(),
            embedding_model: config.embedding_model.clone(),
        })
    }

    /// Create a client reading the token from the configured variable.
    pub fn from_env(config: &AppConfig) -> Result<Self> {
        let credential = Credential::from_env(&config.token_env_var)?;
        Self::new(config, credential)
    }

    /// Build headers for API requests.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&self.credential.bearer())
                .map_err(|e| AutolysisError::Http(format!("Invalid API token: {}", e)))?,
        );
        Ok(headers)
    }

    /// POST a JSON body and return the decoded JSON response.
    fn post(&self, url: &str, body: &Value) -> Result<Value> {
        tracing::debug!(url, "sending API request");

        let response = self
            .client
            .post(url)
            .headers(self.build_headers()?)
            .json(body)
            .send()
            .map_err(|e| AutolysisError::Http(format!("API request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AutolysisError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .map_err(|e| AutolysisError::Http(format!("Failed to parse API response: {}", e)))
    }

    /// Request a chat completion. The raw JSON is returned untouched.
    pub fn chat_completion(&self, messages: &[ChatMessage]) -> Result<Value> {
        let body = json!({
            "model": self.chat_model,
            "messages": messages,
        });
        self.post(&self.chat_url, &body)
    }

    /// Request embedding vectors, one per input, in input order.
    pub fn embeddings(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>> {
        let body = json!({
            "model": self.embedding_model,
            "input": inputs,
        });
        let value = self.post(&self.embeddings_url, &body)?;

        let mut response: EmbeddingResponse = serde_json::from_value(value)?;
        response.data.sort_by_key(|d| d.index);
        Ok(response.data.into_iter().map(|d| d.embedding).collect())
    }
}

/// Embeddings API response structure.
#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    #[serde(default)]
    index: usize,
    embedding: Vec<f32>,
}

/// Pull `choices[0].message.content` out of a chat response.
pub fn extract_content(response: &Value) -> Option<String> {
    response
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(str::to_string)
}
