//! Narration of statistics summaries.

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::Result;

use super::client::{AiProxyClient, ChatMessage, Credential, extract_content};
use super::prompts;

/// Text substituted when the model response has no usable content.
pub const PLACEHOLDER_NARRATIVE: &str = "No response generated.";

/// Where a narrative came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeSource {
    /// Content returned by the model.
    Model,
    /// The response was malformed and the placeholder was used.
    Placeholder,
}

/// Narrative text for the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    pub text: String,
    pub source: NarrativeSource,
}

impl Narrative {
    /// Narrative produced by the model.
    pub fn from_model(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: NarrativeSource::Model,
        }
    }

    /// Placeholder narrative.
    pub fn placeholder() -> Self {
        Self {
            text: PLACEHOLDER_NARRATIVE.to_string(),
            source: NarrativeSource::Placeholder,
        }
    }

    /// Whether the placeholder was substituted.
    pub fn is_placeholder(&self) -> bool {
        self.source == NarrativeSource::Placeholder
    }
}

/// Turns a statistics summary into narrative text.
pub trait Narrator {
    /// Narrate `summary`. Called once per run.
    fn narrate(&self, summary: &str) -> Result<Narrative>;

    /// Get the name of this narrator (for logging/debugging).
    fn name(&self) -> &str;
}

impl<T: Narrator + ?Sized> Narrator for std::rc::Rc<T> {
    fn narrate(&self, summary: &str) -> Result<Narrative> {
        (**self).narrate(summary)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Narrator backed by the AI proxy chat-completions endpoint.
///
/// The credential is read when [`Narrator::narrate`] runs, so a missing
/// token fails before any request is built.
pub struct AiProxyNarrator {
    config: AppConfig,
    credential: Option<Credential>,
}

impl AiProxyNarrator {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            credential: None,
        }
    }

    /// Use `credential` instead of reading the environment.
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }
}

impl Narrator for AiProxyNarrator {
    fn narrate(&self, summary: &str) -> Result<Narrative> {
        let credential = match &self.credential {
            Some(credential) => credential.clone(),
            None => Credential::from_env(&self.config.token_env_var)?,
        };
        let client = AiProxyClient::new(&self.config, credential)?;

        let messages = [ChatMessage::user(prompts::narration_prompt(summary))];
        let response = client.chat_completion(&messages)?;

        match extract_content(&response) {
            Some(text) => Ok(Narrative::from_model(text)),
            None => {
                tracing::warn!(
                    response = %response,
                    "chat response had no choices[0].message.content; using placeholder narrative"
                );
                Ok(Narrative::placeholder())
            }
        }
    }

    fn name(&self) -> &str {
        "aiproxy"
    }
}
