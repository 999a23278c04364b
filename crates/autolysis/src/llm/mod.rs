//! LLM integration: the AI proxy client and the narrators built on it.
//!
//! The pipeline sends the statistics summary as a single user message to the
//! chat-completions endpoint and keeps `choices[0].message.content`. A
//! response without that field yields a placeholder narrative rather than an
//! error; a non-success status is an error.
//!
//! # Example
//!
//! ```no_run
//! use autolysis::{AppConfig, AiProxyNarrator, Narrator};
//!
//! let narrator = AiProxyNarrator::new(AppConfig::default());
//! let narrative = narrator.narrate("       age\ncount    3").unwrap();
//! println!("{}", narrative.text);
//! ```

mod client;
mod mock;
mod narrator;
mod prompts;

pub use client::{AiProxyClient, ChatMessage, Credential, extract_content};
pub use mock::MockNarrator;
pub use narrator::{AiProxyNarrator, Narrative, NarrativeSource, Narrator, PLACEHOLDER_NARRATIVE};
pub use prompts::narration_prompt;
