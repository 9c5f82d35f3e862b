//! # Summarist
//!
//! Summarise article text into a fixed markdown callout using an LLM.
//!
//! ## Features
//!
//! - **Provider Agnostic**: a local Ollama model, OpenAI-style chat completions or Anthropic-style messages behind one `Provider` trait
//! - **Strict Errors**: every failure maps onto a small `ErrorKind` taxonomy; nothing is retried
//! - **Format Check**: summaries missing a section of the callout are flagged, not rejected

pub mod agent;
pub mod clipboard;
pub mod config;
pub mod extract;
pub mod prompt;
pub mod provider;
pub mod summary;
pub mod ui;

pub use config::{EnvLookup, ProcessEnv, ProviderConfig, ProviderKind, Settings};
pub use provider::Provider;
pub use summary::{ErrorKind, Summary, SummaryError, SummaryRequest};
