//! Summary types - requests, results and the error taxonomy shared by every provider.

use crate::config::ProviderConfig;
use std::fmt;
use thiserror::Error;

/// Coarse classification of a failed summarisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingCredential,
    ServiceUnavailable,
    AuthFailure,
    RateLimited,
    BadResponse,
    EmptyInput,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::MissingCredential => "missing credential",
            ErrorKind::ServiceUnavailable => "service unavailable",
            ErrorKind::AuthFailure => "authentication failed",
            ErrorKind::RateLimited => "rate limited",
            ErrorKind::BadResponse => "bad response",
            ErrorKind::EmptyInput => "empty input",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("{0} is not set; add it to your environment or .env file")]
    MissingCredential(String),
    #[error("could not reach provider: {0}")]
    ServiceUnavailable(String),
    #[error("provider rejected the credentials: {0}")]
    AuthFailure(String),
    #[error("provider rate limit hit: {0}")]
    RateLimited(String),
    #[error("unexpected response from provider: {0}")]
    BadResponse(String),
    #[error("no article text provided")]
    EmptyInput,
}

impl SummaryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SummaryError::MissingCredential(_) => ErrorKind::MissingCredential,
            SummaryError::ServiceUnavailable(_) => ErrorKind::ServiceUnavailable,
            SummaryError::AuthFailure(_) => ErrorKind::AuthFailure,
            SummaryError::RateLimited(_) => ErrorKind::RateLimited,
            SummaryError::BadResponse(_) => ErrorKind::BadResponse,
            SummaryError::EmptyInput => ErrorKind::EmptyInput,
        }
    }
}

/// One prompt bound to the provider configuration it will be sent with.
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    prompt: String,
    config: ProviderConfig,
}

impl SummaryRequest {
    pub fn new(prompt: String, config: ProviderConfig) -> Self {
        Self { prompt, config }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

/// A completed summary as handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// The model output, exactly as the provider returned it
    pub text: String,
    /// Whether the clipboard write succeeded
    pub copied_to_clipboard: bool,
    /// Format sections the model left out
    pub missing_sections: Vec<Section>,
}

/// Sections of the callout the prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Abstract,
    Details,
    WhyItMatters,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Abstract, Section::Details, Section::WhyItMatters];

    /// The bold heading that opens this section in the callout
    pub fn marker(self) -> &'static str {
        match self {
            Section::Abstract => "**Summary:**",
            Section::Details => "**The details:**",
            Section::WhyItMatters => "**Why it matters:**",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Abstract => "Summary",
            Section::Details => "The details",
            Section::WhyItMatters => "Why it matters",
        };
        f.write_str(name)
    }
}

/// Sections whose heading does not appear in `text`.
///
/// Matching is case-insensitive. Models drift on this format regularly, so
/// callers treat a non-empty result as a warning rather than a failure.
pub fn missing_sections(text: &str) -> Vec<Section> {
    let lower = text.to_lowercase();
    Section::ALL
        .into_iter()
        .filter(|section| !lower.contains(&section.marker().to_lowercase()))
        .collect()
}
