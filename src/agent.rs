//! Summarisation pipeline.
//!
//! Validates the article, resolves the provider, sends the prompt and hands
//! the result to the clipboard. Each run is independent.

use crate::clipboard::ClipboardWriter;
use crate::config::{EnvLookup, ProviderConfig, ProviderKind, Settings};
use crate::prompt;
use crate::provider::{self, Provider};
use crate::summary::{missing_sections, Summary, SummaryError, SummaryRequest};

/// Summarise `article` with the provider the user picked.
///
/// Empty input and missing credentials are rejected before any network
/// traffic. Provider errors are returned unchanged.
pub async fn run(
    article: &str,
    kind: ProviderKind,
    env: &dyn EnvLookup,
    settings: &Settings,
    clipboard: &mut dyn ClipboardWriter,
) -> Result<Summary, SummaryError> {
    let article = validate_article(article)?;
    let config = settings.provider_config(kind, env)?;
    let provider = provider::build(&config)?;
    summarize_with(article, provider.as_ref(), config, clipboard).await
}

/// Run the pipeline against an already constructed provider.
pub async fn summarize_with(
    article: &str,
    provider: &dyn Provider,
    config: ProviderConfig,
    clipboard: &mut dyn ClipboardWriter,
) -> Result<Summary, SummaryError> {
    let article = validate_article(article)?;
    let request = SummaryRequest::new(prompt::build(article), config);

    tracing::info!(provider = %provider.kind(), chars = article.len(), "generating summary");
    let text = provider.complete(&request).await?;

    let missing = missing_sections(&text);
    if !missing.is_empty() {
        let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
        tracing::warn!(missing = %names.join(", "), "summary does not follow the requested format");
    }

    let copied = match clipboard.write(&text) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "could not copy summary to clipboard");
            false
        }
    };

    Ok(Summary {
        text,
        copied_to_clipboard: copied,
        missing_sections: missing,
    })
}

fn validate_article(article: &str) -> Result<&str, SummaryError> {
    let trimmed = article.trim();
    if trimmed.is_empty() {
        return Err(SummaryError::EmptyInput);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardError;
    use crate::summary::{ErrorKind, Section};
    use std::sync::Mutex;
    use std::time::Duration;

    struct ScriptedProvider {
        reply: Result<String, ErrorKind>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedProvider {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing(kind: ErrorKind) -> Self {
            Self {
                reply: Err(kind),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait::async_trait]
    impl Provider for ScriptedProvider {
        fn kind(&self) -> ProviderKind {
            ProviderKind::Local
        }

        async fn complete(&self, request: &SummaryRequest) -> Result<String, SummaryError> {
            self.prompts.lock().unwrap().push(request.prompt().to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(ErrorKind::RateLimited) => Err(SummaryError::RateLimited("HTTP 429".into())),
                Err(_) => Err(SummaryError::BadResponse("scripted".into())),
            }
        }
    }

    #[derive(Default)]
    struct RecordingClipboard {
        written: Vec<String>,
        fail: bool,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Unavailable("no display".into()));
            }
            self.written.push(text.to_string());
            Ok(())
        }
    }

    fn local_config() -> ProviderConfig {
        ProviderConfig {
            kind: ProviderKind::Local,
            endpoint: "http://127.0.0.1:1/api/generate".to_string(),
            model: "gemma3:latest".to_string(),
            auth_token: None,
            max_tokens: None,
            timeout: Duration::from_secs(1),
        }
    }

    #[tokio::test]
    async fn test_summary_reaches_clipboard() {
        let provider = ScriptedProvider::replying(">**Summary:**\n>**The details:**\n>**Why it matters:**");
        let mut clipboard = RecordingClipboard::default();

        let summary = summarize_with("An article.", &provider, local_config(), &mut clipboard)
            .await
            .unwrap();

        assert!(summary.copied_to_clipboard);
        assert!(summary.missing_sections.is_empty());
        assert_eq!(clipboard.written, vec![summary.text.clone()]);
        assert!(provider.prompts.lock().unwrap()[0].ends_with("An article."));
    }

    #[tokio::test]
    async fn test_clipboard_failure_is_not_fatal() {
        let provider = ScriptedProvider::replying("free-form text");
        let mut clipboard = RecordingClipboard {
            fail: true,
            ..Default::default()
        };

        let summary = summarize_with("An article.", &provider, local_config(), &mut clipboard)
            .await
            .unwrap();

        assert_eq!(summary.text, "free-form text");
        assert!(!summary.copied_to_clipboard);
        assert_eq!(summary.missing_sections, Section::ALL.to_vec());
    }

    #[tokio::test]
    async fn test_provider_error_passes_through() {
        let provider = ScriptedProvider::failing(ErrorKind::RateLimited);
        let mut clipboard = RecordingClipboard::default();

        let err = summarize_with("An article.", &provider, local_config(), &mut clipboard)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::RateLimited);
        assert!(clipboard.written.is_empty());
    }

    #[tokio::test]
    async fn test_blank_article_never_reaches_provider() {
        let provider = ScriptedProvider::replying("unused");
        let mut clipboard = RecordingClipboard::default();

        let err = summarize_with(" \n\t ", &provider, local_config(), &mut clipboard)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::EmptyInput);
        assert_eq!(provider.calls(), 0);
    }
}
