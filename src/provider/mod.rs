//! LLM provider clients.
//!
//! Every backend implements [`Provider`]; the variant is picked once by
//! [`build`] and the caller never branches on it again. The variants differ in
//! auth header, request body and response envelope, but share the transport
//! rules in [`send`]: one attempt, status codes mapped onto [`SummaryError`].

mod chat_completion;
mod local;
mod messages;

pub use chat_completion::ChatCompletionProvider;
pub use local::LocalProvider;
pub use messages::MessagesProvider;

use crate::config::{ProviderConfig, ProviderKind};
use crate::extract;
use crate::summary::{SummaryError, SummaryRequest};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;

/// User-Agent string sent to every provider
const USER_AGENT: &str = concat!("summarist/", env!("CARGO_PKG_VERSION"));

/// How much of a non-JSON error body ends up in an error message
const ERROR_BODY_PREVIEW: usize = 200;

#[async_trait::async_trait]
pub trait Provider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Send the request and return the generated text
    async fn complete(&self, request: &SummaryRequest) -> Result<String, SummaryError>;
}

/// Construct the provider for `config.kind`
pub fn build(config: &ProviderConfig) -> Result<Box<dyn Provider>, SummaryError> {
    let client = create_client(config)?;
    let provider: Box<dyn Provider> = match config.kind {
        ProviderKind::Local => Box::new(LocalProvider::new(client)),
        ProviderKind::ChatCompletion => Box::new(ChatCompletionProvider::new(client)),
        ProviderKind::Messages => Box::new(MessagesProvider::new(client)),
    };
    Ok(provider)
}

fn create_client(config: &ProviderConfig) -> Result<Client, SummaryError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.timeout)
        .build()
        .map_err(|e| {
            SummaryError::ServiceUnavailable(format!("failed to initialise HTTP client: {}", e))
        })
}

/// The API key for a remote provider.
fn auth_token(config: &ProviderConfig) -> Result<&str, SummaryError> {
    config
        .auth_token
        .as_deref()
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            let var = config.kind.credential_var().unwrap_or("API key");
            SummaryError::MissingCredential(var.to_string())
        })
}

/// Send a prepared request and extract the completion from its envelope.
async fn send(kind: ProviderKind, request: RequestBuilder) -> Result<String, SummaryError> {
    let response = request
        .send()
        .await
        .map_err(|e| transport_error(kind, e))?;

    let status = response.status();
    tracing::debug!(provider = %kind, %status, url = %response.url(), "provider responded");

    let body = response.text().await.map_err(|e| body_error(kind, e))?;

    check_status(kind, status, &body)?;

    let envelope: Value = serde_json::from_str(&body).map_err(|e| {
        SummaryError::BadResponse(format!("{} returned invalid JSON: {}", kind, e))
    })?;

    extract::extract(&envelope, kind)
}

fn transport_error(kind: ProviderKind, error: reqwest::Error) -> SummaryError {
    let detail = if error.is_timeout() {
        format!("request to {} timed out", kind)
    } else if error.is_connect() {
        format!("could not connect to {}; make sure it is running", kind)
    } else {
        format!("request to {} failed: {}", kind, error)
    };
    SummaryError::ServiceUnavailable(detail)
}

/// The request timeout also covers the body, so a stalled body is a timeout.
fn body_error(kind: ProviderKind, error: reqwest::Error) -> SummaryError {
    if error.is_timeout() {
        transport_error(kind, error)
    } else {
        SummaryError::BadResponse(format!("failed to read {} response body: {}", kind, error))
    }
}

/// Map a non-success status onto the error taxonomy.
fn check_status(kind: ProviderKind, status: StatusCode, body: &str) -> Result<(), SummaryError> {
    if status.is_success() {
        return Ok(());
    }

    let reason = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|envelope| extract::error_message(&envelope))
        .unwrap_or_else(|| body.trim().chars().take(ERROR_BODY_PREVIEW).collect());

    let detail = if reason.is_empty() {
        format!("{} returned HTTP {}", kind, status.as_u16())
    } else {
        format!("{} returned HTTP {}: {}", kind, status.as_u16(), reason)
    };

    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SummaryError::AuthFailure(detail),
        StatusCode::TOO_MANY_REQUESTS => SummaryError::RateLimited(detail),
        _ => SummaryError::BadResponse(detail),
    })
}
