//! Anthropic-style messages.

use super::{auth_token, send, Provider};
use crate::config::ProviderKind;
use crate::summary::{SummaryError, SummaryRequest};
use reqwest::Client;
use serde::Serialize;

/// Value of the required `anthropic-version` header
const API_VERSION: &str = "2023-06-01";

/// The messages API rejects requests without a token limit
const DEFAULT_MAX_TOKENS: u32 = 1000;

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

/// Messages provider, authenticated with an `x-api-key` header.
pub struct MessagesProvider {
    client: Client,
}

impl MessagesProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Provider for MessagesProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Messages
    }

    async fn complete(&self, request: &SummaryRequest) -> Result<String, SummaryError> {
        let config = request.config();
        let token = auth_token(config)?;
        let body = MessagesRequest {
            model: &config.model,
            max_tokens: config.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            messages: vec![Message {
                role: "user",
                content: request.prompt(),
            }],
        };

        tracing::info!(model = %config.model, "querying messages API");
        let http = self
            .client
            .post(&config.endpoint)
            .header("x-api-key", token)
            .header("anthropic-version", API_VERSION)
            .json(&body);
        send(self.kind(), http).await
    }
}
