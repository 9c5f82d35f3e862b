//! OpenAI-style chat completions.

use super::{auth_token, send, Provider};
use crate::config::ProviderKind;
use crate::summary::{SummaryError, SummaryRequest};
use reqwest::Client;
use serde::Serialize;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Chat completion provider, authenticated with a bearer token.
pub struct ChatCompletionProvider {
    client: Client,
}

impl ChatCompletionProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Provider for ChatCompletionProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::ChatCompletion
    }

    async fn complete(&self, request: &SummaryRequest) -> Result<String, SummaryError> {
        let config = request.config();
        let token = auth_token(config)?;
        let body = ChatRequest {
            model: &config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: request.prompt(),
            }],
            max_tokens: config.max_tokens,
        };

        tracing::info!(model = %config.model, "querying chat completion API");
        let http = self
            .client
            .post(&config.endpoint)
            .bearer_auth(token)
            .json(&body);
        send(self.kind(), http).await
    }
}
