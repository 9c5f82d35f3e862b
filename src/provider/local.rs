//! Ollama running on the local machine.

use super::{send, Provider};
use crate::config::ProviderKind;
use crate::summary::{SummaryError, SummaryRequest};
use reqwest::Client;
use serde::Serialize;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Local Ollama provider. Unauthenticated, non-streaming `/api/generate`.
pub struct LocalProvider {
    client: Client,
}

impl LocalProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Provider for LocalProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Local
    }

    async fn complete(&self, request: &SummaryRequest) -> Result<String, SummaryError> {
        let config = request.config();
        let body = GenerateRequest {
            model: &config.model,
            prompt: request.prompt(),
            stream: false,
        };

        tracing::info!(model = %config.model, endpoint = %config.endpoint, "querying local model");
        let http = self.client.post(&config.endpoint).json(&body);
        send(self.kind(), http).await
    }
}
