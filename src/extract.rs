//! Pulls the generated text out of each provider's response envelope.

use crate::config::ProviderKind;
use crate::summary::SummaryError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Ollama `/api/generate`
#[derive(Deserialize)]
struct GenerateEnvelope {
    response: Option<String>,
}

/// OpenAI-style `/v1/chat/completions`
#[derive(Deserialize)]
struct ChatEnvelope {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ChatMessage>,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Anthropic-style `/v1/messages`
#[derive(Deserialize)]
struct MessagesEnvelope {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: Option<String>,
    text: Option<String>,
}

/// Extract the completion text from `envelope`.
///
/// Returns the first non-empty text payload for the provider's envelope
/// shape, unmodified. Anything else is a `BadResponse`.
pub fn extract(envelope: &Value, kind: ProviderKind) -> Result<String, SummaryError> {
    let text = match kind {
        ProviderKind::Local => {
            let parsed: GenerateEnvelope = parse(envelope, kind)?;
            parsed.response.filter(|text| !is_blank(text))
        }
        ProviderKind::ChatCompletion => {
            let parsed: ChatEnvelope = parse(envelope, kind)?;
            parsed
                .choices
                .into_iter()
                .filter_map(|choice| choice.message.and_then(|m| m.content))
                .find(|text| !is_blank(text))
        }
        ProviderKind::Messages => {
            let parsed: MessagesEnvelope = parse(envelope, kind)?;
            parsed
                .content
                .into_iter()
                .filter(|block| block.kind.as_deref().map_or(true, |k| k == "text"))
                .filter_map(|block| block.text)
                .find(|text| !is_blank(text))
        }
    };

    text.ok_or_else(|| {
        let detail = match error_message(envelope) {
            Some(message) => format!("{} returned no completion text: {}", kind, message),
            None => format!("{} returned no completion text", kind),
        };
        SummaryError::BadResponse(detail)
    })
}

/// The provider's own error message, if the envelope carries one.
///
/// Ollama sends `{"error": "..."}`; the hosted APIs nest it as `{"error": {"message": "..."}}`.
pub fn error_message(envelope: &Value) -> Option<String> {
    match envelope.get("error")? {
        Value::String(message) => Some(message.clone()),
        Value::Object(fields) => fields
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

fn parse<T: DeserializeOwned>(envelope: &Value, kind: ProviderKind) -> Result<T, SummaryError> {
    T::deserialize(envelope)
        .map_err(|e| SummaryError::BadResponse(format!("malformed {} envelope: {}", kind, e)))
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
