//! Configuration loading and management for summarist.
//!
//! Endpoints and models come from an optional `summarist.toml`; API keys only
//! ever come from the environment.

use crate::summary::SummaryError;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const CONFIG_FILE_NAME: &str = "summarist.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid endpoint for {provider}: {endpoint}")]
    InvalidEndpoint { provider: ProviderKind, endpoint: String },
}

/// Source of environment values, read once per run.
pub trait EnvLookup {
    fn lookup(&self, name: &str) -> Option<String>;
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// The backends a summary can be requested from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Ollama's generate API on the local machine
    Local,
    /// OpenAI-style chat completions
    ChatCompletion,
    /// Anthropic-style messages
    Messages,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [
        ProviderKind::Local,
        ProviderKind::ChatCompletion,
        ProviderKind::Messages,
    ];

    /// Map a 1-based menu number to a provider
    pub fn from_choice(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(ProviderKind::Local),
            2 => Some(ProviderKind::ChatCompletion),
            3 => Some(ProviderKind::Messages),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProviderKind::Local => "Ollama (local)",
            ProviderKind::ChatCompletion => "OpenAI",
            ProviderKind::Messages => "Anthropic",
        }
    }

    /// Environment variable holding this provider's API key, if it needs one
    pub fn credential_var(self) -> Option<&'static str> {
        match self {
            ProviderKind::Local => None,
            ProviderKind::ChatCompletion => Some("OPENAI_API_KEY"),
            ProviderKind::Messages => Some("ANTHROPIC_API_KEY"),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything a provider needs for one run.
#[derive(Clone)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub endpoint: String,
    pub model: String,
    pub auth_token: Option<String>,
    pub max_tokens: Option<u32>,
    pub timeout: Duration,
}

// Hand-written so the token never reaches logs.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("kind", &self.kind)
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Per-provider endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndpointConfig {
    pub endpoint: String,
    pub model: String,
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub local: EndpointConfig,
    pub openai: EndpointConfig,
    pub anthropic: EndpointConfig,
    pub http: HttpConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            local: EndpointConfig {
                endpoint: "http://localhost:11434/api/generate".to_string(),
                model: "gemma3:latest".to_string(),
                max_tokens: None,
            },
            openai: EndpointConfig {
                endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
                model: "gpt-4".to_string(),
                max_tokens: None,
            },
            anthropic: EndpointConfig {
                endpoint: "https://api.anthropic.com/v1/messages".to_string(),
                model: "claude-3-sonnet-20240229".to_string(),
                max_tokens: Some(1000),
            },
            http: HttpConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 120 }
    }
}

impl Settings {
    /// Load settings from the default location, falling back to built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        settings.validate()?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let local_config = PathBuf::from(CONFIG_FILE_NAME);
        if local_config.exists() {
            return Some(local_config);
        }

        let home_config = dirs::home_dir()?
            .join(".config")
            .join("summarist")
            .join(CONFIG_FILE_NAME);
        home_config.exists().then_some(home_config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for kind in ProviderKind::ALL {
            let endpoint = &self.endpoint(kind).endpoint;
            if reqwest::Url::parse(endpoint).is_err() {
                return Err(ConfigError::InvalidEndpoint {
                    provider: kind,
                    endpoint: endpoint.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn endpoint(&self, kind: ProviderKind) -> &EndpointConfig {
        match kind {
            ProviderKind::Local => &self.local,
            ProviderKind::ChatCompletion => &self.openai,
            ProviderKind::Messages => &self.anthropic,
        }
    }

    /// Resolve the configuration for `kind`, pulling its API key from `env`.
    ///
    /// Remote providers require a non-empty key; the local provider never
    /// looks one up.
    pub fn provider_config(
        &self,
        kind: ProviderKind,
        env: &dyn EnvLookup,
    ) -> Result<ProviderConfig, SummaryError> {
        let auth_token = match kind.credential_var() {
            Some(var) => {
                let token = env
                    .lookup(var)
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty())
                    .ok_or_else(|| SummaryError::MissingCredential(var.to_string()))?;
                Some(token)
            }
            None => None,
        };

        let endpoint = self.endpoint(kind);
        Ok(ProviderConfig {
            kind,
            endpoint: endpoint.endpoint.clone(),
            model: endpoint.model.clone(),
            auth_token,
            max_tokens: endpoint.max_tokens,
            timeout: Duration::from_secs(self.http.timeout_secs),
        })
    }
}
