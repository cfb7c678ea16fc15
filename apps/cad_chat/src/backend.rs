//! HTTP relay to the language-model backend.
//!
//! The backend exposes one endpoint: POST `{"message": <text>}`, answering
//! `{"reply": <string or structured command>}`. Whatever shape the reply
//! takes, the interpretation layer consumes it as one opaque string, so a
//! structured reply is re-serialized verbatim. Retry policy belongs to the
//! backend, not here.

use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Connection error: {0}")]
    Connection(#[from] reqwest::Error),

    #[error("Backend answered HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Backend reply is missing the 'reply' field")]
    MissingReply,
}

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:3000/chat".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl BackendConfig {
    pub fn from_env() -> Self {
        let endpoint = std::env::var("CAD_BACKEND_ENDPOINT")
            .unwrap_or_else(|_| "http://127.0.0.1:3000/chat".to_string());

        let timeout = std::env::var("CAD_BACKEND_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or_else(|| Duration::from_secs(30));

        Self { endpoint, timeout }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

pub struct BackendClient {
    config: BackendConfig,
    http_client: reqwest::Client,
}

impl BackendClient {
    pub fn connect(config: BackendConfig) -> Result<Self, BackendError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Relay one user message and return the model's raw reply as a single
    /// opaque string.
    pub async fn get_reply(&self, message: &str) -> Result<String, BackendError> {
        let response = self
            .http_client
            .post(&self.config.endpoint)
            .json(&ChatRequest { message })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }

        let body: Value = response.json().await?;
        let reply = body.get("reply").ok_or(BackendError::MissingReply)?;

        Ok(flatten_reply(reply))
    }
}

fn flatten_reply(reply: &Value) -> String {
    match reply {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
