use crate::{Result, ViewerConfig};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// JSON-RPC 2.0 client for a running CAD viewer process.
#[derive(Debug, Clone)]
pub struct ViewerClient {
    config: ViewerConfig,
    http_client: reqwest::Client,
    request_id: Arc<AtomicU64>,
}

#[derive(Debug, Serialize)]
struct RpcRequest {
    jsonrpc: &'static str,
    method: String,
    id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    id: u64,
    #[serde(flatten)]
    outcome: RpcOutcome,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RpcOutcome {
    Result { result: Value },
    Error { error: RpcErrorBody },
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i32,
    message: String,
}

impl ViewerClient {
    pub fn connect(config: ViewerConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            config,
            http_client,
            request_id: Arc::new(AtomicU64::new(1)),
        })
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub async fn send_rpc(&self, method: &str, params: Option<Value>) -> Result<Value> {
        let id = self.request_id.fetch_add(1, Ordering::Relaxed);

        let request = RpcRequest {
            jsonrpc: "2.0",
            method: method.to_string(),
            id,
            params,
        };

        tracing::debug!(method, id, "sending viewer RPC");

        let response = self
            .http_client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(crate::BridgeError::InvalidResponse(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let rpc_response: RpcResponse = response.json().await?;

        if rpc_response.id != id {
            return Err(crate::BridgeError::InvalidResponse(format!(
                "Response ID mismatch: expected {id}, got {}",
                rpc_response.id
            )));
        }

        match rpc_response.outcome {
            RpcOutcome::Result { result } => Ok(result),
            RpcOutcome::Error { error } => {
                tracing::warn!(code = error.code, message = %error.message, "viewer RPC error");
                Err(crate::BridgeError::Rpc {
                    code: error.code,
                    message: error.message,
                })
            }
        }
    }
}
