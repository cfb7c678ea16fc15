use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Connection error: {0}")]
    Connection(#[from] reqwest::Error),

    #[error("Viewer error: {code} - {message}")]
    Rpc { code: i32, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl BridgeError {
    pub fn rpc(code: i32, message: impl Into<String>) -> Self {
        Self::Rpc {
            code,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_error_display() {
        let err = BridgeError::rpc(-32601, "Method not found");
        assert_eq!(err.to_string(), "Viewer error: -32601 - Method not found");
    }

    #[test]
    fn test_deserialize_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let bridge_err: BridgeError = json_err.into();
        assert!(matches!(bridge_err, BridgeError::Deserialize(_)));
    }
}
