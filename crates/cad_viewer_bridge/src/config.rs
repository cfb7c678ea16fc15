use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:4320".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl ViewerConfig {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub fn from_env() -> Self {
        let endpoint = std::env::var("CAD_VIEWER_ENDPOINT")
            .unwrap_or_else(|_| "http://127.0.0.1:4320".to_string());

        let timeout = std::env::var("CAD_VIEWER_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or_else(|| Duration::from_secs(10));

        Self { endpoint, timeout }
    }
}
