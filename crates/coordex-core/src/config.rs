use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the host application exposing the RPC method.
    pub server_url: String,
    /// Dotted path of the whitelisted remote extraction method.
    pub remote_method: String,
    /// Transport-level request timeout; the workflow itself imposes none.
    pub http_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server_url: std::env::var("COORDEX_SERVER_URL")
                .unwrap_or_else(|_| "http://localhost:8000".into()),
            remote_method: std::env::var("COORDEX_REMOTE_METHOD")
                .unwrap_or_else(|_| "location_finder.extract_coordinates_from_image".into()),
            http_timeout_secs: std::env::var("COORDEX_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(120),
        }
    }
}
