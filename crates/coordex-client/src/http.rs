use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use coordex_core::error::{CoordexError, Result};
use coordex_core::extraction::{ExtractionClient, ExtractionOutcome, ExtractionPayload};
use coordex_core::AppConfig;

/// HTTP implementation of [`ExtractionClient`] speaking the host
/// application's RPC convention: POST to `/api/method/<dotted.path>` with
/// a JSON argument object, response wrapped in a `message` envelope.
pub struct HttpExtractionClient {
    client: reqwest::Client,
    endpoint: Url,
}

#[derive(Debug, Serialize)]
struct ExtractionRequest<'a> {
    image_url: &'a str,
}

/// RPC response envelope. The payload sits under `message`; an envelope
/// without one is unusable and reported, never silently dropped.
#[derive(Debug, Deserialize)]
struct RpcEnvelope {
    #[serde(default)]
    message: Option<ExtractionPayload>,
}

impl HttpExtractionClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let base = Url::parse(&config.server_url)
            .map_err(|e| CoordexError::Config(format!("invalid server URL: {e}")))?;
        let endpoint = base
            .join(&format!("api/method/{}", config.remote_method))
            .map_err(|e| CoordexError::Config(format!("invalid remote method path: {e}")))?;

        let client = reqwest::Client::builder()
            .user_agent("coordex/0.1")
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl ExtractionClient for HttpExtractionClient {
    async fn extract(&self, image_url: &str) -> Result<ExtractionOutcome> {
        info!(endpoint = %self.endpoint, image_url = %image_url, "Issuing extraction request");

        let body = self
            .client
            .post(self.endpoint.clone())
            .json(&ExtractionRequest { image_url })
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let envelope: RpcEnvelope = serde_json::from_str(&body)?;

        let payload = envelope.message.ok_or_else(|| {
            CoordexError::Remote("response envelope carried no payload".into())
        })?;

        debug!(success = payload.success, "Extraction response decoded");
        payload.into_outcome()
    }
}
