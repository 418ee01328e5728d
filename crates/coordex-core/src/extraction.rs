use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{CoordexError, Result};

/// Wire-level response of the remote extraction method. `latitude` and
/// `longitude` are present iff `success` is true; the server reports
/// parse failures through `success: false` plus diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionPayload {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub debug_text: Option<String>,
    #[serde(default)]
    pub processing_time: Option<String>,
}

/// A successfully extracted coordinate pair plus the server's diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateFix {
    pub latitude: f64,
    pub longitude: f64,
    pub message: String,
    pub debug_text: Option<String>,
    pub processing_time: Option<String>,
}

/// A delivered response that found no coordinates. This is data, not an
/// error: the user recovers by retriggering with a better image.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionFailure {
    pub message: String,
    pub debug_text: Option<String>,
    pub processing_time: Option<String>,
}

/// Discriminated form of the wire payload, consumed by exhaustive
/// matching instead of truthy-field inspection.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    Found(CoordinateFix),
    NoMatch(ExtractionFailure),
}

impl ExtractionPayload {
    /// Convert the untyped wire payload into the discriminated outcome.
    /// A `success: true` payload missing either coordinate is malformed
    /// and reported as a remote error rather than applied half-empty.
    pub fn into_outcome(self) -> Result<ExtractionOutcome> {
        if self.success {
            let (latitude, longitude) = match (self.latitude, self.longitude) {
                (Some(lat), Some(lon)) => (lat, lon),
                _ => {
                    return Err(CoordexError::Remote(format!(
                        "success payload missing coordinates: {:?}",
                        self
                    )))
                }
            };
            Ok(ExtractionOutcome::Found(CoordinateFix {
                latitude,
                longitude,
                message: self.message,
                debug_text: self.debug_text,
                processing_time: self.processing_time,
            }))
        } else {
            Ok(ExtractionOutcome::NoMatch(ExtractionFailure {
                message: self.message,
                debug_text: self.debug_text,
                processing_time: self.processing_time,
            }))
        }
    }
}

/// Capability for issuing one remote extraction call. Transport failures
/// (network, HTTP status, undecodable body) surface as `Err`; a delivered
/// no-coordinates result is `Ok(NoMatch)`.
#[async_trait]
pub trait ExtractionClient: Send + Sync {
    async fn extract(&self, image_url: &str) -> Result<ExtractionOutcome>;
}
