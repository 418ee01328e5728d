use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// The three host-owned form fields this workflow touches. The host
/// document model owns persistence; the workflow only reads the image
/// reference and writes the two coordinates.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct FormState {
    pub image_reference: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Form state shared between the host runtime and in-flight completion
/// callbacks. Each callback holds the write lock only while applying one
/// result, so overlapping runs apply in arrival order (last-writer-wins).
pub type SharedForm = Arc<RwLock<FormState>>;

impl FormState {
    pub fn shared(self) -> SharedForm {
        Arc::new(RwLock::new(self))
    }

    /// The image reference, treating whitespace-only values as absent.
    pub fn image_reference(&self) -> Option<&str> {
        self.image_reference
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }
}
