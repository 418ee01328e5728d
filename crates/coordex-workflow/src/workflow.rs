use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;

use coordex_core::error::{CoordexError, Result};
use coordex_core::extraction::{
    CoordinateFix, ExtractionClient, ExtractionFailure, ExtractionOutcome,
};
use coordex_core::notify::{AlertLevel, Notifier};
use coordex_core::SharedForm;

use crate::status::{WorkflowState, WorkflowStatus};

const PROCESSING_ALERT: &str = "Processing image with OCR...";
const MISSING_IMAGE_NOTICE: &str = "Please upload an image first.";
const TRANSPORT_FAILURE_BODY: &str = "Failed to process image. Please check the error log.";

/// Owns the trigger-to-result lifecycle for one form instance: listens
/// for an image-assignment event, issues one remote extraction request
/// per trigger, and applies the response to the two coordinate fields.
///
/// Triggers are independent and unserialized: a debug run started while
/// another call is outstanding completes on its own, and results apply
/// in arrival order.
pub struct ExtractionWorkflow {
    form: SharedForm,
    client: Arc<dyn ExtractionClient>,
    notifier: Arc<dyn Notifier>,
    state: WorkflowState,
}

impl ExtractionWorkflow {
    pub fn new(
        form: SharedForm,
        client: Arc<dyn ExtractionClient>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            form,
            client,
            notifier,
            state: WorkflowState::new(),
        }
    }

    /// Image-assignment trigger: runs the extraction whenever the form
    /// holds a non-empty image reference.
    pub async fn on_image_assigned(&self) {
        let image_url = match self.current_image_reference().await {
            Some(url) => url,
            None => return,
        };
        self.run_extraction(&image_url, false).await;
    }

    /// Explicit debug trigger. With no image uploaded this reports a
    /// validation notice and never issues a remote call.
    pub async fn on_debug_requested(&self) {
        let image_url = match self.require_image_reference().await {
            Ok(url) => url,
            Err(e) => {
                warn!(error = %e, "Rejecting debug trigger");
                self.notifier.dialog("Location Finder", MISSING_IMAGE_NOTICE);
                return;
            }
        };
        self.run_extraction(&image_url, true).await;
    }

    /// One extraction request against the remote method. `debug` adds the
    /// raw-text dialog on success; everything else is identical between
    /// the two triggers.
    pub async fn run_extraction(&self, image_url: &str, debug: bool) {
        let run_id = Uuid::new_v4();
        self.state.begin().await;

        self.notifier.alert(AlertLevel::Info, PROCESSING_ALERT);
        // `debug` must be aliased: tracing's macro expansion imports
        // `tracing::field::debug` into scope, shadowing the local.
        let debug_run = debug;
        info!(run_id = %run_id, image_url = %image_url, debug = debug_run, "Extraction run starting");

        match self.client.extract(image_url).await {
            Ok(ExtractionOutcome::Found(fix)) => {
                self.apply_fix(&fix).await;
                self.notifier.alert(AlertLevel::Success, &success_alert(&fix));

                if debug {
                    if let Some(body) = debug_dialog_body(&fix) {
                        self.notifier.dialog("OCR Debug Info", &body);
                    }
                }

                info!(
                    run_id = %run_id,
                    latitude = fix.latitude,
                    longitude = fix.longitude,
                    "Coordinates applied"
                );
                self.state.finish(None).await;
            }
            Ok(ExtractionOutcome::NoMatch(failure)) => {
                warn!(run_id = %run_id, message = %failure.message, "Extraction found no coordinates");
                self.notifier
                    .dialog("OCR Processing Result", &failure_dialog_body(&failure));
                self.state.finish(Some(failure.message.clone())).await;
            }
            Err(e) => {
                error!(run_id = %run_id, error = %e, "Extraction call failed");
                self.notifier.dialog("Error", TRANSPORT_FAILURE_BODY);
                self.state.finish(Some(e.to_string())).await;
            }
        }
    }

    pub async fn status(&self) -> WorkflowStatus {
        self.state.snapshot().await
    }

    async fn current_image_reference(&self) -> Option<String> {
        let form = self.form.read().await;
        form.image_reference().map(str::to_owned)
    }

    /// Like [`Self::current_image_reference`] but for triggers where a
    /// missing image is a user error rather than a quiet no-op.
    async fn require_image_reference(&self) -> Result<String> {
        self.current_image_reference()
            .await
            .ok_or_else(|| CoordexError::Validation(MISSING_IMAGE_NOTICE.into()))
    }

    /// Write both coordinates and signal the host to re-render them.
    /// Only a `Found` outcome ever reaches this point.
    async fn apply_fix(&self, fix: &CoordinateFix) {
        {
            let mut form = self.form.write().await;
            form.latitude = Some(fix.latitude);
            form.longitude = Some(fix.longitude);
        }
        self.notifier.refresh_field("latitude");
        self.notifier.refresh_field("longitude");
    }
}

fn success_alert(fix: &CoordinateFix) -> String {
    match &fix.processing_time {
        Some(time) => format!("✅ {} ({})", fix.message, time),
        None => format!("✅ {}", fix.message),
    }
}

/// Body of the debug dialog; `None` when the server sent no raw text,
/// in which case no dialog is shown.
fn debug_dialog_body(fix: &CoordinateFix) -> Option<String> {
    let text = fix.debug_text.as_deref()?;
    Some(format!(
        "Extracted Text: {}\nProcessing Time: {}",
        text,
        fix.processing_time.as_deref().unwrap_or("N/A")
    ))
}

fn failure_dialog_body(failure: &ExtractionFailure) -> String {
    let mut body = failure.message.clone();
    if let Some(text) = &failure.debug_text {
        body.push_str(&format!("\n\nExtracted Text: \"{text}\""));
    }
    if let Some(time) = &failure.processing_time {
        body.push_str(&format!("\nProcessing Time: {time}"));
    }
    body
}
