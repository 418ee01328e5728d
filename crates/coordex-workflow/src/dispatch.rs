use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::workflow::ExtractionWorkflow;

/// The two inbound triggers supplied by the host form runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    ImageAssigned,
    DebugRequested,
}

/// Routes host form events to the workflow. Each dispatch spawns one
/// independent task; nothing de-duplicates or cancels in-flight runs, so
/// overlapping triggers race with last-writer-wins on the form fields.
pub struct EventDispatcher {
    workflow: Arc<ExtractionWorkflow>,
}

impl EventDispatcher {
    pub fn new(workflow: Arc<ExtractionWorkflow>) -> Self {
        Self { workflow }
    }

    /// Fire-and-forget; the handle is returned for hosts that want to
    /// await completion (the CLI front-end and tests do).
    pub fn dispatch(&self, event: FormEvent) -> JoinHandle<()> {
        debug!(?event, "Dispatching form event");
        let workflow = self.workflow.clone();
        tokio::spawn(async move {
            match event {
                FormEvent::ImageAssigned => workflow.on_image_assigned().await,
                FormEvent::DebugRequested => workflow.on_debug_requested().await,
            }
        })
    }
}
