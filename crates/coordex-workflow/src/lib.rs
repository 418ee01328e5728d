mod dispatch;
mod status;
mod workflow;

pub use dispatch::{EventDispatcher, FormEvent};
pub use status::{WorkflowPhase, WorkflowStatus};
pub use workflow::ExtractionWorkflow;
