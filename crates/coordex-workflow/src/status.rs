use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowPhase {
    Idle,
    Requesting,
}

/// Point-in-time snapshot of the workflow. There is no persisted
/// transition history; overlapping runs show up only as an in-flight
/// count above one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowStatus {
    pub phase: WorkflowPhase,
    pub last_run: Option<DateTime<Utc>>,
    pub runs_completed: u64,
    pub requests_in_flight: u64,
    pub last_error: Option<String>,
}

pub(crate) struct WorkflowState {
    last_run: RwLock<Option<DateTime<Utc>>>,
    runs_completed: AtomicU64,
    in_flight: AtomicU64,
    last_error: RwLock<Option<String>>,
}

impl WorkflowState {
    pub(crate) fn new() -> Self {
        Self {
            last_run: RwLock::new(None),
            runs_completed: AtomicU64::new(0),
            in_flight: AtomicU64::new(0),
            last_error: RwLock::new(None),
        }
    }

    pub(crate) async fn begin(&self) {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        *self.last_run.write().await = Some(Utc::now());
    }

    pub(crate) async fn finish(&self, error: Option<String>) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.runs_completed.fetch_add(1, Ordering::SeqCst);
        *self.last_error.write().await = error;
    }

    pub(crate) async fn snapshot(&self) -> WorkflowStatus {
        let in_flight = self.in_flight.load(Ordering::SeqCst);
        WorkflowStatus {
            phase: if in_flight > 0 {
                WorkflowPhase::Requesting
            } else {
                WorkflowPhase::Idle
            },
            last_run: *self.last_run.read().await,
            runs_completed: self.runs_completed.load(Ordering::SeqCst),
            requests_in_flight: in_flight,
            last_error: self.last_error.read().await.clone(),
        }
    }
}
