use serde::{Deserialize, Serialize};

/// Severity of a transient status alert.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Info,
    Success,
    Error,
}

/// Host UI side effects, injected into the workflow so the extraction
/// logic stays independent of any concrete form runtime. Three channels:
/// transient alerts, modal dialogs, and field-refresh signals.
pub trait Notifier: Send + Sync {
    fn alert(&self, level: AlertLevel, message: &str);

    fn dialog(&self, title: &str, body: &str);

    /// Ask the host to re-render one field after its value changed.
    fn refresh_field(&self, field: &str);
}
