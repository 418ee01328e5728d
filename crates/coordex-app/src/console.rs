use coordex_core::notify::{AlertLevel, Notifier};

/// Console stand-in for the host form UI: alerts and dialogs go to
/// stdout, refresh signals to the debug log.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, level: AlertLevel, message: &str) {
        let tag = match level {
            AlertLevel::Info => "info",
            AlertLevel::Success => "success",
            AlertLevel::Error => "error",
        };
        println!("[{tag}] {message}");
    }

    fn dialog(&self, title: &str, body: &str) {
        println!("=== {title} ===");
        println!("{body}");
    }

    fn refresh_field(&self, field: &str) {
        tracing::debug!(field = %field, "Field refresh requested");
    }
}
