pub mod config;
pub mod error;
pub mod extraction;
pub mod form;
pub mod notify;

pub use config::AppConfig;
pub use error::{CoordexError, Result};
pub use extraction::{
    CoordinateFix, ExtractionClient, ExtractionFailure, ExtractionOutcome, ExtractionPayload,
};
pub use form::{FormState, SharedForm};
pub use notify::{AlertLevel, Notifier};
