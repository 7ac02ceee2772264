// Library exports for the trader console
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod i18n;
pub mod submission;
pub mod ui;

// Re-export commonly used types
pub use api::{AddTraderResponse, HttpTraderApi, TraderApi};
pub use app::App;
pub use cli::Cli;
pub use error::{ConstraintViolation, FieldError, SubmissionFailure};
pub use form::{AiModel, Exchange, FieldKey, FieldValue, FormState, TraderDraft, DEFAULT_DRAFT};
pub use i18n::{t, Language, TextKey};
pub use submission::{FormMessage, MessageKind, Outcome, SubmissionController, SubmissionState};
pub use ui::render_ui;
