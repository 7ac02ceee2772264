//! Typed errors surfaced by the form and the create-trader call

use rust_decimal::Decimal;
use thiserror::Error;

use crate::form::FieldKey;

/// Any failure of the create-trader call. Network errors, backend
/// rejections and unexpected responses all collapse into this one type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .message.as_deref().unwrap_or("trader submission failed"))]
pub struct SubmissionFailure {
    pub message: Option<String>,
}

impl SubmissionFailure {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()) }
    }

    pub fn without_message() -> Self {
        Self { message: None }
    }
}

impl From<reqwest::Error> for SubmissionFailure {
    fn from(err: reqwest::Error) -> Self {
        Self::with_message(err.to_string())
    }
}

/// A value of the wrong kind was handed to `set_field`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field `{key}` does not accept a {got} value")]
pub struct FieldError {
    pub key: FieldKey,
    pub got: &'static str,
}

/// An input-level constraint that blocks submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    #[error("`{0}` is required")]
    Missing(FieldKey),
    #[error("`{0}` is not an absolute URL")]
    InvalidUrl(FieldKey),
    #[error("`{key}` must be at least {min}")]
    BelowMin { key: FieldKey, min: Decimal },
    #[error("`{key}` must be a multiple of {step}")]
    StepMismatch { key: FieldKey, step: Decimal },
    #[error("`{0}` is not a number")]
    NotANumber(FieldKey),
    #[error("`{0}` is too large")]
    OutOfRange(FieldKey),
}

impl ConstraintViolation {
    pub fn key(&self) -> FieldKey {
        match self {
            Self::Missing(key)
            | Self::InvalidUrl(key)
            | Self::NotANumber(key)
            | Self::OutOfRange(key) => *key,
            Self::BelowMin { key, .. } | Self::StepMismatch { key, .. } => *key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_display_falls_back_without_message() {
        let failure = SubmissionFailure::with_message("id already exists");
        assert_eq!(failure.to_string(), "id already exists");
        assert_eq!(SubmissionFailure::without_message().to_string(), "trader submission failed");
    }

    #[test]
    fn violation_reports_its_field() {
        let v = ConstraintViolation::BelowMin {
            key: FieldKey::ScanIntervalMinutes,
            min: Decimal::ONE,
        };
        assert_eq!(v.key(), FieldKey::ScanIntervalMinutes);
        assert_eq!(v.to_string(), "`scan_interval_minutes` must be at least 1");
    }
}
