//! Error types for learnhub

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LhError {
    #[error("course not found: {0}")]
    CourseNotFound(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    ValidationFailed(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("missing configuration: {0}")]
    MissingConfig(String),

    #[error("invalid catalog data: {0}")]
    Data(String),

    #[error("payment declined: {0}")]
    PaymentDeclined(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LhError {
    /// Stable machine-readable code used in robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::CourseNotFound(_) => "course_not_found",
            Self::NotFound(_) => "not_found",
            Self::ValidationFailed(_) => "validation_failed",
            Self::Config(_) => "config_error",
            Self::MissingConfig(_) => "missing_config",
            Self::Data(_) => "invalid_data",
            Self::PaymentDeclined(_) => "payment_declined",
            Self::Io(_) => "io_error",
            Self::Serialization(_) => "serialization_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, LhError>;
