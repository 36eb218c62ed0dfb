use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use thiserror::Error;

/// Failure of a single remote call, classified by what went wrong.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("access denied: {0}")]
    AccessDenied(String),

    #[error("request throttled: {0}")]
    Throttled(String),

    #[error("invalid request: {0}")]
    Invalid(String),

    #[error("endpoint unreachable: {0}")]
    Unreachable(String),

    #[error("remote call failed: {0}")]
    Remote(String),
}

impl StoreError {
    /// Classifies an SDK error by its service error code.
    pub fn from_sdk<E, R>(err: SdkError<E, R>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + 'static,
        R: std::fmt::Debug,
    {
        let detail = match (err.code(), err.message()) {
            (Some(code), Some(message)) => format!("{code}: {message}"),
            (Some(code), None) => code.to_string(),
            _ => error_chain(&err),
        };

        if matches!(err, SdkError::DispatchFailure(_) | SdkError::TimeoutError(_)) {
            return Self::Unreachable(detail);
        }

        match err.code() {
            Some("ResourceNotFoundException") => Self::NotFound(detail),
            Some(
                "AccessDeniedException"
                | "UnrecognizedClientException"
                | "InvalidSignatureException"
                | "ExpiredTokenException"
                | "MissingAuthenticationTokenException",
            ) => Self::AccessDenied(detail),
            Some(
                "ProvisionedThroughputExceededException"
                | "ThrottlingException"
                | "RequestLimitExceeded",
            ) => Self::Throttled(detail),
            Some("ValidationException" | "SerializationException") => Self::Invalid(detail),
            _ => Self::Remote(detail),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::AccessDenied(_) => "access_denied",
            Self::Throttled(_) => "throttled",
            Self::Invalid(_) => "invalid",
            Self::Unreachable(_) => "unreachable",
            Self::Remote(_) => "remote",
        }
    }
}

/// Joins an error and its sources into one line, without the raw response.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut detail = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        detail.push_str(": ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    detail
}
