use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum DomainError {
    #[error("validation failed for '{field}': {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("message delivery failed: {0}")]
    Delivery(String),

    #[error("unexpected domain error: {0}")]
    Unexpected(String),
}
