use crate::domain::error::DomainError;
use axum::{
    Json,
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid json body: {0}")]
    JsonBody(#[from] JsonRejection),

    #[error("invalid form body: {0}")]
    FormBody(#[from] FormRejection),

    #[error("not found")]
    NotFound,
}

pub(crate) type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
    /// Names of the missing form fields, when that is the failure.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) fields: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut fields = Vec::new();
        let (status, msg) = match self {
            AppError::Domain(err) => match &err {
                DomainError::Validation { .. } => (StatusCode::BAD_REQUEST, err.to_string()),
                DomainError::MissingFields(missing) => {
                    fields = missing.iter().map(|f| f.to_string()).collect();
                    (StatusCode::BAD_REQUEST, err.to_string())
                }
                DomainError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
                DomainError::Delivery(_) => (StatusCode::BAD_GATEWAY, err.to_string()),
                DomainError::Unexpected(_) => {
                    error!(error = %err, "request failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "internal error".to_string(),
                    )
                }
            },
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::JsonBody(err) => (json_rejection_status(&err), err.body_text()),
            AppError::FormBody(err) => (form_rejection_status(&err), err.body_text()),
            AppError::NotFound => (StatusCode::NOT_FOUND, "not found".to_string()),
        };

        (status, Json(ErrorBody { error: msg, fields })).into_response()
    }
}

// undecodable fields are a 400 like the other field errors
fn json_rejection_status(err: &JsonRejection) -> StatusCode {
    match err {
        JsonRejection::JsonDataError(_) => StatusCode::BAD_REQUEST,
        _ => err.status(),
    }
}

fn form_rejection_status(err: &FormRejection) -> StatusCode {
    match err {
        FormRejection::FailedToDeserializeFormBody(_) => StatusCode::BAD_REQUEST,
        _ => err.status(),
    }
}
