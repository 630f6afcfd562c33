use std::time::Duration;

use axum::{BoxError, Json, Router, error_handling::HandleErrorLayer, http::StatusCode};
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;

use crate::infrastructure::settings::Settings;
use crate::presentation::app_error::ErrorBody;

pub(crate) fn apply_limits(router: Router, settings: &Settings) -> Router {
    router
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_limit_error))
                .concurrency_limit(settings.http_concurrency_limit)
                .timeout(Duration::from_secs(settings.http_request_timeout_secs)),
        )
        .layer(RequestBodyLimitLayer::new(
            settings.http_request_body_limit_bytes,
        ))
}

async fn handle_limit_error(err: BoxError) -> (StatusCode, Json<ErrorBody>) {
    let (status, error) = if err.is::<tower::timeout::error::Elapsed>() {
        (StatusCode::REQUEST_TIMEOUT, "request timed out".to_string())
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            format!("service unavailable: {err}"),
        )
    };

    (
        status,
        Json(ErrorBody {
            error,
            fields: Vec::new(),
        }),
    )
}
