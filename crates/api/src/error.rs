use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use users_core::error::RestError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`RestError`] so it can implement [`IntoResponse`]: the error's
/// `status` becomes the HTTP status and the error itself is the JSON body.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct AppError(#[from] pub RestError);

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::warn!(status = %status, code = %self.0.error, "request failed");
        } else {
            tracing::debug!(status = %status, code = %self.0.error, message = %self.0.message, "request rejected");
        }

        (status, axum::Json(self.0)).into_response()
    }
}
