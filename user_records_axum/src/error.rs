use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use http::StatusCode;
use user_records::{CoordinationError, StatusMessage};

/// Error half of every handler result: a status code and a `{"status": ...}` body
pub type ErrorResponse = (StatusCode, Json<StatusMessage>);

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, ErrorResponse>;
}

/// Map coordination failures to status codes
///
/// Storage details are logged but never sent to the client.
impl<T> IntoResponseError<T> for Result<T, CoordinationError> {
    fn into_response_error(self) -> Result<T, ErrorResponse> {
        self.map_err(|e| match e {
            CoordinationError::Validation(message) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(StatusMessage::new(message)))
            }
            CoordinationError::ResourceNotFound { resource_type, .. } => (
                StatusCode::NOT_FOUND,
                Json(StatusMessage::new(format!("{resource_type} not found"))),
            ),
            CoordinationError::UserError(err) => {
                tracing::error!(error = %err, "Request failed on storage");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(StatusMessage::new("Internal server error")),
                )
            }
        })
    }
}

/// Malformed or mistyped JSON bodies keep axum's status code
impl<T> IntoResponseError<T> for Result<T, JsonRejection> {
    fn into_response_error(self) -> Result<T, ErrorResponse> {
        self.map_err(|rejection| {
            tracing::debug!("Rejected JSON body: {}", rejection.body_text());
            (
                rejection.status(),
                Json(StatusMessage::new(rejection.body_text())),
            )
        })
    }
}

/// Path ids that are not integers
impl<T> IntoResponseError<T> for Result<T, PathRejection> {
    fn into_response_error(self) -> Result<T, ErrorResponse> {
        self.map_err(|rejection| {
            tracing::debug!("Rejected path: {}", rejection.body_text());
            (
                rejection.status(),
                Json(StatusMessage::new(rejection.body_text())),
            )
        })
    }
}
