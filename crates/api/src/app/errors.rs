use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use barstock_infra::ServiceError;

/// Map a service failure to its response: 400 for validation, 404 for
/// malformed or unknown identifiers, 500 for storage failures. The
/// `Display` of each variant is the client-facing message.
pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    let status = match &err {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    json_error(status, err.to_string())
}

/// Failure responses always carry a JSON body with a `message` field.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "message": message.into(),
        })),
    )
        .into_response()
}
