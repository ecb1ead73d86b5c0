use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use mercadofacil_core::DomainError;
use mercadofacil_products::AlterError;

pub fn alter_error_to_response(err: AlterError) -> axum::response::Response {
    match err {
        AlterError::Validation(e) => json_error(StatusCode::BAD_REQUEST, e.code(), e.to_string()),
        AlterError::Repository(e) => domain_error_to_response(e),
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
        DomainError::Storage(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "storage_error", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
