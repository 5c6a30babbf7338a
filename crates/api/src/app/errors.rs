use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::extract::multipart::MultipartError;
use serde_json::json;

pub fn multipart_error_to_response(err: MultipartError) -> axum::response::Response {
    json_error(err.status(), "invalid_upload", err.body_text())
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
