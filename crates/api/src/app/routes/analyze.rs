use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Extension, Multipart},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use rfpmatch_matching::Document;

use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::AnalysisContext;

/// Multipart field carrying the uploaded document.
pub const FILE_FIELD: &str = "file";

/// `POST /analyze`: upload one document, receive one `DecisionRecord`.
///
/// Every document outcome (including unreadable uploads and a failed analysis
/// task) is a 200 with a record; only a malformed multipart body is a
/// transport error.
pub async fn analyze(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AnalysisContext>,
    mut multipart: Multipart,
) -> axum::response::Response {
    let document = match read_document(&mut multipart).await {
        Ok(Some(document)) => document,
        Ok(None) => return (StatusCode::OK, Json(services.missing_document())).into_response(),
        Err(e) => return errors::multipart_error_to_response(e),
    };

    // Decoding (PDF in particular) and matching are CPU-bound.
    let worker = Arc::clone(&services);
    let record = tokio::task::spawn_blocking(move || worker.analyze(ctx.analysis_id(), &document))
        .await
        .unwrap_or_else(|e| {
            tracing::error!(analysis_id = %ctx.analysis_id(), error = %e, "analysis task failed");
            services.aborted(&e)
        });
    (StatusCode::OK, Json(record)).into_response()
}

async fn read_document(multipart: &mut Multipart) -> Result<Option<Document>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let name = field.file_name().unwrap_or("upload").to_string();
        let bytes = field.bytes().await?;
        return Ok(Some(Document::new(name, bytes.to_vec())));
    }
    Ok(None)
}
