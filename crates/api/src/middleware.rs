use axum::{
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

use rfpmatch_core::AnalysisId;

use crate::context::AnalysisContext;

pub const ANALYSIS_ID_HEADER: HeaderName = HeaderName::from_static("x-analysis-id");

/// Assign an [`AnalysisId`] to the request and echo it in the response headers.
pub async fn analysis_context_middleware(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let analysis_id = AnalysisId::new();
    req.extensions_mut().insert(AnalysisContext::new(analysis_id));

    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let mut res = next.run(req).await;

    tracing::debug!(analysis_id = %analysis_id, %method, path = %path, status = res.status().as_u16(), "request handled");

    if let Ok(value) = HeaderValue::from_str(&analysis_id.to_string()) {
        res.headers_mut().insert(ANALYSIS_ID_HEADER, value);
    }
    res
}
