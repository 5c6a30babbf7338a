use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::dto::CatalogListing;
use crate::app::services::AppServices;

pub async fn list_products(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(CatalogListing::new(services.catalog().products())),
    )
        .into_response()
}
