use axum::{
    routing::{get, post},
    Router,
};

pub mod analyze;
pub mod catalog;
pub mod system;

/// Router for the analysis surface.
pub fn router() -> Router {
    Router::new()
        .route("/analyze", post(analyze::analyze))
        .route("/catalog", get(catalog::list_products))
}
