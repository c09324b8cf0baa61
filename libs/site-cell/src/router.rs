use axum::{routing::get, Router};

use crate::handlers;

/// Public marketing pages. No session is needed to render them.
pub fn site_routes() -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/about", get(handlers::about))
        .route("/services", get(handlers::services))
}
