use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use shared_config::AppConfig;
use shared_utils::extractor::auth_context_middleware;

use crate::handlers;

pub fn doctor_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors))
        .route("/dashboard", get(handlers::doctor_dashboard))
        .layer(middleware::from_fn_with_state(state.clone(), auth_context_middleware))
        .with_state(state)
}
