use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_context_middleware;

use crate::handlers::{self, PrescriptionState};

pub fn prescription_routes(config: Arc<AppConfig>) -> Router {
    let state = Arc::new(PrescriptionState::new(config.clone()));

    Router::new()
        .route(
            "/patients/{patient_id}",
            get(handlers::prescription_page).put(handlers::update_prescription),
        )
        .route("/patients/{patient_id}/submit", post(handlers::submit_prescription))
        .route("/patients/{patient_id}/share", get(handlers::share_prescription))
        .layer(middleware::from_fn_with_state(config, auth_context_middleware))
        .with_state(state)
}
