use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_context_middleware;

use crate::handlers::{self, PatientState};

pub fn patient_routes(config: Arc<AppConfig>) -> Router {
    let state = Arc::new(PatientState::new(config.clone()));

    Router::new()
        .route(
            "/register",
            get(handlers::registration_form).put(handlers::update_registration),
        )
        .route("/register/files", post(handlers::attach_files))
        .route("/register/submit", post(handlers::submit_registration))
        .route("/dashboard", get(handlers::patient_dashboard))
        .layer(middleware::from_fn_with_state(config, auth_context_middleware))
        .with_state(state)
}
