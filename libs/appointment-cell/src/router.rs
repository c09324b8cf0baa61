// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_context_middleware;

use crate::handlers::{self, BookingState};

pub fn appointment_routes(config: Arc<AppConfig>) -> Router {
    let state = Arc::new(BookingState::new(config.clone()));

    Router::new()
        .route("/", get(handlers::booking_page))
        .route("/month/next", post(handlers::next_month))
        .route("/month/previous", post(handlers::previous_month))
        .route("/selection", put(handlers::update_selection))
        .route("/confirm", post(handlers::confirm_booking))
        .layer(middleware::from_fn_with_state(config, auth_context_middleware))
        .with_state(state)
}
