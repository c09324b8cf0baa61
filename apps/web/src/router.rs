use std::sync::Arc;

use axum::Router;

use appointment_cell::router::appointment_routes;
use doctor_cell::router::doctor_routes;
use patient_cell::router::patient_routes;
use prescription_cell::router::prescription_routes;
use shared_config::AppConfig;
use site_cell::router::site_routes;

pub fn create_router(config: Arc<AppConfig>) -> Router {
    Router::new()
        .merge(site_routes())
        .nest("/appointments", appointment_routes(config.clone()))
        .nest("/doctors", doctor_routes(config.clone()))
        .nest("/patients", patient_routes(config.clone()))
        .nest("/prescriptions", prescription_routes(config))
}
