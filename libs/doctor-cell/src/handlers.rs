use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    Json,
};

use shared_config::AppConfig;
use shared_models::auth::AuthContext;
use shared_models::error::AppError;
use shared_models::page::Page;
use shared_utils::clock::clinic_now;

use crate::models::{DoctorDashboard, DoctorListing};
use crate::services::{DoctorDashboardService, DoctorService};

pub const DASHBOARD_LOGIN_MESSAGE: &str = "Please log in to access the doctor dashboard.";

#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<Arc<AppConfig>>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<DoctorListing>, AppError> {
    let doctor_service = DoctorService::new(&state);
    let listing = doctor_service.list_doctors(auth.bearer_token()).await;
    Ok(Json(listing))
}

#[axum::debug_handler]
pub async fn doctor_dashboard(
    State(state): State<Arc<AppConfig>>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Page<DoctorDashboard>>, AppError> {
    let session = match auth.session() {
        Some(session) => session,
        None => return Ok(Json(Page::login_required(DASHBOARD_LOGIN_MESSAGE))),
    };

    let dashboard_service = DoctorDashboardService::new(&state);
    let dashboard = dashboard_service
        .build(session, clinic_now(state.clinic_offset()))
        .await;

    Ok(Json(Page::Ready(dashboard)))
}
