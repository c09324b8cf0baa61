use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    Json,
};

use shared_config::AppConfig;
use shared_models::auth::AuthContext;
use shared_models::error::AppError;
use shared_models::page::Page;
use shared_utils::extractor::require_session;
use shared_utils::session::SessionStore;

use crate::models::{
    AttachFilesRequest, PatientDashboard, RegistrationComplete, RegistrationSession,
    RegistrationUpdate, RegistrationView,
};
use crate::services::{PatientDashboardService, RegistrationService};

pub const REGISTRATION_LOGIN_MESSAGE: &str = "Please log in to register as a patient.";
pub const DASHBOARD_LOGIN_MESSAGE: &str = "Please log in to access your dashboard.";

#[derive(Clone)]
pub struct PatientState {
    pub config: Arc<AppConfig>,
    pub registrations: SessionStore<RegistrationSession>,
}

impl PatientState {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            registrations: SessionStore::new(),
        }
    }

    fn registration(&self) -> RegistrationService {
        RegistrationService::new(&self.config, self.registrations.clone())
    }
}

#[axum::debug_handler]
pub async fn registration_form(
    State(state): State<Arc<PatientState>>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Page<RegistrationView>>, AppError> {
    let session = match auth.session() {
        Some(session) => session,
        None => return Ok(Json(Page::login_required(REGISTRATION_LOGIN_MESSAGE))),
    };

    Ok(Json(Page::Ready(state.registration().view(session).await)))
}

#[axum::debug_handler]
pub async fn update_registration(
    State(state): State<Arc<PatientState>>,
    Extension(auth): Extension<AuthContext>,
    Json(update): Json<RegistrationUpdate>,
) -> Result<Json<RegistrationView>, AppError> {
    let session = require_session(&auth)?;
    let view = state.registration().update(session, update).await?;
    Ok(Json(view))
}

#[axum::debug_handler]
pub async fn attach_files(
    State(state): State<Arc<PatientState>>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<AttachFilesRequest>,
) -> Result<Json<RegistrationView>, AppError> {
    let session = require_session(&auth)?;
    let view = state.registration().attach_files(session, request.files).await?;
    Ok(Json(view))
}

#[axum::debug_handler]
pub async fn submit_registration(
    State(state): State<Arc<PatientState>>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<RegistrationComplete>, AppError> {
    let session = require_session(&auth)?;
    let complete = state.registration().submit(session).await?;
    Ok(Json(complete))
}

#[axum::debug_handler]
pub async fn patient_dashboard(
    State(state): State<Arc<PatientState>>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Page<PatientDashboard>>, AppError> {
    let session = match auth.session() {
        Some(session) => session,
        None => return Ok(Json(Page::login_required(DASHBOARD_LOGIN_MESSAGE))),
    };

    let dashboard = PatientDashboardService::new(&state.config).build(session).await;
    Ok(Json(Page::Ready(dashboard)))
}
