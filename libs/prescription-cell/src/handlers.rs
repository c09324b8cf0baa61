use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query, State},
    Json,
};

use shared_config::AppConfig;
use shared_models::auth::AuthContext;
use shared_models::error::AppError;
use shared_models::page::Page;
use shared_utils::extractor::require_session;
use shared_utils::session::SessionStore;

use crate::models::{
    AppointmentQuery, PrescriptionSession, PrescriptionUpdate, PrescriptionView,
    SavedPrescription, ShareMessage,
};
use crate::services::PrescriptionService;

pub const PRESCRIPTION_LOGIN_MESSAGE: &str = "Please log in to access this page.";

#[derive(Clone)]
pub struct PrescriptionState {
    pub config: Arc<AppConfig>,
    pub drafts: SessionStore<PrescriptionSession>,
}

impl PrescriptionState {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            drafts: SessionStore::new(),
        }
    }

    fn service(&self) -> PrescriptionService {
        PrescriptionService::new(&self.config, self.drafts.clone())
    }
}

#[axum::debug_handler]
pub async fn prescription_page(
    State(state): State<Arc<PrescriptionState>>,
    Extension(auth): Extension<AuthContext>,
    Path(patient_id): Path<i64>,
    Query(query): Query<AppointmentQuery>,
) -> Result<Json<Page<PrescriptionView>>, AppError> {
    let session = match auth.session() {
        Some(session) => session,
        None => return Ok(Json(Page::login_required(PRESCRIPTION_LOGIN_MESSAGE))),
    };

    let view = state
        .service()
        .view(session, patient_id, query.appointment_id)
        .await?;
    Ok(Json(Page::Ready(view)))
}

#[axum::debug_handler]
pub async fn update_prescription(
    State(state): State<Arc<PrescriptionState>>,
    Extension(auth): Extension<AuthContext>,
    Path(patient_id): Path<i64>,
    Query(query): Query<AppointmentQuery>,
    Json(update): Json<PrescriptionUpdate>,
) -> Result<Json<PrescriptionView>, AppError> {
    let session = require_session(&auth)?;
    let view = state
        .service()
        .update(session, patient_id, query.appointment_id, update)
        .await?;
    Ok(Json(view))
}

#[axum::debug_handler]
pub async fn submit_prescription(
    State(state): State<Arc<PrescriptionState>>,
    Extension(auth): Extension<AuthContext>,
    Path(patient_id): Path<i64>,
    Query(query): Query<AppointmentQuery>,
) -> Result<Json<SavedPrescription>, AppError> {
    let session = require_session(&auth)?;
    let saved = state
        .service()
        .submit(session, patient_id, query.appointment_id)
        .await?;
    Ok(Json(saved))
}

#[axum::debug_handler]
pub async fn share_prescription(
    State(state): State<Arc<PrescriptionState>>,
    Extension(auth): Extension<AuthContext>,
    Path(patient_id): Path<i64>,
) -> Result<Json<ShareMessage>, AppError> {
    let session = require_session(&auth)?;
    let message = state.service().share(session, patient_id).await?;
    Ok(Json(message))
}
