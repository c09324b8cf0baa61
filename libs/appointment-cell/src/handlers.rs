// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    Json,
};

use shared_config::AppConfig;
use shared_models::auth::AuthContext;
use shared_models::error::AppError;
use shared_models::page::Page;
use shared_utils::clock::clinic_today;
use shared_utils::extractor::require_session;
use shared_utils::session::SessionStore;

use crate::models::{BookingConfirmation, BookingPage, BookingSession, SelectionUpdate};
use crate::services::BookingService;

pub const BOOKING_LOGIN_MESSAGE: &str = "Please log in to book an appointment.";

/// Shared by every booking route: configuration plus each user's calendar state.
#[derive(Clone)]
pub struct BookingState {
    pub config: Arc<AppConfig>,
    pub sessions: SessionStore<BookingSession>,
}

impl BookingState {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            sessions: SessionStore::new(),
        }
    }

    fn service(&self) -> BookingService {
        BookingService::new(&self.config, self.sessions.clone())
    }
}

#[axum::debug_handler]
pub async fn booking_page(
    State(state): State<Arc<BookingState>>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Page<BookingPage>>, AppError> {
    let session = match auth.session() {
        Some(session) => session,
        None => return Ok(Json(Page::login_required(BOOKING_LOGIN_MESSAGE))),
    };

    let today = clinic_today(state.config.clinic_offset());
    let page = state.service().page(session, today).await;
    Ok(Json(Page::Ready(page)))
}

#[axum::debug_handler]
pub async fn next_month(
    State(state): State<Arc<BookingState>>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<BookingPage>, AppError> {
    let session = require_session(&auth)?;
    let today = clinic_today(state.config.clinic_offset());
    Ok(Json(state.service().next_month(session, today).await))
}

#[axum::debug_handler]
pub async fn previous_month(
    State(state): State<Arc<BookingState>>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<BookingPage>, AppError> {
    let session = require_session(&auth)?;
    let today = clinic_today(state.config.clinic_offset());
    Ok(Json(state.service().previous_month(session, today).await))
}

#[axum::debug_handler]
pub async fn update_selection(
    State(state): State<Arc<BookingState>>,
    Extension(auth): Extension<AuthContext>,
    Json(update): Json<SelectionUpdate>,
) -> Result<Json<BookingPage>, AppError> {
    let session = require_session(&auth)?;
    let today = clinic_today(state.config.clinic_offset());
    let page = state.service().update_selection(session, &update, today).await?;
    Ok(Json(page))
}

#[axum::debug_handler]
pub async fn confirm_booking(
    State(state): State<Arc<BookingState>>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<BookingConfirmation>, AppError> {
    let session = require_session(&auth)?;
    let today = clinic_today(state.config.clinic_offset());
    let confirmation = state.service().confirm(session, today).await?;
    Ok(Json(confirmation))
}
