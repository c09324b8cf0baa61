use serde::{Deserialize, Serialize};

use shared_models::error::AppError;
use shared_rpc::Prescription;

/// What the doctor has typed for one patient. `consultation_notes` stays
/// on this page and is never sent.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct PrescriptionDraft {
    pub medicines: String,
    pub therapies: String,
    pub recommendations: String,
    pub next_steps: String,
    pub consultation_notes: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrescriptionSession {
    pub draft: PrescriptionDraft,
    pub pending: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrescriptionUpdate {
    pub medicines: Option<String>,
    pub therapies: Option<String>,
    pub recommendations: Option<String>,
    pub next_steps: Option<String>,
    pub consultation_notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentQuery {
    pub appointment_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrescriptionView {
    pub patient_id: i64,
    pub appointment_id: Option<i64>,
    pub draft: PrescriptionDraft,
    pub pending: bool,
    pub save_label: &'static str,
    pub submit_path: Option<String>,
    pub share_path: String,
}

impl PrescriptionView {
    pub fn new(patient_id: i64, appointment_id: Option<i64>, session: &PrescriptionSession) -> Self {
        Self {
            patient_id,
            appointment_id,
            draft: session.draft.clone(),
            pending: session.pending,
            save_label: if session.pending { "Saving..." } else { "Save Prescription" },
            submit_path: appointment_id.map(|id| {
                format!("/prescriptions/patients/{}/submit?appointment_id={}", patient_id, id)
            }),
            share_path: format!("/prescriptions/patients/{}/share", patient_id),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SavedPrescription {
    pub message: &'static str,
    pub prescription: Prescription,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShareMessage {
    pub text: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PrescriptionError {
    #[error("Invalid patient id: {0}")]
    InvalidPatient(i64),

    #[error("Open this page from an appointment to save a prescription")]
    MissingAppointment,

    #[error("No doctor profile is linked to this account")]
    NoDoctorProfile,

    #[error("This prescription is already being saved")]
    AlreadyPending,

    #[error("Failed to save prescription")]
    Remote(String),
}

impl From<PrescriptionError> for AppError {
    fn from(err: PrescriptionError) -> Self {
        let message = err.to_string();
        match err {
            PrescriptionError::InvalidPatient(_) | PrescriptionError::MissingAppointment => {
                AppError::BadRequest(message)
            }
            PrescriptionError::NoDoctorProfile => AppError::NotFound(message),
            PrescriptionError::AlreadyPending => AppError::Conflict(message),
            PrescriptionError::Remote(_) => AppError::ExternalService(message),
        }
    }
}
