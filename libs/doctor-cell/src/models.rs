use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use shared_models::page::Section;
use shared_rpc::{Appointment, AppointmentStatus, Doctor};

// ==============================================================================
// DOCTOR LISTING
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ListingSource {
    /// Live list from the clinic service.
    Remote,
    /// Built-in directory used while the clinic service is unreachable.
    Directory,
}

#[derive(Debug, Clone, Serialize)]
pub struct DoctorListing {
    pub doctors: Vec<Doctor>,
    pub source: ListingSource,
}

impl DoctorListing {
    pub fn find(&self, doctor_id: i64) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == doctor_id)
    }
}

/// One entry of a doctor `<select>`: "Name - Specialization".
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DoctorOption {
    pub id: i64,
    pub label: String,
    pub selected: bool,
}

impl DoctorOption {
    pub fn from_doctor(doctor: &Doctor, selected_id: Option<i64>) -> Self {
        Self {
            id: doctor.id,
            label: format!("{} - {}", doctor.name, doctor.specialization),
            selected: selected_id == Some(doctor.id),
        }
    }
}

// ==============================================================================
// DOCTOR DASHBOARD
// ==============================================================================

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct AppointmentStats {
    pub total: usize,
    pub today: usize,
    pub upcoming: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AppointmentRow {
    pub id: i64,
    pub patient_id: i64,
    pub appointment_date: DateTime<FixedOffset>,
    pub time_label: String,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub analysis_link: String,
}

impl AppointmentRow {
    pub fn new(appointment: &Appointment, offset: FixedOffset) -> Self {
        let local = appointment.appointment_date.with_timezone(&offset);
        Self {
            id: appointment.id,
            patient_id: appointment.patient_id,
            appointment_date: local,
            time_label: local.format("%I:%M %p").to_string(),
            status: appointment.status.clone(),
            notes: appointment.notes.clone(),
            analysis_link: format!(
                "/prescriptions/patients/{}?appointment_id={}",
                appointment.patient_id, appointment.id
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DoctorDashboard {
    pub welcome_name: String,
    pub specialization: String,
    pub stats: Section<AppointmentStats>,
    pub today: Section<Vec<AppointmentRow>>,
    pub upcoming: Section<Vec<AppointmentRow>>,
    pub all: Section<Vec<AppointmentRow>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum DoctorError {
    #[error("No doctor profile is linked to this account")]
    NoProfile,

    #[error("Clinic service error: {0}")]
    Remote(String),
}
