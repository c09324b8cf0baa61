use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use shared_models::error::AppError;
use shared_models::page::Section;
use shared_rpc::{AppointmentStatus, Gender, PatientProfile};

// ==============================================================================
// REGISTRATION DRAFT
// ==============================================================================

pub const DEFAULT_GENDER: &str = "male";
pub const GENDER_OPTIONS: [&str; 3] = ["male", "female", "other"];
pub const BLOOD_GROUP_OPTIONS: [&str; 8] = ["O+", "O-", "A+", "A-", "B+", "B-", "AB+", "AB-"];
pub const ACCEPTED_REPORT_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];

/// Registration form exactly as typed. Coercion happens only on submit.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegistrationDraft {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub contact_info: String,
    pub address: String,
    pub blood_group: String,
    pub medical_history: String,
    pub emergency_contact: String,
    pub emergency_contact_name: String,
    pub files: Vec<AttachedFile>,
}

impl Default for RegistrationDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            gender: DEFAULT_GENDER.to_string(),
            contact_info: String::new(),
            address: String::new(),
            blood_group: String::new(),
            medical_history: String::new(),
            emergency_contact: String::new(),
            emergency_contact_name: String::new(),
            files: Vec::new(),
        }
    }
}

/// A medical report the patient picked. Listed on the form, never uploaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttachedFile {
    pub file_name: String,
    pub size_bytes: u64,
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationSession {
    pub draft: RegistrationDraft,
    pub pending: bool,
}

/// Partial draft change; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationUpdate {
    pub name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub contact_info: Option<String>,
    pub address: Option<String>,
    pub blood_group: Option<String>,
    pub medical_history: Option<String>,
    pub emergency_contact: Option<String>,
    pub emergency_contact_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttachFilesRequest {
    pub files: Vec<AttachedFile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationView {
    pub draft: RegistrationDraft,
    pub gender_options: [&'static str; 3],
    pub blood_group_options: [&'static str; 8],
    pub pending: bool,
    pub submit_label: &'static str,
}

impl RegistrationView {
    pub fn new(session: &RegistrationSession) -> Self {
        Self {
            draft: session.draft.clone(),
            gender_options: GENDER_OPTIONS,
            blood_group_options: BLOOD_GROUP_OPTIONS,
            pending: session.pending,
            submit_label: if session.pending { "Registering..." } else { "Complete Registration" },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationComplete {
    pub profile: PatientProfile,
    pub redirect: &'static str,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistrationError {
    #[error("Full name is required")]
    NameRequired,

    #[error("Unknown gender: {0}")]
    InvalidGender(String),

    #[error("Unknown blood group: {0}")]
    InvalidBloodGroup(String),

    #[error("Only PDF and image reports can be attached: {0}")]
    UnsupportedFile(String),

    #[error("Your registration is already being submitted")]
    AlreadyPending,

    #[error("Registration failed. Please try again.")]
    Remote(String),
}

impl From<RegistrationError> for AppError {
    fn from(err: RegistrationError) -> Self {
        let message = err.to_string();
        match err {
            RegistrationError::NameRequired => AppError::ValidationError(message),
            RegistrationError::InvalidGender(_)
            | RegistrationError::InvalidBloodGroup(_)
            | RegistrationError::UnsupportedFile(_) => AppError::BadRequest(message),
            RegistrationError::AlreadyPending => AppError::Conflict(message),
            RegistrationError::Remote(_) => AppError::ExternalService(message),
        }
    }
}

// ==============================================================================
// PATIENT DASHBOARD
// ==============================================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileCard {
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub contact_info: Option<String>,
    pub blood_group: Option<String>,
    pub address: Option<String>,
}

impl From<&PatientProfile> for ProfileCard {
    fn from(profile: &PatientProfile) -> Self {
        Self {
            name: profile.name.clone(),
            age: profile.age,
            gender: profile.gender,
            contact_info: profile.contact_info.clone(),
            blood_group: profile.blood_group.clone(),
            address: profile.address.clone(),
        }
    }
}

/// Sidebar: the profile when one exists, otherwise a pointer to registration.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfilePanel {
    Profile(ProfileCard),
    Incomplete { register_link: &'static str },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PatientAppointmentRow {
    pub id: i64,
    pub title: String,
    pub appointment_date: DateTime<FixedOffset>,
    pub when_label: String,
    pub status: AppointmentStatus,
    pub status_label: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MedicalRecordRow {
    pub id: i64,
    pub record_type: String,
    pub recorded_on: NaiveDate,
    pub content: Option<String>,
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatientDashboard {
    pub welcome_name: String,
    pub profile: Section<ProfilePanel>,
    pub appointments: Section<Vec<PatientAppointmentRow>>,
    pub medical_history: Section<Vec<MedicalRecordRow>>,
    pub book_link: &'static str,
}
