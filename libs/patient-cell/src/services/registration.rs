use tracing::{debug, error, info};

use shared_config::AppConfig;
use shared_models::auth::Session;
use shared_rpc::{ClinicRpcClient, Gender, RegisterPatientInput};
use shared_utils::forms::{normalize_optional, parse_optional_int};
use shared_utils::session::{SessionState, SessionStore};

use crate::models::{
    AttachedFile, RegistrationComplete, RegistrationDraft, RegistrationError,
    RegistrationSession, RegistrationUpdate, RegistrationView, ACCEPTED_REPORT_EXTENSIONS,
    BLOOD_GROUP_OPTIONS, GENDER_OPTIONS,
};

pub const DASHBOARD_PATH: &str = "/patients/dashboard";

impl RegistrationDraft {
    /// Builds the `patient.register` input. Only the name is required.
    pub fn to_input(&self) -> Result<RegisterPatientInput, RegistrationError> {
        if self.name.trim().is_empty() {
            return Err(RegistrationError::NameRequired);
        }

        Ok(RegisterPatientInput {
            name: self.name.clone(),
            age: parse_optional_int(&self.age),
            gender: Gender::parse(&self.gender),
            contact_info: normalize_optional(&self.contact_info),
            address: normalize_optional(&self.address),
            blood_group: normalize_optional(&self.blood_group),
            medical_history: normalize_optional(&self.medical_history),
            emergency_contact: normalize_optional(&self.emergency_contact),
            emergency_contact_name: normalize_optional(&self.emergency_contact_name),
        })
    }
}

fn check_gender(raw: &str) -> Result<String, RegistrationError> {
    let gender = raw.trim().to_ascii_lowercase();
    if GENDER_OPTIONS.contains(&gender.as_str()) {
        Ok(gender)
    } else {
        Err(RegistrationError::InvalidGender(raw.to_string()))
    }
}

fn check_blood_group(raw: &str) -> Result<String, RegistrationError> {
    let group = raw.trim();
    if group.is_empty() || BLOOD_GROUP_OPTIONS.contains(&group) {
        Ok(group.to_string())
    } else {
        Err(RegistrationError::InvalidBloodGroup(raw.to_string()))
    }
}

fn check_report(file: &AttachedFile) -> Result<(), RegistrationError> {
    let accepted = file
        .file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .is_some_and(|ext| ACCEPTED_REPORT_EXTENSIONS.contains(&ext.as_str()));

    if accepted {
        Ok(())
    } else {
        Err(RegistrationError::UnsupportedFile(file.file_name.clone()))
    }
}

impl RegistrationSession {
    /// Applies every field of `update`, or none of them if any is invalid.
    pub fn apply(&mut self, update: RegistrationUpdate) -> Result<(), RegistrationError> {
        let gender = update.gender.as_deref().map(check_gender).transpose()?;
        let blood_group = update.blood_group.as_deref().map(check_blood_group).transpose()?;

        let draft = &mut self.draft;
        if let Some(name) = update.name {
            draft.name = name;
        }
        if let Some(age) = update.age {
            draft.age = age;
        }
        if let Some(gender) = gender {
            draft.gender = gender;
        }
        if let Some(contact_info) = update.contact_info {
            draft.contact_info = contact_info;
        }
        if let Some(address) = update.address {
            draft.address = address;
        }
        if let Some(blood_group) = blood_group {
            draft.blood_group = blood_group;
        }
        if let Some(medical_history) = update.medical_history {
            draft.medical_history = medical_history;
        }
        if let Some(emergency_contact) = update.emergency_contact {
            draft.emergency_contact = emergency_contact;
        }
        if let Some(emergency_contact_name) = update.emergency_contact_name {
            draft.emergency_contact_name = emergency_contact_name;
        }
        Ok(())
    }

    /// Appends to the attached list; a single unsupported file rejects the batch.
    pub fn attach(&mut self, files: Vec<AttachedFile>) -> Result<(), RegistrationError> {
        files.iter().try_for_each(check_report)?;
        self.draft.files.extend(files);
        Ok(())
    }

    pub fn begin_submission(&mut self) -> Result<RegisterPatientInput, RegistrationError> {
        if self.pending {
            return Err(RegistrationError::AlreadyPending);
        }
        let input = self.draft.to_input()?;
        self.pending = true;
        Ok(input)
    }

    /// A registered profile makes the draft obsolete; a failure keeps it for another try.
    pub fn finish_submission(&mut self, succeeded: bool) {
        self.pending = false;
        if succeeded {
            self.draft = RegistrationDraft::default();
        }
    }
}

impl SessionState for RegistrationSession {
    fn is_blank(&self) -> bool {
        !self.pending && self.draft == RegistrationDraft::default()
    }
}

pub struct RegistrationService {
    rpc: ClinicRpcClient,
    sessions: SessionStore<RegistrationSession>,
}

impl RegistrationService {
    pub fn new(config: &AppConfig, sessions: SessionStore<RegistrationSession>) -> Self {
        Self {
            rpc: ClinicRpcClient::new(config),
            sessions,
        }
    }

    pub async fn view(&self, session: &Session) -> RegistrationView {
        let state = self
            .sessions
            .snapshot(&session.user.id, RegistrationSession::default)
            .await;
        RegistrationView::new(&state)
    }

    pub async fn update(
        &self,
        session: &Session,
        update: RegistrationUpdate,
    ) -> Result<RegistrationView, RegistrationError> {
        self.sessions
            .update(&session.user.id, RegistrationSession::default, |s| -> Result<_, RegistrationError> {
                s.apply(update)?;
                Ok(RegistrationView::new(s))
            })
            .await
    }

    pub async fn attach_files(
        &self,
        session: &Session,
        files: Vec<AttachedFile>,
    ) -> Result<RegistrationView, RegistrationError> {
        debug!("Attaching {} report(s) for user {}", files.len(), session.user.id);
        self.sessions
            .update(&session.user.id, RegistrationSession::default, |s| -> Result<_, RegistrationError> {
                s.attach(files)?;
                Ok(RegistrationView::new(s))
            })
            .await
    }

    /// Sends the draft. On success the draft is discarded and the caller is
    /// pointed at the dashboard; on failure the draft stays for another try.
    pub async fn submit(&self, session: &Session) -> Result<RegistrationComplete, RegistrationError> {
        let key = session.user.id.as_str();

        let input = self
            .sessions
            .update(key, RegistrationSession::default, |s| s.begin_submission())
            .await?;

        let rpc = self.rpc.clone();
        let token = session.token.clone();
        let result = self
            .sessions
            .settle(
                key,
                RegistrationSession::default,
                async move { rpc.register_patient(&input, &token).await },
                |s, result| s.finish_submission(result.is_ok()),
            )
            .await
            .map_err(|e| RegistrationError::Remote(e.to_string()))?;

        match result {
            Ok(profile) => {
                info!("Patient profile {} registered for user {}", profile.id, key);
                Ok(RegistrationComplete {
                    profile,
                    redirect: DASHBOARD_PATH,
                })
            }
            Err(e) => {
                error!("Registration failed for user {}: {}", key, e);
                Err(RegistrationError::Remote(e.to_string()))
            }
        }
    }
}
