use tracing::{error, info};

use doctor_cell::models::DoctorError;
use doctor_cell::services::DoctorService;
use shared_config::AppConfig;
use shared_models::auth::Session;
use shared_rpc::{ClinicRpcClient, CreatePrescriptionInput};
use shared_utils::session::{SessionState, SessionStore};

use crate::models::{
    PrescriptionDraft, PrescriptionError, PrescriptionSession, PrescriptionUpdate,
    PrescriptionView, SavedPrescription, ShareMessage,
};
use crate::services::share::share_message;

pub const SAVED_MESSAGE: &str = "Prescription saved successfully!";

/// Drafts are per doctor and per patient, so switching patients never mixes them.
pub fn draft_key(session: &Session, patient_id: i64) -> String {
    format!("{}:{}", session.user.id, patient_id)
}

fn check_patient(patient_id: i64) -> Result<i64, PrescriptionError> {
    if patient_id > 0 {
        Ok(patient_id)
    } else {
        Err(PrescriptionError::InvalidPatient(patient_id))
    }
}

impl PrescriptionDraft {
    pub fn apply(&mut self, update: PrescriptionUpdate) {
        if let Some(medicines) = update.medicines {
            self.medicines = medicines;
        }
        if let Some(therapies) = update.therapies {
            self.therapies = therapies;
        }
        if let Some(recommendations) = update.recommendations {
            self.recommendations = recommendations;
        }
        if let Some(next_steps) = update.next_steps {
            self.next_steps = next_steps;
        }
        if let Some(consultation_notes) = update.consultation_notes {
            self.consultation_notes = consultation_notes;
        }
    }

    /// Clears the four prescription fields. Consultation notes belong to the
    /// visit, not the prescription, and are kept.
    pub fn reset_prescription(&mut self) {
        let consultation_notes = std::mem::take(&mut self.consultation_notes);
        *self = Self {
            consultation_notes,
            ..Self::default()
        };
    }
}

impl SessionState for PrescriptionSession {
    fn is_blank(&self) -> bool {
        !self.pending && self.draft == PrescriptionDraft::default()
    }
}

impl PrescriptionSession {
    pub fn begin_submission(
        &mut self,
        appointment_id: i64,
        patient_id: i64,
        doctor_id: i64,
    ) -> Result<CreatePrescriptionInput, PrescriptionError> {
        if self.pending {
            return Err(PrescriptionError::AlreadyPending);
        }
        self.pending = true;
        Ok(CreatePrescriptionInput {
            appointment_id,
            patient_id,
            doctor_id,
            medicines: self.draft.medicines.clone(),
            therapies: self.draft.therapies.clone(),
            recommendations: self.draft.recommendations.clone(),
            next_steps: self.draft.next_steps.clone(),
        })
    }

    pub fn finish_submission(&mut self, succeeded: bool) {
        self.pending = false;
        if succeeded {
            self.draft.reset_prescription();
        }
    }
}

pub struct PrescriptionService {
    rpc: ClinicRpcClient,
    doctors: DoctorService,
    sessions: SessionStore<PrescriptionSession>,
}

impl PrescriptionService {
    pub fn new(config: &AppConfig, sessions: SessionStore<PrescriptionSession>) -> Self {
        Self {
            rpc: ClinicRpcClient::new(config),
            doctors: DoctorService::new(config),
            sessions,
        }
    }

    pub async fn view(
        &self,
        session: &Session,
        patient_id: i64,
        appointment_id: Option<i64>,
    ) -> Result<PrescriptionView, PrescriptionError> {
        let patient_id = check_patient(patient_id)?;
        let state = self
            .sessions
            .snapshot(&draft_key(session, patient_id), PrescriptionSession::default)
            .await;
        Ok(PrescriptionView::new(patient_id, appointment_id, &state))
    }

    pub async fn update(
        &self,
        session: &Session,
        patient_id: i64,
        appointment_id: Option<i64>,
        update: PrescriptionUpdate,
    ) -> Result<PrescriptionView, PrescriptionError> {
        let patient_id = check_patient(patient_id)?;
        let view = self
            .sessions
            .update(&draft_key(session, patient_id), PrescriptionSession::default, |s| {
                s.draft.apply(update);
                PrescriptionView::new(patient_id, appointment_id, s)
            })
            .await;
        Ok(view)
    }

    pub async fn share(&self, session: &Session, patient_id: i64) -> Result<ShareMessage, PrescriptionError> {
        let patient_id = check_patient(patient_id)?;
        let state = self
            .sessions
            .snapshot(&draft_key(session, patient_id), PrescriptionSession::default)
            .await;
        Ok(share_message(patient_id, &state.draft))
    }

    pub async fn submit(
        &self,
        session: &Session,
        patient_id: i64,
        appointment_id: Option<i64>,
    ) -> Result<SavedPrescription, PrescriptionError> {
        let patient_id = check_patient(patient_id)?;
        let appointment_id = appointment_id.ok_or(PrescriptionError::MissingAppointment)?;
        let key = draft_key(session, patient_id);

        let doctor_id = self.doctors.resolve_doctor_id(session).await.map_err(|e| match e {
            DoctorError::NoProfile => PrescriptionError::NoDoctorProfile,
            DoctorError::Remote(msg) => PrescriptionError::Remote(msg),
        })?;

        let input = self
            .sessions
            .update(&key, PrescriptionSession::default, |s| {
                s.begin_submission(appointment_id, patient_id, doctor_id)
            })
            .await?;

        let rpc = self.rpc.clone();
        let token = session.token.clone();
        let result = self
            .sessions
            .settle(
                &key,
                PrescriptionSession::default,
                async move { rpc.create_prescription(&input, &token).await },
                |s, result| s.finish_submission(result.is_ok()),
            )
            .await
            .map_err(|e| PrescriptionError::Remote(e.to_string()))?;

        match result {
            Ok(prescription) => {
                info!(
                    "Prescription {} saved for patient {} (appointment {})",
                    prescription.id, patient_id, appointment_id
                );
                Ok(SavedPrescription {
                    message: SAVED_MESSAGE,
                    prescription,
                })
            }
            Err(e) => {
                error!("Error saving prescription for patient {}: {}", patient_id, e);
                Err(PrescriptionError::Remote(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn filled() -> PrescriptionSession {
        let mut session = PrescriptionSession::default();
        session.draft.apply(PrescriptionUpdate {
            medicines: Some("Ashwagandha 500mg twice daily".into()),
            therapies: Some("Shirodhara weekly".into()),
            recommendations: Some("Meditate 20 minutes".into()),
            next_steps: Some("Follow-up in 2 weeks".into()),
            consultation_notes: Some("Stress, poor sleep".into()),
        });
        session
    }

    #[test]
    fn test_apply_sets_only_given_fields() {
        let mut draft = PrescriptionDraft::default();
        draft.apply(PrescriptionUpdate {
            medicines: Some("Triphala".into()),
            ..PrescriptionUpdate::default()
        });
        draft.apply(PrescriptionUpdate {
            therapies: Some("Abhyanga".into()),
            ..PrescriptionUpdate::default()
        });

        assert_eq!(draft.medicines, "Triphala");
        assert_eq!(draft.therapies, "Abhyanga");
        assert_eq!(draft.next_steps, "");
    }

    #[test]
    fn test_submission_sends_draft_verbatim() {
        let mut session = filled();
        let input = session.begin_submission(2, 22, 3).unwrap();

        assert_eq!(input.appointment_id, 2);
        assert_eq!(input.patient_id, 22);
        assert_eq!(input.doctor_id, 3);
        assert_eq!(input.medicines, "Ashwagandha 500mg twice daily");
        assert_eq!(input.next_steps, "Follow-up in 2 weeks");
        assert_matches!(session.begin_submission(2, 22, 3), Err(PrescriptionError::AlreadyPending));
    }

    #[test]
    fn test_success_resets_prescription_but_keeps_notes() {
        let mut session = filled();
        session.begin_submission(2, 22, 3).unwrap();
        session.finish_submission(true);

        assert!(!session.pending);
        assert_eq!(session.draft.medicines, "");
        assert_eq!(session.draft.therapies, "");
        assert_eq!(session.draft.consultation_notes, "Stress, poor sleep");
    }

    #[test]
    fn test_failure_keeps_everything() {
        let mut session = filled();
        session.begin_submission(2, 22, 3).unwrap();
        session.finish_submission(false);

        assert!(!session.pending);
        assert_eq!(session.draft, filled().draft);
    }

    #[test]
    fn test_blank_only_without_any_text() {
        assert!(PrescriptionSession::default().is_blank());

        let mut session = filled();
        session.begin_submission(2, 22, 3).unwrap();
        session.finish_submission(true);
        // consultation notes survive the reset
        assert!(!session.is_blank());

        session.draft.consultation_notes.clear();
        assert!(session.is_blank());
    }

    #[test]
    fn test_patient_id_must_be_positive() {
        assert_matches!(check_patient(0), Err(PrescriptionError::InvalidPatient(0)));
        assert_eq!(check_patient(22), Ok(22));
    }
}
