use chrono::FixedOffset;

use shared_config::AppConfig;
use shared_models::auth::Session;
use shared_models::page::Section;
use shared_rpc::{Appointment, ClinicRpcClient, MedicalRecord, PatientProfile};

use crate::models::{
    MedicalRecordRow, PatientAppointmentRow, PatientDashboard, ProfileCard, ProfilePanel,
};

pub const REGISTER_PATH: &str = "/patients/register";
pub const BOOK_PATH: &str = "/appointments";

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn appointment_row(appointment: &Appointment, offset: FixedOffset) -> PatientAppointmentRow {
    let local = appointment.appointment_date.with_timezone(&offset);
    PatientAppointmentRow {
        id: appointment.id,
        title: format!("Appointment #{}", appointment.id),
        appointment_date: local,
        when_label: local.format("%A, %B %-d, %Y at %I:%M %p").to_string(),
        status: appointment.status.clone(),
        status_label: capitalize(&appointment.status.to_string()),
        notes: appointment.notes.clone(),
    }
}

pub fn record_row(record: &MedicalRecord, offset: FixedOffset) -> MedicalRecordRow {
    MedicalRecordRow {
        id: record.id,
        record_type: record.record_type.clone(),
        recorded_on: record.created_at.with_timezone(&offset).date_naive(),
        content: record.content.clone(),
        file_url: record.file_url.clone(),
    }
}

pub fn profile_panel(profile: Option<&PatientProfile>) -> ProfilePanel {
    match profile {
        Some(profile) => ProfilePanel::Profile(ProfileCard::from(profile)),
        None => ProfilePanel::Incomplete {
            register_link: REGISTER_PATH,
        },
    }
}

pub struct PatientDashboardService {
    rpc: ClinicRpcClient,
    offset: FixedOffset,
}

impl PatientDashboardService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            rpc: ClinicRpcClient::new(config),
            offset: config.clinic_offset(),
        }
    }

    /// Loads the three panels concurrently; each one degrades on its own.
    pub async fn build(&self, session: &Session) -> PatientDashboard {
        let (profile, appointments, history) = futures::join!(
            self.rpc.get_patient_profile(&session.token),
            self.rpc.get_patient_appointments(&session.token),
            self.rpc.get_patient_medical_history(&session.token),
        );

        let profile = Section::from_result(profile, "patient profile");
        let welcome_name = match &profile {
            Section::Ready(Some(profile)) => profile.name.clone(),
            _ => session.user.display_name().to_string(),
        };

        let offset = self.offset;
        PatientDashboard {
            welcome_name,
            profile: profile.map(|profile| profile_panel(profile.as_ref())),
            appointments: Section::from_result(appointments, "patient appointments")
                .map(|list| list.iter().map(|apt| appointment_row(apt, offset)).collect::<Vec<_>>()),
            medical_history: Section::from_result(history, "medical history")
                .map(|list| list.iter().map(|record| record_row(record, offset)).collect::<Vec<_>>()),
            book_link: BOOK_PATH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared_rpc::AppointmentStatus;

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(330 * 60).unwrap()
    }

    #[test]
    fn test_appointment_row_uses_clinic_time() {
        let appointment = Appointment {
            id: 7,
            patient_id: 42,
            doctor_id: 3,
            appointment_date: Utc.with_ymd_and_hms(2024, 6, 10, 8, 30, 0).unwrap(),
            status: AppointmentStatus::Scheduled,
            notes: Some("Bring reports".into()),
        };

        let row = appointment_row(&appointment, ist());
        assert_eq!(row.title, "Appointment #7");
        assert_eq!(row.when_label, "Monday, June 10, 2024 at 02:00 PM");
        assert_eq!(row.status_label, "Scheduled");
    }

    #[test]
    fn test_record_date_rolls_into_clinic_day() {
        let record = MedicalRecord {
            id: 1,
            patient_id: 42,
            record_type: "Lab Report".into(),
            content: None,
            file_url: None,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 20, 0, 0).unwrap(),
        };

        let row = record_row(&record, ist());
        assert_eq!(row.recorded_on.to_string(), "2024-05-02");
    }

    #[test]
    fn test_missing_profile_points_to_registration() {
        assert_eq!(
            profile_panel(None),
            ProfilePanel::Incomplete {
                register_link: "/patients/register"
            }
        );
    }
}
