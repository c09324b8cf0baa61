use chrono::{DateTime, FixedOffset, Utc};
use tracing::debug;

use shared_config::AppConfig;
use shared_models::auth::Session;
use shared_models::page::Section;
use shared_rpc::{Appointment, AppointmentStatus, ClinicRpcClient, Doctor};

use crate::models::{AppointmentRow, AppointmentStats, DoctorDashboard};

/// How many upcoming appointments the side panel lists.
pub const UPCOMING_PANEL_LIMIT: usize = 5;

const DEFAULT_SPECIALIZATION: &str = "Ayurvedic Doctor";

/// Appointments on the same calendar date as `now`, in the clinic's offset.
pub fn todays_appointments<'a>(
    appointments: &'a [Appointment],
    now: DateTime<FixedOffset>,
) -> Vec<&'a Appointment> {
    let offset = *now.offset();
    let today = now.date_naive();
    appointments
        .iter()
        .filter(|apt| apt.appointment_date.with_timezone(&offset).date_naive() == today)
        .collect()
}

/// Appointments strictly after `now`, soonest first.
pub fn upcoming_appointments<'a>(
    appointments: &'a [Appointment],
    now: DateTime<FixedOffset>,
) -> Vec<&'a Appointment> {
    let now = now.with_timezone(&Utc);
    let mut upcoming: Vec<&Appointment> = appointments
        .iter()
        .filter(|apt| apt.appointment_date > now)
        .collect();
    upcoming.sort_by_key(|apt| apt.appointment_date);
    upcoming
}

pub fn completed_appointments(appointments: &[Appointment]) -> Vec<&Appointment> {
    appointments
        .iter()
        .filter(|apt| apt.status == AppointmentStatus::Completed)
        .collect()
}

pub fn appointment_stats(appointments: &[Appointment], now: DateTime<FixedOffset>) -> AppointmentStats {
    AppointmentStats {
        total: appointments.len(),
        today: todays_appointments(appointments, now).len(),
        upcoming: upcoming_appointments(appointments, now).len(),
        completed: completed_appointments(appointments).len(),
    }
}

fn rows(appointments: &[&Appointment], offset: FixedOffset) -> Vec<AppointmentRow> {
    appointments
        .iter()
        .map(|apt| AppointmentRow::new(apt, offset))
        .collect()
}

pub struct DoctorDashboardService {
    rpc: ClinicRpcClient,
}

impl DoctorDashboardService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            rpc: ClinicRpcClient::new(config),
        }
    }

    pub async fn build(&self, session: &Session, now: DateTime<FixedOffset>) -> DoctorDashboard {
        let (profile, appointments) = futures::join!(
            self.rpc.get_doctor_profile(&session.token),
            self.rpc.get_doctor_appointments(&session.token),
        );

        let profile = profile
            .map_err(|e| debug!("Doctor profile unavailable: {}", e))
            .ok()
            .flatten();
        let appointments = Section::from_result(appointments, "doctor appointments");

        Self::assemble(session, profile.as_ref(), appointments, now)
    }

    pub fn assemble(
        session: &Session,
        profile: Option<&Doctor>,
        appointments: Section<Vec<Appointment>>,
        now: DateTime<FixedOffset>,
    ) -> DoctorDashboard {
        let offset = *now.offset();

        let welcome_name = profile
            .map(|doctor| doctor.name.clone())
            .unwrap_or_else(|| session.user.display_name().to_string());
        let specialization = profile
            .map(|doctor| doctor.specialization.clone())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SPECIALIZATION.to_string());

        match appointments {
            Section::Ready(appointments) => {
                let today = todays_appointments(&appointments, now);
                let upcoming = upcoming_appointments(&appointments, now);
                let all: Vec<&Appointment> = appointments.iter().collect();
                let upcoming_panel = &upcoming[..upcoming.len().min(UPCOMING_PANEL_LIMIT)];

                DoctorDashboard {
                    welcome_name,
                    specialization,
                    stats: Section::Ready(appointment_stats(&appointments, now)),
                    today: Section::Ready(rows(&today, offset)),
                    upcoming: Section::Ready(rows(upcoming_panel, offset)),
                    all: Section::Ready(rows(&all, offset)),
                }
            }
            Section::Unavailable => DoctorDashboard {
                welcome_name,
                specialization,
                stats: Section::Unavailable,
                today: Section::Unavailable,
                upcoming: Section::Unavailable,
                all: Section::Unavailable,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(330 * 60).unwrap()
    }

    fn appointment(id: i64, utc: DateTime<Utc>, status: AppointmentStatus) -> Appointment {
        Appointment {
            id,
            patient_id: 100 + id,
            doctor_id: 3,
            appointment_date: utc,
            status,
            notes: None,
        }
    }

    fn sample(now: DateTime<FixedOffset>) -> Vec<Appointment> {
        let now_utc = now.with_timezone(&Utc);
        vec![
            // earlier today, done
            appointment(1, now_utc - chrono::Duration::hours(2), AppointmentStatus::Completed),
            // later today
            appointment(2, now_utc + chrono::Duration::hours(1), AppointmentStatus::Scheduled),
            // next week
            appointment(3, now_utc + chrono::Duration::days(7), AppointmentStatus::Scheduled),
            // last month
            appointment(4, now_utc - chrono::Duration::days(30), AppointmentStatus::Cancelled),
        ]
    }

    #[test]
    fn test_filters_and_stats() {
        let now = ist().with_ymd_and_hms(2024, 6, 10, 13, 0, 0).unwrap();
        let appointments = sample(now);

        let today: Vec<i64> = todays_appointments(&appointments, now).iter().map(|a| a.id).collect();
        assert_eq!(today, vec![1, 2]);

        let upcoming: Vec<i64> = upcoming_appointments(&appointments, now).iter().map(|a| a.id).collect();
        assert_eq!(upcoming, vec![2, 3]);

        assert_eq!(
            appointment_stats(&appointments, now),
            AppointmentStats { total: 4, today: 2, upcoming: 2, completed: 1 }
        );
    }

    #[test]
    fn test_today_uses_clinic_calendar_date() {
        // 20:00 UTC on the 9th is already 01:30 on the 10th in IST.
        let now = ist().with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap();
        let late_utc = Utc.with_ymd_and_hms(2024, 6, 9, 20, 0, 0).unwrap();
        let appointments = vec![appointment(1, late_utc, AppointmentStatus::Completed)];

        assert_eq!(todays_appointments(&appointments, now).len(), 1);
    }

    #[test]
    fn test_upcoming_panel_is_capped() {
        let now = ist().with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap();
        let now_utc = now.with_timezone(&Utc);
        let appointments: Vec<Appointment> = (1..=8)
            .map(|d| appointment(d, now_utc + chrono::Duration::days(9 - d), AppointmentStatus::Scheduled))
            .collect();

        let session = shared_models::auth::Session {
            user: shared_models::auth::User {
                id: "u".into(),
                name: Some("Dr. Test".into()),
                email: None,
                role: Some("doctor".into()),
                metadata: None,
                created_at: None,
            },
            token: "t".into(),
        };

        let dashboard = DoctorDashboardService::assemble(&session, None, Section::Ready(appointments), now);
        let upcoming = dashboard.upcoming.as_ready().unwrap();
        assert_eq!(upcoming.len(), UPCOMING_PANEL_LIMIT);
        // soonest first: id 8 is one day out
        assert_eq!(upcoming[0].id, 8);
        assert_eq!(dashboard.specialization, DEFAULT_SPECIALIZATION);
        assert_eq!(dashboard.welcome_name, "Dr. Test");
    }
}
