use chrono::{FixedOffset, NaiveDate};
use tracing::{debug, error, info, warn};

use doctor_cell::models::{DoctorListing, DoctorOption};
use doctor_cell::services::DoctorService;
use shared_config::AppConfig;
use shared_models::auth::Session;
use shared_rpc::ClinicRpcClient;
use shared_utils::session::{SessionState, SessionStore};

use crate::models::{
    BookingConfirmation, BookingError, BookingPage, BookingSession, BookingSummary,
    SelectionUpdate, SlotView, TimeSlot, NOT_SELECTED, WEEKDAY_LABELS,
};
use crate::services::calendar::grid_cells;

pub const BOOKING_SUCCESS_MESSAGE: &str = "Appointment booked successfully!";

/// The displayed month is kept with an empty draft, so booking state is only
/// dropped when it expires or the store is full.
impl SessionState for BookingSession {}

pub struct BookingService {
    rpc: ClinicRpcClient,
    doctors: DoctorService,
    sessions: SessionStore<BookingSession>,
    offset: FixedOffset,
}

impl BookingService {
    pub fn new(config: &AppConfig, sessions: SessionStore<BookingSession>) -> Self {
        Self {
            rpc: ClinicRpcClient::new(config),
            doctors: DoctorService::new(config),
            sessions,
            offset: config.clinic_offset(),
        }
    }

    pub async fn page(&self, session: &Session, today: NaiveDate) -> BookingPage {
        let state = self
            .sessions
            .snapshot(&session.user.id, || BookingSession::new(today))
            .await;
        let listing = self.doctors.list_doctors(Some(&session.token)).await;
        render_page(&state, &listing, today)
    }

    pub async fn next_month(&self, session: &Session, today: NaiveDate) -> BookingPage {
        self.sessions
            .update(&session.user.id, || BookingSession::new(today), |s| s.next_month())
            .await;
        self.page(session, today).await
    }

    pub async fn previous_month(&self, session: &Session, today: NaiveDate) -> BookingPage {
        self.sessions
            .update(&session.user.id, || BookingSession::new(today), |s| s.previous_month())
            .await;
        self.page(session, today).await
    }

    pub async fn update_selection(
        &self,
        session: &Session,
        update: &SelectionUpdate,
        today: NaiveDate,
    ) -> Result<BookingPage, BookingError> {
        self.sessions
            .update(&session.user.id, || BookingSession::new(today), |s| s.apply(update, today))
            .await?;
        Ok(self.page(session, today).await)
    }

    /// Submits the current draft. At most one creation request per user is
    /// in flight; the draft is cleared only when the clinic service accepts it.
    pub async fn confirm(
        &self,
        session: &Session,
        today: NaiveDate,
    ) -> Result<BookingConfirmation, BookingError> {
        let key = session.user.id.as_str();

        let current = self.sessions.snapshot(key, || BookingSession::new(today)).await;
        if current.pending {
            return Err(BookingError::AlreadyPending);
        }
        if !current.draft.is_complete() {
            return Err(BookingError::IncompleteSelection);
        }

        let patient_id = self.resolve_patient_id(session).await?;

        let input = self
            .sessions
            .update(key, || BookingSession::new(today), |s| s.begin_submission(patient_id, self.offset))
            .await?;

        let rpc = self.rpc.clone();
        let token = session.token.clone();
        let result = self
            .sessions
            .settle(
                key,
                move || BookingSession::new(today),
                async move { rpc.create_appointment(&input, &token).await },
                |s, result| s.finish_submission(result.is_ok()),
            )
            .await
            .map_err(|e| BookingError::Remote(e.to_string()))?;

        match result {
            Ok(appointment) => {
                info!("Appointment {} booked for patient {}", appointment.id, patient_id);
                Ok(BookingConfirmation {
                    message: BOOKING_SUCCESS_MESSAGE,
                    appointment,
                })
            }
            Err(e) => {
                error!("Failed to book appointment for patient {}: {}", patient_id, e);
                Err(BookingError::Remote(e.to_string()))
            }
        }
    }

    async fn resolve_patient_id(&self, session: &Session) -> Result<i64, BookingError> {
        if let Some(id) = session.patient_id() {
            return Ok(id);
        }

        debug!("No patient_id claim for user {}, fetching profile", session.user.id);
        match self.rpc.get_patient_profile(&session.token).await {
            Ok(Some(profile)) => Ok(profile.id),
            Ok(None) => Err(BookingError::NoPatientProfile),
            Err(e) => {
                warn!("Patient profile lookup failed: {}", e);
                Err(BookingError::Remote(e.to_string()))
            }
        }
    }
}

pub fn render_page(state: &BookingSession, listing: &DoctorListing, today: NaiveDate) -> BookingPage {
    let draft = &state.draft;

    let doctor_label = draft.doctor_id.map(|id| match listing.find(id) {
        Some(doctor) => doctor.name.clone(),
        None => format!("Doctor #{}", id),
    });

    BookingPage {
        month: state.month,
        weekdays: WEEKDAY_LABELS,
        cells: grid_cells(state.month, today, draft.date),
        selected_date_label: draft.date.map(|d| d.format("%A, %B %-d, %Y").to_string()),
        time_slots: TimeSlot::all()
            .into_iter()
            .map(|time| SlotView {
                time,
                selected: draft.time == Some(time),
            })
            .collect(),
        doctors: listing
            .doctors
            .iter()
            .map(|doctor| DoctorOption::from_doctor(doctor, draft.doctor_id))
            .collect(),
        doctor_source: listing.source,
        selection: draft.clone(),
        summary: BookingSummary {
            date: draft
                .date
                .map(|d| d.format("%b %-d, %Y").to_string())
                .unwrap_or_else(|| NOT_SELECTED.to_string()),
            time: draft
                .time
                .map(|t| t.to_string())
                .unwrap_or_else(|| NOT_SELECTED.to_string()),
            doctor: doctor_label.unwrap_or_else(|| NOT_SELECTED.to_string()),
        },
        can_confirm: state.can_confirm(),
        pending: state.pending,
        confirm_label: if state.pending { "Booking..." } else { "Confirm Booking" },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doctor_cell::models::ListingSource;
    use doctor_cell::services::directory::doctor_directory;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn listing() -> DoctorListing {
        DoctorListing {
            doctors: doctor_directory(),
            source: ListingSource::Directory,
        }
    }

    #[test]
    fn test_render_empty_selection() {
        let today = date(2024, 6, 10);
        let page = render_page(&BookingSession::new(today), &listing(), today);

        assert_eq!(page.month.label(), "June 2024");
        assert_eq!(page.time_slots.len(), 12);
        assert_eq!(page.summary.date, NOT_SELECTED);
        assert_eq!(page.summary.doctor, NOT_SELECTED);
        assert!(!page.can_confirm);
        assert_eq!(page.confirm_label, "Confirm Booking");
        assert!(page.doctors.iter().all(|d| !d.selected));
    }

    #[test]
    fn test_render_complete_selection() {
        let today = date(2024, 6, 1);
        let mut state = BookingSession::new(today);
        state.select_date(date(2024, 6, 10), today).unwrap();
        state.select_doctor(3).unwrap();
        state.select_time("14:00").unwrap();

        let page = render_page(&state, &listing(), today);
        assert!(page.can_confirm);
        assert_eq!(page.summary.date, "Jun 10, 2024");
        assert_eq!(page.summary.time, "14:00");
        assert_eq!(page.summary.doctor, "Dr. Meera Nair");
        assert_eq!(page.selected_date_label.as_deref(), Some("Monday, June 10, 2024"));
        assert_eq!(page.time_slots.iter().filter(|s| s.selected).count(), 1);
        assert_eq!(page.doctors.iter().filter(|d| d.selected).count(), 1);
    }

    #[test]
    fn test_render_pending_disables_confirm() {
        let today = date(2024, 6, 1);
        let mut state = BookingSession::new(today);
        state.select_date(date(2024, 6, 10), today).unwrap();
        state.select_doctor(3).unwrap();
        state.select_time("14:00").unwrap();
        state.pending = true;

        let page = render_page(&state, &listing(), today);
        assert!(!page.can_confirm);
        assert_eq!(page.confirm_label, "Booking...");
    }
}
