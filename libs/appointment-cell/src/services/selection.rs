use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use tracing::debug;

use shared_rpc::CreateAppointmentInput;
use shared_utils::forms::normalize_optional;

use crate::models::{
    AppointmentDraft, BookingError, BookingSession, MonthCursor, SelectionUpdate, TimeSlot,
};
use crate::services::calendar::is_selectable;

/// Combines a calendar date and slot into an instant in the clinic's offset.
pub fn appointment_timestamp(
    date: NaiveDate,
    time: TimeSlot,
    offset: FixedOffset,
) -> Result<DateTime<FixedOffset>, BookingError> {
    offset
        .from_local_datetime(&date.and_time(time.time()))
        .single()
        .ok_or(BookingError::InvalidTimestamp { date, time })
}

impl BookingSession {
    /// Fresh booking state showing the month that contains `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            month: MonthCursor::containing(today),
            draft: AppointmentDraft::default(),
            pending: false,
        }
    }

    pub fn next_month(&mut self) {
        self.month = self.month.next();
    }

    pub fn previous_month(&mut self) {
        self.month = self.month.previous();
    }

    /// Picking a date also moves the calendar to that date's month.
    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> Result<(), BookingError> {
        if !is_selectable(date, today) {
            return Err(BookingError::DateInPast(date));
        }
        self.draft.date = Some(date);
        if !self.month.contains(date) {
            self.month = MonthCursor::containing(date);
        }
        Ok(())
    }

    pub fn select_doctor(&mut self, doctor_id: i64) -> Result<(), BookingError> {
        if doctor_id <= 0 {
            return Err(BookingError::InvalidDoctor(doctor_id));
        }
        self.draft.doctor_id = Some(doctor_id);
        Ok(())
    }

    pub fn select_time(&mut self, raw: &str) -> Result<(), BookingError> {
        self.draft.time = Some(TimeSlot::parse(raw)?);
        Ok(())
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.draft.notes = notes.to_string();
    }

    /// Applies every field of `update`, or none of them if any is invalid.
    pub fn apply(&mut self, update: &SelectionUpdate, today: NaiveDate) -> Result<(), BookingError> {
        let mut next = self.clone();
        if let Some(date) = update.date {
            next.select_date(date, today)?;
        }
        if let Some(doctor_id) = update.doctor_id {
            next.select_doctor(doctor_id)?;
        }
        if let Some(time) = &update.time {
            next.select_time(time)?;
        }
        if let Some(notes) = &update.notes {
            next.set_notes(notes);
        }
        *self = next;
        Ok(())
    }

    pub fn can_confirm(&self) -> bool {
        self.draft.is_complete() && !self.pending
    }

    /// Checks the draft and marks the session pending. The returned input is
    /// what gets sent; nothing is marked on error.
    pub fn begin_submission(
        &mut self,
        patient_id: i64,
        offset: FixedOffset,
    ) -> Result<CreateAppointmentInput, BookingError> {
        if self.pending {
            return Err(BookingError::AlreadyPending);
        }
        let (date, doctor_id, time) = match (self.draft.date, self.draft.doctor_id, self.draft.time) {
            (Some(date), Some(doctor_id), Some(time)) => (date, doctor_id, time),
            _ => return Err(BookingError::IncompleteSelection),
        };

        let input = CreateAppointmentInput {
            patient_id,
            doctor_id,
            appointment_date: appointment_timestamp(date, time, offset)?,
            notes: normalize_optional(&self.draft.notes),
        };
        self.pending = true;
        Ok(input)
    }

    /// Clears the pending flag. A successful booking also clears the draft;
    /// a failed one keeps every selection so the user can retry.
    pub fn finish_submission(&mut self, succeeded: bool) {
        self.pending = false;
        if succeeded {
            debug!("Booking accepted, resetting draft");
            self.draft.reset();
        }
    }
}
