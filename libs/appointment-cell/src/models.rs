// libs/appointment-cell/src/models.rs
use std::fmt;

use chrono::{Datelike, Months, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize, Serializer};

use doctor_cell::models::{DoctorOption, ListingSource};
use shared_models::error::AppError;
use shared_rpc::Appointment;

// ==============================================================================
// CALENDAR MODELS
// ==============================================================================

/// The month currently displayed by the booking calendar.
///
/// Stored as the first day of the month, so every value is a real month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthCursor {
    first: NaiveDate,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Following month; December rolls over into January of the next year.
    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    /// Preceding month; January rolls back to December of the previous year.
    pub fn previous(&self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    pub fn days_in_month(&self) -> u32 {
        match self.first.checked_add_months(Months::new(1)) {
            Some(next_first) => (next_first - self.first).num_days() as u32,
            // Only reachable for the last representable month, which is December.
            None => 31,
        }
    }

    /// Weekday of the 1st, counted from Sunday = 0.
    pub fn first_weekday(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// "June 2024"
    pub fn label(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

impl Serialize for MonthCursor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MonthView::from(*self).serialize(serializer)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub label: String,
}

impl From<MonthCursor> for MonthView {
    fn from(cursor: MonthCursor) -> Self {
        Self {
            year: cursor.year(),
            month: cursor.month(),
            label: cursor.label(),
        }
    }
}

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarDay {
    /// Padding before the 1st of the month.
    Empty,
    Day(NaiveDate),
}

impl CalendarDay {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            CalendarDay::Empty => None,
            CalendarDay::Day(date) => Some(*date),
        }
    }
}

// ==============================================================================
// SELECTION MODELS
// ==============================================================================

/// Bookable times, identical for every day and doctor.
pub const TIME_SLOTS: [&str; 12] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30",
    "14:00", "14:30", "15:00", "15:30", "16:00", "16:30",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    /// Accepts only entries of [`TIME_SLOTS`].
    pub fn parse(raw: &str) -> Result<Self, BookingError> {
        let raw = raw.trim();
        if !TIME_SLOTS.contains(&raw) {
            return Err(BookingError::UnknownTimeSlot(raw.to_string()));
        }
        NaiveTime::parse_from_str(raw, "%H:%M")
            .map(TimeSlot)
            .map_err(|_| BookingError::UnknownTimeSlot(raw.to_string()))
    }

    pub fn all() -> Vec<TimeSlot> {
        TIME_SLOTS.iter().filter_map(|raw| Self::parse(raw).ok()).collect()
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// What the patient has picked so far. Each field is set independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppointmentDraft {
    pub date: Option<NaiveDate>,
    pub doctor_id: Option<i64>,
    pub time: Option<TimeSlot>,
    pub notes: String,
}

impl AppointmentDraft {
    pub fn is_complete(&self) -> bool {
        self.date.is_some() && self.doctor_id.is_some() && self.time.is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Everything the booking page remembers for one user between requests.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSession {
    pub month: MonthCursor,
    pub draft: AppointmentDraft,
    /// Set while the creation request is in flight.
    pub pending: bool,
}

/// Partial selection change; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionUpdate {
    pub date: Option<NaiveDate>,
    pub doctor_id: Option<i64>,
    pub time: Option<String>,
    pub notes: Option<String>,
}

// ==============================================================================
// PAGE VIEW MODELS
// ==============================================================================

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
pub const NOT_SELECTED: &str = "Not selected";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GridCell {
    pub day: Option<u32>,
    pub date: Option<NaiveDate>,
    pub selectable: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SlotView {
    pub time: TimeSlot,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookingSummary {
    pub date: String,
    pub time: String,
    pub doctor: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingPage {
    pub month: MonthCursor,
    pub weekdays: [&'static str; 7],
    pub cells: Vec<GridCell>,
    pub selected_date_label: Option<String>,
    pub time_slots: Vec<SlotView>,
    pub doctors: Vec<DoctorOption>,
    pub doctor_source: ListingSource,
    pub selection: AppointmentDraft,
    pub summary: BookingSummary,
    pub can_confirm: bool,
    pub pending: bool,
    pub confirm_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingConfirmation {
    pub message: &'static str,
    pub appointment: Appointment,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingError {
    #[error("Please select date, doctor, and time")]
    IncompleteSelection,

    #[error("{0} is in the past and cannot be booked")]
    DateInPast(NaiveDate),

    #[error("{0} is not an available time slot")]
    UnknownTimeSlot(String),

    #[error("Invalid doctor: {0}")]
    InvalidDoctor(i64),

    #[error("Your previous booking request is still being processed")]
    AlreadyPending,

    #[error("No patient profile is linked to this account. Please register first.")]
    NoPatientProfile,

    #[error("{date} {time} does not exist in the clinic's time zone")]
    InvalidTimestamp { date: NaiveDate, time: TimeSlot },

    #[error("Failed to book appointment")]
    Remote(String),
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        let message = err.to_string();
        match err {
            BookingError::IncompleteSelection => AppError::ValidationError(message),
            BookingError::DateInPast(_)
            | BookingError::UnknownTimeSlot(_)
            | BookingError::InvalidDoctor(_)
            | BookingError::InvalidTimestamp { .. } => AppError::BadRequest(message),
            BookingError::AlreadyPending => AppError::Conflict(message),
            BookingError::NoPatientProfile => AppError::NotFound(message),
            BookingError::Remote(_) => AppError::ExternalService(message),
        }
    }
}
