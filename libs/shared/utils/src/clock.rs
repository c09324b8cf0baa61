use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Current instant seen from the clinic's offset.
pub fn clinic_now(offset: FixedOffset) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&offset)
}

/// Calendar date at the clinic right now.
pub fn clinic_today(offset: FixedOffset) -> NaiveDate {
    clinic_now(offset).date_naive()
}
