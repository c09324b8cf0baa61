pub mod booking;
pub mod calendar;
pub mod selection;

pub use booking::BookingService;
pub use calendar::{is_selectable, month_grid};
pub use selection::appointment_timestamp;
