pub mod prescription;
pub mod share;

pub use prescription::PrescriptionService;
pub use share::{share_message, share_text};
