pub mod dashboard;
pub mod registration;

pub use dashboard::PatientDashboardService;
pub use registration::RegistrationService;
