pub mod dashboard;
pub mod directory;
pub mod doctor;

pub use dashboard::DoctorDashboardService;
pub use directory::doctor_directory;
pub use doctor::DoctorService;
