use tracing::{debug, warn};

use shared_config::AppConfig;
use shared_models::auth::Session;
use shared_rpc::{ClinicRpcClient, Doctor};

use crate::models::{DoctorError, DoctorListing, ListingSource};
use crate::services::directory::doctor_directory;

pub struct DoctorService {
    rpc: ClinicRpcClient,
}

impl DoctorService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            rpc: ClinicRpcClient::new(config),
        }
    }

    /// Doctors offered for booking. Falls back to the clinic directory when
    /// the live list cannot be loaded, so the page always has choices.
    pub async fn list_doctors(&self, auth_token: Option<&str>) -> DoctorListing {
        match self.rpc.list_doctors(auth_token).await {
            Ok(doctors) => {
                debug!("Loaded {} doctors from clinic service", doctors.len());
                DoctorListing {
                    doctors,
                    source: ListingSource::Remote,
                }
            }
            Err(e) => {
                warn!("Doctor list unavailable, using directory: {}", e);
                DoctorListing {
                    doctors: doctor_directory(),
                    source: ListingSource::Directory,
                }
            }
        }
    }

    pub async fn get_profile(&self, session: &Session) -> Result<Option<Doctor>, DoctorError> {
        self.rpc
            .get_doctor_profile(&session.token)
            .await
            .map_err(|e| DoctorError::Remote(e.to_string()))
    }

    /// Doctor id for the signed-in user: token metadata first, then the remote profile.
    pub async fn resolve_doctor_id(&self, session: &Session) -> Result<i64, DoctorError> {
        if let Some(id) = session.doctor_id() {
            return Ok(id);
        }

        debug!("No doctor_id claim for user {}, fetching profile", session.user.id);
        self.get_profile(session)
            .await?
            .map(|doctor| doctor.id)
            .ok_or(DoctorError::NoProfile)
    }
}
