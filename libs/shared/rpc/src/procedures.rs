use tracing::debug;

use crate::client::ClinicRpcClient;
use crate::error::RpcError;
use crate::records::{
    Appointment, CreateAppointmentInput, CreatePrescriptionInput, Doctor, MedicalRecord,
    PatientProfile, Prescription, RegisterPatientInput,
};

pub const APPOINTMENT_CREATE: &str = "appointment.create";
pub const DOCTOR_GET_ALL: &str = "doctor.getAll";
pub const DOCTOR_GET_PROFILE: &str = "doctor.getProfile";
pub const DOCTOR_GET_APPOINTMENTS: &str = "doctor.getAppointments";
pub const PATIENT_GET_PROFILE: &str = "patient.getProfile";
pub const PATIENT_GET_APPOINTMENTS: &str = "patient.getAppointments";
pub const PATIENT_GET_MEDICAL_HISTORY: &str = "patient.getMedicalHistory";
pub const PATIENT_REGISTER: &str = "patient.register";
pub const PRESCRIPTION_CREATE: &str = "prescription.create";

impl ClinicRpcClient {
    pub async fn create_appointment(
        &self,
        input: &CreateAppointmentInput,
        auth_token: &str,
    ) -> Result<Appointment, RpcError> {
        debug!(
            "Creating appointment for patient {} with doctor {} at {}",
            input.patient_id, input.doctor_id, input.appointment_date
        );
        self.mutate(APPOINTMENT_CREATE, Some(auth_token), input).await
    }

    pub async fn list_doctors(&self, auth_token: Option<&str>) -> Result<Vec<Doctor>, RpcError> {
        self.query(DOCTOR_GET_ALL, auth_token).await
    }

    pub async fn get_doctor_profile(&self, auth_token: &str) -> Result<Option<Doctor>, RpcError> {
        self.query(DOCTOR_GET_PROFILE, Some(auth_token)).await
    }

    pub async fn get_doctor_appointments(&self, auth_token: &str) -> Result<Vec<Appointment>, RpcError> {
        self.query(DOCTOR_GET_APPOINTMENTS, Some(auth_token)).await
    }

    pub async fn get_patient_profile(&self, auth_token: &str) -> Result<Option<PatientProfile>, RpcError> {
        self.query(PATIENT_GET_PROFILE, Some(auth_token)).await
    }

    pub async fn get_patient_appointments(&self, auth_token: &str) -> Result<Vec<Appointment>, RpcError> {
        self.query(PATIENT_GET_APPOINTMENTS, Some(auth_token)).await
    }

    pub async fn get_patient_medical_history(
        &self,
        auth_token: &str,
    ) -> Result<Vec<MedicalRecord>, RpcError> {
        self.query(PATIENT_GET_MEDICAL_HISTORY, Some(auth_token)).await
    }

    pub async fn register_patient(
        &self,
        input: &RegisterPatientInput,
        auth_token: &str,
    ) -> Result<PatientProfile, RpcError> {
        debug!("Registering patient profile: {}", input.name);
        self.mutate(PATIENT_REGISTER, Some(auth_token), input).await
    }

    pub async fn create_prescription(
        &self,
        input: &CreatePrescriptionInput,
        auth_token: &str,
    ) -> Result<Prescription, RpcError> {
        debug!(
            "Creating prescription for patient {} (appointment {})",
            input.patient_id, input.appointment_id
        );
        self.mutate(PRESCRIPTION_CREATE, Some(auth_token), input).await
    }
}
