use std::net::SocketAddr;
use std::sync::Arc;

use base64::{engine::general_purpose, Engine as _};
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde_json::{json, Value};
use sha2::Sha256;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::auth::{AuthContext, Session, User};

pub const TEST_JWT_SECRET: &str = "test-secret-key-for-jwt-validation-must-be-long-enough";

pub struct TestConfig {
    pub jwt_secret: String,
    pub rpc_base_url: String,
    pub rpc_api_key: String,
    pub utc_offset_minutes: i32,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            jwt_secret: TEST_JWT_SECRET.to_string(),
            rpc_base_url: "http://localhost:4000".to_string(),
            rpc_api_key: "test-api-key".to_string(),
            utc_offset_minutes: 330,
        }
    }
}

impl TestConfig {
    /// Config pointing the RPC client at a mock server.
    pub fn with_rpc_url(url: &str) -> Self {
        Self {
            rpc_base_url: url.to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            rpc_base_url: self.rpc_base_url.clone(),
            rpc_api_key: self.rpc_api_key.clone(),
            jwt_secret: self.jwt_secret.clone(),
            utc_offset_minutes: self.utc_offset_minutes,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct TestUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub patient_id: Option<i64>,
    pub doctor_id: Option<i64>,
}

impl Default for TestUser {
    fn default() -> Self {
        Self::new("test@example.com", "patient")
    }
}

impl TestUser {
    pub fn new(email: &str, role: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Test User".to_string(),
            email: email.to_string(),
            role: role.to_string(),
            patient_id: None,
            doctor_id: None,
        }
    }

    pub fn doctor(email: &str) -> Self {
        Self::new(email, "doctor")
    }

    pub fn patient(email: &str) -> Self {
        Self::new(email, "patient")
    }

    pub fn patient_with_id(email: &str, patient_id: i64) -> Self {
        Self {
            patient_id: Some(patient_id),
            ..Self::patient(email)
        }
    }

    pub fn doctor_with_id(email: &str, doctor_id: i64) -> Self {
        Self {
            doctor_id: Some(doctor_id),
            ..Self::doctor(email)
        }
    }

    fn metadata(&self) -> Value {
        let mut metadata = serde_json::Map::new();
        if let Some(id) = self.patient_id {
            metadata.insert("patient_id".to_string(), json!(id));
        }
        if let Some(id) = self.doctor_id {
            metadata.insert("doctor_id".to_string(), json!(id));
        }
        Value::Object(metadata)
    }

    pub fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            role: Some(self.role.clone()),
            metadata: Some(self.metadata()),
            created_at: Some(Utc::now()),
        }
    }

    pub fn to_context(&self, token: &str) -> AuthContext {
        AuthContext::Authenticated(Session {
            user: self.to_user(),
            token: token.to_string(),
        })
    }
}

pub struct JwtTestUtils;

impl JwtTestUtils {
    pub fn create_test_token(user: &TestUser, secret: &str, exp_hours: Option<i64>) -> String {
        let now = Utc::now();
        let exp = now + Duration::hours(exp_hours.unwrap_or(24));

        let header = json!({
            "alg": "HS256",
            "typ": "JWT"
        });

        let payload = json!({
            "sub": user.id,
            "name": user.name,
            "email": user.email,
            "role": user.role,
            "user_metadata": user.metadata(),
            "iat": now.timestamp(),
            "exp": exp.timestamp()
        });

        let header_encoded = general_purpose::URL_SAFE_NO_PAD.encode(header.to_string());
        let payload_encoded = general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string());

        let signing_input = format!("{}.{}", header_encoded, payload_encoded);

        let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(signing_input.as_bytes());
        let signature = mac.finalize().into_bytes();
        let signature_encoded = general_purpose::URL_SAFE_NO_PAD.encode(signature);

        format!("{}.{}", signing_input, signature_encoded)
    }

    pub fn create_expired_token(user: &TestUser, secret: &str) -> String {
        Self::create_test_token(user, secret, Some(-1))
    }

    pub fn create_invalid_signature_token(user: &TestUser) -> String {
        Self::create_test_token(user, "wrong-secret", Some(24))
    }

    pub fn create_malformed_token() -> String {
        "invalid.token.format".to_string()
    }
}

/// Canned clinic-service payloads, already wrapped in the RPC envelope where noted.
pub struct MockClinicResponses;

impl MockClinicResponses {
    pub fn envelope(data: Value) -> Value {
        json!({ "result": { "data": data } })
    }

    pub fn doctor(id: i64, name: &str, specialization: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "specialization": specialization,
            "qualifications": "BAMS, MD (Ayurveda)",
            "experience": 10,
            "bio": "Experienced Ayurvedic physician",
            "image": format!("https://images.example.com/doctors/{}.jpg", id)
        })
    }

    pub fn appointment(id: i64, patient_id: i64, doctor_id: i64, date: &str, status: &str) -> Value {
        json!({
            "id": id,
            "patientId": patient_id,
            "doctorId": doctor_id,
            "appointmentDate": date,
            "status": status,
            "notes": null
        })
    }

    pub fn patient_profile(id: i64, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "age": 34,
            "gender": "female",
            "contactInfo": "+91 98765 43210",
            "address": "12 MG Road, Pune",
            "bloodGroup": "O+",
            "medicalHistory": null,
            "emergencyContact": null,
            "emergencyContactName": null
        })
    }

    pub fn medical_record(id: i64, patient_id: i64, record_type: &str) -> Value {
        json!({
            "id": id,
            "patientId": patient_id,
            "recordType": record_type,
            "content": "Vata imbalance, advised Abhyanga",
            "fileUrl": null,
            "createdAt": "2024-05-02T10:00:00Z"
        })
    }

    pub fn prescription(id: i64, appointment_id: i64, patient_id: i64, doctor_id: i64) -> Value {
        json!({
            "id": id,
            "appointmentId": appointment_id,
            "patientId": patient_id,
            "doctorId": doctor_id,
            "medicines": "Ashwagandha churna 3g twice daily",
            "therapies": "Abhyanga",
            "recommendations": "Warm, light meals",
            "nextSteps": "Review in 2 weeks"
        })
    }

    pub fn error_response(message: &str, code: &str) -> Value {
        json!({
            "error": {
                "message": message,
                "code": code
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = TestConfig::with_rpc_url("http://127.0.0.1:9999").to_app_config();

        assert_eq!(config.rpc_base_url, "http://127.0.0.1:9999");
        assert_eq!(config.rpc_api_key, "test-api-key");
        assert!(config.is_configured());
    }

    #[test]
    fn test_user_creation() {
        let user = TestUser::doctor_with_id("doc@example.com", 3);
        assert_eq!(user.role, "doctor");

        let context = user.to_context("token");
        let session = context.session().unwrap();
        assert_eq!(session.doctor_id(), Some(3));
        assert_eq!(session.patient_id(), None);
    }

    #[test]
    fn test_jwt_token_creation() {
        let user = TestUser::default();
        let token = JwtTestUtils::create_test_token(&user, "test-secret", Some(1));

        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_envelope_wraps_data() {
        let wrapped = MockClinicResponses::envelope(json!([1, 2]));
        assert_eq!(wrapped["result"]["data"], json!([1, 2]));
    }
}
