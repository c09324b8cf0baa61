use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct JwtHeader {
    pub alg: String,
    pub typ: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub exp: Option<u64>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub user_metadata: Option<serde_json::Value>,
    pub iat: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("there")
    }

    fn metadata_id(&self, key: &str) -> Option<i64> {
        let value = self.metadata.as_ref()?.get(key)?;
        value
            .as_i64()
            .or_else(|| value.as_str().and_then(|raw| raw.parse().ok()))
    }
}

/// A signed-in user together with the bearer token that is forwarded to the clinic service.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl Session {
    pub fn patient_id(&self) -> Option<i64> {
        self.user.metadata_id("patient_id")
    }

    pub fn doctor_id(&self) -> Option<i64> {
        self.user.metadata_id("doctor_id")
    }
}

/// Authentication state resolved once per request and handed to every page handler.
#[derive(Debug, Clone)]
pub enum AuthContext {
    Anonymous,
    Authenticated(Session),
}

impl AuthContext {
    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthContext::Anonymous => None,
            AuthContext::Authenticated(session) => Some(session),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthContext::Authenticated(_))
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.session().map(|session| session.token.as_str())
    }
}
