use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims carried by an admin bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

/// A verified admin token, available to handlers behind `auth_middleware`
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub subject: String,
    pub expires_at: DateTime<Utc>,
}
