use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Something, an `@`, something, a dot, something. No whitespace and no
/// second `@` anywhere.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl UserRecord {
    pub fn to_json(&self) -> CoreResult<String> {
        serde_json::to_string(self)
            .map_err(|e| CoreError::Internal(format!("failed to serialize user: {}", e)))
    }

    pub fn from_json(s: &str) -> CoreResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| CoreError::domain("createUser", format!("invalid user record: {}", e)))
    }
}

/// Build the serialized user record. Fields are stored verbatim; the email is
/// not checked here.
pub fn create_user(id: i32, name: &str, email: &str) -> CoreResult<String> {
    UserRecord {
        id,
        name: name.to_string(),
        email: email.to_string(),
    }
    .to_json()
}

pub fn compile_email_rule() -> CoreResult<Regex> {
    Regex::new(EMAIL_PATTERN)
        .map_err(|e| CoreError::Internal(format!("invalid email pattern: {}", e)))
}
