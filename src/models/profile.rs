use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The application keeps exactly one profile row.
pub const PROFILE_ID: i64 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UserProfile {
    /// What the client shows when the profile could not be loaded.
    pub fn placeholder(email: &str) -> Self {
        Self {
            id: PROFILE_ID,
            full_name: Some("Guest".to_string()),
            email: Some(email.to_string()),
            phone: Some(String::new()),
        }
    }
}

impl From<UserProfile> for ProfileInput {
    fn from(p: UserProfile) -> Self {
        Self {
            full_name: p.full_name,
            email: p.email,
            phone: p.phone,
        }
    }
}
