use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: i64,
    pub company: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: Option<String>,
    pub source: Option<String>,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadInput {
    pub company: Option<String>,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
    pub source: Option<String>,
    pub value: Option<f64>,
}

impl From<Lead> for LeadInput {
    fn from(l: Lead) -> Self {
        Self {
            company: Some(l.company),
            contact_name: Some(l.contact_name),
            email: Some(l.email),
            phone: l.phone,
            status: l.status,
            source: l.source,
            value: l.value,
        }
    }
}
