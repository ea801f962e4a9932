use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: i64,
    pub title: String,
    pub client_name: Option<String>,
    pub client_company: Option<String>,
    pub value: Option<f64>,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub valid_until: Option<String>,
    pub sent_date: Option<String>,
    pub created_at: Option<String>,
}

/// `sent_date`/`created_at` are only honoured on update; create stamps both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalInput {
    pub title: Option<String>,
    pub client_name: Option<String>,
    pub client_company: Option<String>,
    pub value: Option<f64>,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub valid_until: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl From<Proposal> for ProposalInput {
    fn from(p: Proposal) -> Self {
        Self {
            title: Some(p.title),
            client_name: p.client_name,
            client_company: p.client_company,
            value: p.value,
            currency: p.currency,
            status: p.status,
            valid_until: p.valid_until,
            sent_date: p.sent_date,
            created_at: p.created_at,
        }
    }
}
