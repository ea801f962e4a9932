use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Retailer {
    pub id: i64,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: Option<String>,
    pub account_status: Option<String>,
    pub marketplace_status: Option<String>,
    pub join_date: Option<String>,
}

/// Writable fields. `join_date` is ignored on create; the server stamps it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetailerInput {
    pub name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub account_status: Option<String>,
    pub marketplace_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
}

impl From<Retailer> for RetailerInput {
    fn from(r: Retailer) -> Self {
        Self {
            name: Some(r.name),
            company: Some(r.company),
            email: Some(r.email),
            phone: r.phone,
            account_status: r.account_status,
            marketplace_status: r.marketplace_status,
            join_date: r.join_date,
        }
    }
}
