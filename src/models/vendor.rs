use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: i64,
    pub name: String,
    pub business_name: Option<String>,
    pub category: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub account_status: Option<String>,
    pub marketplace_status: Option<String>,
    pub join_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorInput {
    pub name: Option<String>,
    pub business_name: Option<String>,
    pub category: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub account_status: Option<String>,
    pub marketplace_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
}

impl From<Vendor> for VendorInput {
    fn from(v: Vendor) -> Self {
        Self {
            name: Some(v.name),
            business_name: v.business_name,
            category: v.category,
            email: Some(v.email),
            phone: v.phone,
            account_status: v.account_status,
            marketplace_status: v.marketplace_status,
            join_date: v.join_date,
        }
    }
}
