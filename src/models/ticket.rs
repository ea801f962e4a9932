use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: Option<String>,
    pub user_id: Option<i64>,
    pub user_type: Option<String>,
    pub created_at: Option<String>,
}

/// On create the server forces `status = Open` and stamps `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketInput {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub user_id: Option<i64>,
    pub user_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl From<Ticket> for TicketInput {
    fn from(t: Ticket) -> Self {
        Self {
            title: Some(t.title),
            description: t.description,
            status: t.status,
            kind: t.kind,
            user_id: t.user_id,
            user_type: t.user_type,
            created_at: t.created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Open,
    InProgress,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketKind {
    Support,
    FeatureRequest,
}

impl TicketKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketKind::Support => "Support",
            TicketKind::FeatureRequest => "Feature Request",
        }
    }
}

/// Which collection a ticket's `user_id` points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserType {
    Retailer,
    Vendor,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Retailer => "Retailer",
            UserType::Vendor => "Vendor",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Retailer" => Some(UserType::Retailer),
            "Vendor" => Some(UserType::Vendor),
            _ => None,
        }
    }
}
