use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub contact_name: String,
    pub value: Option<f64>,
    pub stage: Option<String>,
    pub probability: Option<i64>,
    pub close_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealInput {
    pub title: Option<String>,
    pub company: Option<String>,
    pub contact_name: Option<String>,
    pub value: Option<f64>,
    pub stage: Option<String>,
    pub probability: Option<i64>,
    pub close_date: Option<String>,
}

impl From<Deal> for DealInput {
    fn from(d: Deal) -> Self {
        Self {
            title: Some(d.title),
            company: Some(d.company),
            contact_name: Some(d.contact_name),
            value: d.value,
            stage: d.stage,
            probability: d.probability,
            close_date: d.close_date,
        }
    }
}

/// Kanban columns, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealStage {
    Prospect,
    Discovery,
    Proposal,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

impl DealStage {
    pub const ALL: [DealStage; 6] = [
        DealStage::Prospect,
        DealStage::Discovery,
        DealStage::Proposal,
        DealStage::Negotiation,
        DealStage::ClosedWon,
        DealStage::ClosedLost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DealStage::Prospect => "Prospect",
            DealStage::Discovery => "Discovery",
            DealStage::Proposal => "Proposal",
            DealStage::Negotiation => "Negotiation",
            DealStage::ClosedWon => "Closed Won",
            DealStage::ClosedLost => "Closed Lost",
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, DealStage::ClosedWon | DealStage::ClosedLost)
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stage| stage.as_str() == s)
    }
}
