//! Pure functions computing what each page shows from a [`CrmState`].

use super::CrmState;
use crate::models::{Deal, DealStage, Retailer, Ticket, TicketStatus, UserType, Vendor};

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_retailers: usize,
    pub total_vendors: usize,
    pub total_leads: usize,
    pub active_deals: usize,
    pub open_tickets: usize,
    pub pipeline_value: f64,
    /// The first two retailers in list order.
    pub recent_retailers: Vec<Retailer>,
}

pub fn dashboard(state: &CrmState) -> DashboardSummary {
    let open_deals = state.deals.iter().filter(|d| is_open_deal(d));
    let open_status = TicketStatus::Open.as_str();

    DashboardSummary {
        total_retailers: state.retailers.len(),
        total_vendors: state.vendors.len(),
        total_leads: state.leads.len(),
        active_deals: open_deals.clone().count(),
        open_tickets: state
            .tickets
            .iter()
            .filter(|t| t.status.as_deref() == Some(open_status))
            .count(),
        pipeline_value: open_deals.filter_map(|d| d.value).sum(),
        recent_retailers: state.retailers.iter().take(2).cloned().collect(),
    }
}

fn is_open_deal(deal: &Deal) -> bool {
    match deal.stage.as_deref().and_then(DealStage::parse) {
        Some(stage) => stage.is_open(),
        None => true,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StageColumn {
    pub stage: String,
    pub deals: Vec<Deal>,
    pub total_value: f64,
}

/// Groups deals into kanban columns: the known stages in pipeline order (empty
/// columns included), then any other stage names in first-seen order.
pub fn deal_board(deals: &[Deal]) -> Vec<StageColumn> {
    let mut columns: Vec<StageColumn> = DealStage::ALL
        .iter()
        .map(|s| StageColumn {
            stage: s.as_str().to_string(),
            deals: Vec::new(),
            total_value: 0.0,
        })
        .collect();

    for deal in deals {
        let stage = deal.stage.as_deref().unwrap_or("Unassigned");
        let idx = match columns.iter().position(|c| c.stage == stage) {
            Some(idx) => idx,
            None => {
                columns.push(StageColumn {
                    stage: stage.to_string(),
                    deals: Vec::new(),
                    total_value: 0.0,
                });
                columns.len() - 1
            }
        };
        let column = &mut columns[idx];
        column.total_value += deal.value.unwrap_or(0.0);
        column.deals.push(deal.clone());
    }

    columns
}

#[derive(Debug, Clone, PartialEq)]
pub struct TicketRow {
    pub ticket: Ticket,
    pub submitted_by: String,
}

/// Resolves a ticket's `(userType, userId)` pair against the loaded retailers
/// and vendors.
pub fn submitter_name(ticket: &Ticket, retailers: &[Retailer], vendors: &[Vendor]) -> Option<String> {
    let user_id = ticket.user_id?;
    match ticket.user_type.as_deref().and_then(UserType::parse)? {
        UserType::Retailer => retailers.iter().find(|r| r.id == user_id).map(|r| r.name.clone()),
        UserType::Vendor => vendors.iter().find(|v| v.id == user_id).map(|v| v.name.clone()),
    }
}

pub fn ticket_rows(state: &CrmState) -> Vec<TicketRow> {
    state
        .tickets
        .iter()
        .map(|t| TicketRow {
            ticket: t.clone(),
            submitted_by: submitter_name(t, &state.retailers, &state.vendors)
                .unwrap_or_else(|| "Unknown User".to_string()),
        })
        .collect()
}

/// Goals offered in the group communication dialog, per recipient type.
pub fn message_templates(user_type: UserType) -> &'static [&'static str] {
    match user_type {
        UserType::Retailer => &[
            "Welcome to the marketplace",
            "New vendors available in your area",
            "Reminder to complete your first order",
            "Account status update",
        ],
        UserType::Vendor => &[
            "Welcome to the marketplace",
            "Update your product catalog",
            "New retailer demand in your category",
            "Account status update",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(id: i64, stage: Option<&str>, value: Option<f64>) -> Deal {
        Deal {
            id,
            title: format!("Deal {id}"),
            company: "Acme".into(),
            contact_name: "Jo".into(),
            value,
            stage: stage.map(String::from),
            probability: None,
            close_date: None,
        }
    }

    fn retailer(id: i64, name: &str) -> Retailer {
        Retailer {
            id,
            name: name.into(),
            company: "Shop".into(),
            email: format!("{id}@shop.com"),
            phone: None,
            account_status: None,
            marketplace_status: None,
            join_date: None,
        }
    }

    fn vendor(id: i64, name: &str) -> Vendor {
        Vendor {
            id,
            name: name.into(),
            business_name: None,
            category: None,
            email: format!("{id}@vendor.com"),
            phone: None,
            account_status: None,
            marketplace_status: None,
            join_date: None,
        }
    }

    fn ticket(id: i64, user_id: Option<i64>, user_type: Option<&str>, status: &str) -> Ticket {
        Ticket {
            id,
            title: "Help".into(),
            description: None,
            status: Some(status.into()),
            kind: Some("Support".into()),
            user_id,
            user_type: user_type.map(String::from),
            created_at: None,
        }
    }

    #[test]
    fn board_keeps_stage_order_and_totals() {
        let deals = vec![
            deal(1, Some("Proposal"), Some(100.0)),
            deal(2, Some("Prospect"), Some(50.0)),
            deal(3, Some("Proposal"), None),
        ];
        let board = deal_board(&deals);

        let names: Vec<&str> = board.iter().map(|c| c.stage.as_str()).collect();
        assert_eq!(&names[..6], &["Prospect", "Discovery", "Proposal", "Negotiation", "Closed Won", "Closed Lost"]);
        assert_eq!(board[2].deals.len(), 2);
        assert_eq!(board[2].total_value, 100.0);
        assert_eq!(board[0].deals[0].id, 2);
        assert!(board[1].deals.is_empty());
    }

    #[test]
    fn board_appends_unknown_stages() {
        let board = deal_board(&[deal(1, Some("On Hold"), Some(10.0)), deal(2, None, None)]);
        assert_eq!(board.len(), 8);
        assert_eq!(board[6].stage, "On Hold");
        assert_eq!(board[7].stage, "Unassigned");
    }

    #[test]
    fn submitter_resolves_by_type_and_id() {
        let retailers = vec![retailer(1, "Sara")];
        let vendors = vec![vendor(1, "Khalid")];

        let t = ticket(1, Some(1), Some("Vendor"), "Open");
        assert_eq!(submitter_name(&t, &retailers, &vendors).as_deref(), Some("Khalid"));

        let t = ticket(2, Some(1), Some("Retailer"), "Open");
        assert_eq!(submitter_name(&t, &retailers, &vendors).as_deref(), Some("Sara"));

        let t = ticket(3, Some(9), Some("Retailer"), "Open");
        assert_eq!(submitter_name(&t, &retailers, &vendors), None);
    }

    #[test]
    fn ticket_rows_fall_back_to_unknown_user() {
        let state = CrmState {
            tickets: vec![ticket(1, None, None, "Open")],
            ..CrmState::default()
        };
        assert_eq!(ticket_rows(&state)[0].submitted_by, "Unknown User");
    }

    #[test]
    fn dashboard_counts_open_work() {
        let state = CrmState {
            retailers: vec![retailer(1, "A"), retailer(2, "B"), retailer(3, "C")],
            vendors: vec![vendor(1, "V")],
            deals: vec![
                deal(1, Some("Prospect"), Some(100.0)),
                deal(2, Some("Closed Won"), Some(900.0)),
                deal(3, Some("Negotiation"), Some(50.0)),
            ],
            tickets: vec![
                ticket(1, None, None, "Open"),
                ticket(2, None, None, "Closed"),
                ticket(3, None, None, "In Progress"),
            ],
            ..CrmState::default()
        };
        let summary = dashboard(&state);

        assert_eq!(summary.total_retailers, 3);
        assert_eq!(summary.total_vendors, 1);
        assert_eq!(summary.active_deals, 2);
        assert_eq!(summary.pipeline_value, 150.0);
        assert_eq!(summary.open_tickets, 1);
        let recent: Vec<i64> = summary.recent_retailers.iter().map(|r| r.id).collect();
        assert_eq!(recent, vec![1, 2]);
    }

    #[test]
    fn templates_exist_for_both_recipient_types() {
        assert!(!message_templates(UserType::Retailer).is_empty());
        assert!(!message_templates(UserType::Vendor).is_empty());
    }
}
