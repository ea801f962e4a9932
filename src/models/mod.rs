pub mod retailer;
pub mod vendor;
pub mod lead;
pub mod deal;
pub mod proposal;
pub mod ticket;
pub mod profile;

use serde::{Deserialize, Serialize};

pub use retailer::{Retailer, RetailerInput};
pub use vendor::{Vendor, VendorInput};
pub use lead::{Lead, LeadInput};
pub use deal::{Deal, DealInput, DealStage};
pub use proposal::{Proposal, ProposalInput};
pub use ticket::{Ticket, TicketInput, TicketKind, TicketStatus, UserType};
pub use profile::{UserProfile, ProfileInput, PROFILE_ID};

/// Body of a PUT/DELETE request: the row id travels next to the entity fields.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WithId<T> {
    pub id: Option<i64>,
    #[serde(flatten)]
    pub fields: T,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IdOnly {
    pub id: Option<i64>,
}

/// Calendar date in the `YYYY-MM-DD` form every date column uses.
pub fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}
