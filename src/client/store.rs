//! Client-side copy of every collection.
//!
//! Reads never fail: a collection that cannot be fetched is shown empty. Writes
//! go to the server first and then the whole affected collection is fetched
//! again, so the state always mirrors what the server stored.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::{paths, ClientError, CrmClient};
use crate::models::{
    Deal, DealInput, Lead, LeadInput, ProfileInput, Proposal, ProposalInput, Retailer,
    RetailerInput, Ticket, TicketInput, UserProfile, Vendor, VendorInput, PROFILE_ID,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CrmState {
    pub retailers: Vec<Retailer>,
    pub vendors: Vec<Vendor>,
    pub tickets: Vec<Ticket>,
    pub proposals: Vec<Proposal>,
    pub leads: Vec<Lead>,
    pub deals: Vec<Deal>,
    pub profile: UserProfile,
}

impl Default for CrmState {
    fn default() -> Self {
        Self {
            retailers: Vec::new(),
            vendors: Vec::new(),
            tickets: Vec::new(),
            proposals: Vec::new(),
            leads: Vec::new(),
            deals: Vec::new(),
            profile: UserProfile {
                id: PROFILE_ID,
                full_name: Some(String::new()),
                email: Some(String::new()),
                phone: Some(String::new()),
            },
        }
    }
}

pub struct CrmStore {
    client: CrmClient,
    state: CrmState,
}

async fn fetch_list<T: DeserializeOwned>(client: &CrmClient, path: &str) -> Vec<T> {
    match client.fetch::<Option<Vec<T>>>(path).await {
        Ok(items) => items.unwrap_or_default(),
        Err(err) => {
            tracing::warn!(path, error = %err, "list fetch failed; showing empty collection");
            Vec::new()
        }
    }
}

async fn fetch_profile(client: &CrmClient) -> UserProfile {
    match client.fetch::<Option<UserProfile>>(paths::PROFILE).await {
        Ok(Some(profile)) => profile,
        Ok(None) => UserProfile::placeholder(""),
        Err(err) => {
            tracing::warn!(error = %err, "profile fetch failed");
            UserProfile::placeholder("error@loading.com")
        }
    }
}

impl CrmStore {
    pub fn new(client: CrmClient) -> Self {
        Self {
            client,
            state: CrmState::default(),
        }
    }

    /// Builds a store and loads everything.
    pub async fn load(client: CrmClient) -> Self {
        let mut store = Self::new(client);
        store.reload().await;
        store
    }

    pub fn state(&self) -> &CrmState {
        &self.state
    }

    pub fn client(&self) -> &CrmClient {
        &self.client
    }

    /// Fetches the six collections and the profile concurrently.
    pub async fn reload(&mut self) {
        let client = &self.client;
        let (retailers, vendors, tickets, proposals, leads, deals, profile) = futures_util::join!(
            fetch_list(client, paths::RETAILERS),
            fetch_list(client, paths::VENDORS),
            fetch_list(client, paths::TICKETS),
            fetch_list(client, paths::PROPOSALS),
            fetch_list(client, paths::LEADS),
            fetch_list(client, paths::DEALS),
            fetch_profile(client),
        );
        self.state = CrmState {
            retailers,
            vendors,
            tickets,
            proposals,
            leads,
            deals,
            profile,
        };
    }

    pub async fn add_retailer(&mut self, retailer: &RetailerInput) -> Result<(), ClientError> {
        let _: Retailer = self.client.send(Method::POST, paths::RETAILERS, retailer).await?;
        self.state.retailers = fetch_list(&self.client, paths::RETAILERS).await;
        Ok(())
    }

    pub async fn update_retailer(&mut self, retailer: &Retailer) -> Result<(), ClientError> {
        let _: Retailer = self.client.send(Method::PUT, paths::RETAILERS, retailer).await?;
        self.state.retailers = fetch_list(&self.client, paths::RETAILERS).await;
        Ok(())
    }

    pub async fn add_vendor(&mut self, vendor: &VendorInput) -> Result<(), ClientError> {
        let _: Vendor = self.client.send(Method::POST, paths::VENDORS, vendor).await?;
        self.state.vendors = fetch_list(&self.client, paths::VENDORS).await;
        Ok(())
    }

    pub async fn update_vendor(&mut self, vendor: &Vendor) -> Result<(), ClientError> {
        let _: Vendor = self.client.send(Method::PUT, paths::VENDORS, vendor).await?;
        self.state.vendors = fetch_list(&self.client, paths::VENDORS).await;
        Ok(())
    }

    pub async fn add_lead(&mut self, lead: &LeadInput) -> Result<(), ClientError> {
        let _: Lead = self.client.send(Method::POST, paths::LEADS, lead).await?;
        self.state.leads = fetch_list(&self.client, paths::LEADS).await;
        Ok(())
    }

    pub async fn update_lead(&mut self, lead: &Lead) -> Result<(), ClientError> {
        let _: Lead = self.client.send(Method::PUT, paths::LEADS, lead).await?;
        self.state.leads = fetch_list(&self.client, paths::LEADS).await;
        Ok(())
    }

    pub async fn delete_lead(&mut self, id: i64) -> Result<(), ClientError> {
        self.client
            .send_without_reply(Method::DELETE, paths::LEADS, &json!({ "id": id }))
            .await?;
        self.state.leads = fetch_list(&self.client, paths::LEADS).await;
        Ok(())
    }

    pub async fn add_ticket(&mut self, ticket: &TicketInput) -> Result<(), ClientError> {
        let _: Ticket = self.client.send(Method::POST, paths::TICKETS, ticket).await?;
        self.state.tickets = fetch_list(&self.client, paths::TICKETS).await;
        Ok(())
    }

    pub async fn update_ticket(&mut self, ticket: &Ticket) -> Result<(), ClientError> {
        let _: Ticket = self.client.send(Method::PUT, paths::TICKETS, ticket).await?;
        self.state.tickets = fetch_list(&self.client, paths::TICKETS).await;
        Ok(())
    }

    pub async fn add_proposal(&mut self, proposal: &ProposalInput) -> Result<(), ClientError> {
        let _: Proposal = self.client.send(Method::POST, paths::PROPOSALS, proposal).await?;
        self.state.proposals = fetch_list(&self.client, paths::PROPOSALS).await;
        Ok(())
    }

    pub async fn update_proposal(&mut self, proposal: &Proposal) -> Result<(), ClientError> {
        let _: Proposal = self.client.send(Method::PUT, paths::PROPOSALS, proposal).await?;
        self.state.proposals = fetch_list(&self.client, paths::PROPOSALS).await;
        Ok(())
    }

    pub async fn delete_proposal(&mut self, id: i64) -> Result<(), ClientError> {
        self.client
            .send_without_reply(Method::DELETE, paths::PROPOSALS, &json!({ "id": id }))
            .await?;
        self.state.proposals = fetch_list(&self.client, paths::PROPOSALS).await;
        Ok(())
    }

    pub async fn add_deal(&mut self, deal: &DealInput) -> Result<(), ClientError> {
        let _: Deal = self.client.send(Method::POST, paths::DEALS, deal).await?;
        self.state.deals = fetch_list(&self.client, paths::DEALS).await;
        Ok(())
    }

    pub async fn update_deal(&mut self, deal: &Deal) -> Result<(), ClientError> {
        let _: Deal = self.client.send(Method::PUT, paths::DEALS, deal).await?;
        self.state.deals = fetch_list(&self.client, paths::DEALS).await;
        Ok(())
    }

    pub async fn delete_deal(&mut self, id: i64) -> Result<(), ClientError> {
        self.client
            .send_without_reply(Method::DELETE, paths::DEALS, &json!({ "id": id }))
            .await?;
        self.state.deals = fetch_list(&self.client, paths::DEALS).await;
        Ok(())
    }

    /// Kanban drag-and-drop: moves a locally known deal to `stage`. Ids not in
    /// the current state are ignored.
    pub async fn update_deal_stage(&mut self, id: i64, stage: &str) -> Result<(), ClientError> {
        let Some(deal) = self.state.deals.iter().find(|d| d.id == id) else {
            return Ok(());
        };
        let moved = Deal {
            stage: Some(stage.to_string()),
            ..deal.clone()
        };
        self.update_deal(&moved).await
    }

    /// The profile is taken from the PUT reply rather than fetched again.
    pub async fn update_profile(&mut self, profile: &ProfileInput) -> Result<(), ClientError> {
        let saved: UserProfile = self.client.send(Method::PUT, paths::PROFILE, profile).await?;
        self.state.profile = saved;
        Ok(())
    }
}
