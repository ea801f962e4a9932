mod common;

use actix_web::{App, HttpServer};

use crm_backend::client::{views, CrmClient, CrmStore};
use crm_backend::models::{LeadInput, ProfileInput, TicketInput};

async fn live_store() -> CrmStore {
    let base_url = common::spawn_crm_server(common::test_state().await);
    CrmStore::load(CrmClient::new(base_url).expect("client")).await
}

#[actix_web::test]
async fn load_fetches_every_collection_and_profile() {
    let store = live_store().await;
    let state = store.state();

    assert_eq!(state.retailers.len(), 3);
    assert_eq!(state.vendors.len(), 2);
    assert_eq!(state.leads.len(), 2);
    assert_eq!(state.deals.len(), 3);
    assert_eq!(state.proposals.len(), 1);
    assert_eq!(state.tickets.len(), 2);
    assert_eq!(state.profile.full_name.as_deref(), Some("Mohamed Hussein"));

    let rows = views::ticket_rows(state);
    assert_eq!(rows[0].submitted_by, "Khalid Saeed");
    assert_eq!(rows[1].submitted_by, "Omar Haddad");
}

#[actix_web::test]
async fn mutations_refetch_the_collection() {
    let mut store = live_store().await;

    store
        .add_lead(&LeadInput {
            company: Some("Acme".into()),
            contact_name: Some("Jo".into()),
            email: Some("jo@acme.com".into()),
            value: Some(1000.0),
            ..LeadInput::default()
        })
        .await
        .unwrap();
    let added = store.state().leads.last().cloned().unwrap();
    assert_eq!(store.state().leads.len(), 3);
    assert_eq!(added.company, "Acme");

    store.delete_lead(added.id).await.unwrap();
    assert_eq!(store.state().leads.len(), 2);
    assert!(store.delete_lead(added.id).await.is_err());

    store
        .add_ticket(&TicketInput {
            title: Some("Broken invoice".into()),
            status: Some("Closed".into()),
            user_id: Some(1),
            user_type: Some("Retailer".into()),
            ..TicketInput::default()
        })
        .await
        .unwrap();
    let ticket = store.state().tickets.last().unwrap();
    assert_eq!(ticket.status.as_deref(), Some("Open"));
}

#[actix_web::test]
async fn deal_stage_moves_persist() {
    let mut store = live_store().await;
    let id = store.state().deals[0].id;

    store.update_deal_stage(id, "Closed Won").await.unwrap();
    let moved = store.state().deals.iter().find(|d| d.id == id).unwrap();
    assert_eq!(moved.stage.as_deref(), Some("Closed Won"));

    let before = store.state().deals.clone();
    store.update_deal_stage(9_999, "Negotiation").await.unwrap();
    assert_eq!(store.state().deals, before);

    let summary = views::dashboard(store.state());
    assert_eq!(summary.active_deals, 2);
}

#[actix_web::test]
async fn profile_update_takes_the_server_reply() {
    let mut store = live_store().await;

    store
        .update_profile(&ProfileInput {
            full_name: Some("Mona Ali".into()),
            email: Some("mona@example.com".into()),
            phone: Some("42".into()),
        })
        .await
        .unwrap();
    assert_eq!(store.state().profile.id, 1);
    assert_eq!(store.state().profile.full_name.as_deref(), Some("Mona Ali"));

    store.reload().await;
    assert_eq!(store.state().profile.email.as_deref(), Some("mona@example.com"));
}

#[actix_web::test]
async fn unreachable_api_degrades_to_empty_state() {
    // Knows no CRM routes, so every fetch gets a 404.
    let server = HttpServer::new(App::new)
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind empty server");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    let store = CrmStore::load(CrmClient::new(format!("http://{addr}")).unwrap()).await;
    let state = store.state();

    assert!(state.retailers.is_empty());
    assert!(state.deals.is_empty());
    assert!(state.tickets.is_empty());
    assert_eq!(state.profile.full_name.as_deref(), Some("Guest"));
    assert_eq!(state.profile.email.as_deref(), Some("error@loading.com"));
}
