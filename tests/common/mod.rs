#![allow(dead_code)]

use actix_web::{web, App, HttpServer};
use sqlx::SqlitePool;

use crm_backend::config::LlmConfig;
use crm_backend::db;
use crm_backend::routes;
use crm_backend::state::AppState;

pub async fn memory_pool() -> SqlitePool {
    db::init_pool("sqlite::memory:", 1).await.expect("in-memory pool")
}

pub async fn test_state_with(llm: LlmConfig) -> web::Data<AppState> {
    let pool = memory_pool().await;
    web::Data::new(AppState::new(pool, llm).expect("app state"))
}

pub async fn test_state() -> web::Data<AppState> {
    test_state_with(LlmConfig::default()).await
}

/// Runs the full CRM API on an ephemeral port and returns its base URL.
pub fn spawn_crm_server(state: web::Data<AppState>) -> String {
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind test server");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}")
}
