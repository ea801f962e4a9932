use actix_web::web;

use crate::handlers::{self, deals, leads, messages, method_not_allowed, profile, proposals, retailers, tickets, vendors};

/// Registers every endpoint. Each collection lives at one path; updates and
/// deletes carry the row id in the JSON body.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(handlers::json_config())
        .route("/", web::get().to(handlers::main))
        .route("/health", web::get().to(handlers::health_check))
        .service(
            web::resource("/api/retailers")
                .route(web::get().to(retailers::list))
                .route(web::post().to(retailers::create))
                .route(web::put().to(retailers::update))
                .default_service(method_not_allowed("GET, POST, PUT")),
        )
        .service(
            web::resource("/api/vendors")
                .route(web::get().to(vendors::list))
                .route(web::post().to(vendors::create))
                .route(web::put().to(vendors::update))
                .default_service(method_not_allowed("GET, POST, PUT")),
        )
        .service(
            web::resource("/api/leads")
                .route(web::get().to(leads::list))
                .route(web::post().to(leads::create))
                .route(web::put().to(leads::update))
                .route(web::delete().to(leads::delete))
                .default_service(method_not_allowed("GET, POST, PUT, DELETE")),
        )
        .service(
            web::resource("/api/deals")
                .route(web::get().to(deals::list))
                .route(web::post().to(deals::create))
                .route(web::put().to(deals::update))
                .route(web::delete().to(deals::delete))
                .default_service(method_not_allowed("GET, POST, PUT, DELETE")),
        )
        .service(
            web::resource("/api/proposals")
                .route(web::get().to(proposals::list))
                .route(web::post().to(proposals::create))
                .route(web::put().to(proposals::update))
                .route(web::delete().to(proposals::delete))
                .default_service(method_not_allowed("GET, POST, PUT, DELETE")),
        )
        .service(
            web::resource("/api/tickets")
                .route(web::get().to(tickets::list))
                .route(web::post().to(tickets::create))
                .route(web::put().to(tickets::update))
                .default_service(method_not_allowed("GET, POST, PUT")),
        )
        .service(
            web::resource("/api/profile")
                .route(web::get().to(profile::get_profile))
                .route(web::put().to(profile::update_profile))
                .default_service(method_not_allowed("GET, PUT")),
        )
        .service(
            web::resource("/api/generate-message")
                .route(web::post().to(messages::generate_message))
                .default_service(method_not_allowed("POST")),
        );
}
