use actix_cors::Cors;
use actix_web::dev::Service;
use actix_web::middleware::NormalizePath;
use actix_web::{web, App, HttpServer};
use tracing::Instrument;
use uuid::Uuid;

use crm_backend::config::Config;
use crm_backend::state::AppState;
use crm_backend::{db, routes, telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let config = Config::from_env();
    tracing::info!(
        port = config.port,
        database_url = %config.database_url,
        model = %config.llm.model,
        "starting crm-backend"
    );
    if config.llm.api_key.is_none() {
        tracing::warn!("OPENROUTER_API_KEY not set; /api/generate-message will fail");
    }

    let pool = db::init_pool(&config.database_url, config.database_max_connections)
        .await
        .map_err(|e| std::io::Error::other(format!("failed to open database: {e}")))?;
    db::provision_all(&pool)
        .await
        .map_err(|e| std::io::Error::other(format!("failed to provision tables: {e}")))?;

    let app_state = AppState::new(pool, config.llm.clone())
        .map_err(|e| std::io::Error::other(format!("failed to build HTTP client: {e}")))?;
    let app_state = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap_fn(|req, srv| {
                let span = tracing::info_span!(
                    "request",
                    request_id = %Uuid::new_v4(),
                    method = %req.method(),
                    path = %req.path(),
                );
                let fut = {
                    let _entered = span.enter();
                    srv.call(req)
                };
                async move {
                    let res = fut.await?;
                    tracing::info!(status = res.status().as_u16(), "request completed");
                    Ok(res)
                }
                .instrument(span)
            })
            .wrap(NormalizePath::trim())
            .wrap(Cors::permissive())
            .app_data(app_state.clone())
            .configure(routes::configure)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
