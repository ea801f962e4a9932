use actix_web::{web, HttpResponse};

use crate::db::{ensure_table, schema::TICKETS};
use crate::error::{ApiError, ApiResult};
use crate::models::{today, TicketInput, TicketStatus, WithId};
use crate::repo;
use crate::state::AppState;

use super::{id_body, UPDATE_ID_REQUIRED};

pub async fn list(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let pool = &state.pool;
    ensure_table(pool, &TICKETS).await?;
    let tickets = repo::tickets::list_all(pool).await?;
    Ok(HttpResponse::Ok().json(tickets))
}

/// New tickets always start `Open`, whatever the body says.
pub async fn create(
    body: web::Json<TicketInput>,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let pool = &state.pool;
    ensure_table(pool, &TICKETS).await?;
    let mut input = body.into_inner();
    input.status = Some(TicketStatus::Open.as_str().to_string());
    input.created_at = Some(today());
    let ticket = repo::tickets::insert(pool, &input).await?;
    Ok(HttpResponse::Created().json(ticket))
}

pub async fn update(
    body: web::Bytes,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let pool = &state.pool;
    ensure_table(pool, &TICKETS).await?;
    let WithId { id, fields } = id_body::<WithId<TicketInput>>(&body)?;
    let id = id.ok_or_else(|| ApiError::validation(UPDATE_ID_REQUIRED))?;
    match repo::tickets::update(pool, id, &fields).await? {
        Some(ticket) => Ok(HttpResponse::Ok().json(ticket)),
        None => Err(ApiError::not_found("Ticket")),
    }
}
