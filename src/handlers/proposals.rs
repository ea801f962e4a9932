use actix_web::{web, HttpResponse};

use crate::db::{ensure_table, schema::PROPOSALS};
use crate::error::{ApiError, ApiResult};
use crate::models::{today, IdOnly, ProposalInput, WithId};
use crate::repo;
use crate::state::AppState;

use super::{id_body, DELETE_ID_REQUIRED, UPDATE_ID_REQUIRED};

pub async fn list(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let pool = &state.pool;
    ensure_table(pool, &PROPOSALS).await?;
    let proposals = repo::proposals::list_all(pool).await?;
    Ok(HttpResponse::Ok().json(proposals))
}

pub async fn create(
    body: web::Json<ProposalInput>,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let pool = &state.pool;
    ensure_table(pool, &PROPOSALS).await?;
    let mut input = body.into_inner();
    let now = today();
    input.sent_date = Some(now.clone());
    input.created_at = Some(now);
    let proposal = repo::proposals::insert(pool, &input).await?;
    Ok(HttpResponse::Created().json(proposal))
}

pub async fn update(
    body: web::Bytes,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let pool = &state.pool;
    ensure_table(pool, &PROPOSALS).await?;
    let WithId { id, fields } = id_body::<WithId<ProposalInput>>(&body)?;
    let id = id.ok_or_else(|| ApiError::validation(UPDATE_ID_REQUIRED))?;
    match repo::proposals::update(pool, id, &fields).await? {
        Some(proposal) => Ok(HttpResponse::Ok().json(proposal)),
        None => Err(ApiError::not_found("Proposal")),
    }
}

pub async fn delete(body: web::Bytes, state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let pool = &state.pool;
    ensure_table(pool, &PROPOSALS).await?;
    let id = id_body::<IdOnly>(&body)?
        .id
        .ok_or_else(|| ApiError::validation(DELETE_ID_REQUIRED))?;
    if !repo::proposals::delete(pool, id).await? {
        return Err(ApiError::not_found("Proposal"));
    }
    Ok(HttpResponse::NoContent().finish())
}
