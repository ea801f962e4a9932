use actix_web::{web, HttpResponse};

use crate::db::{ensure_table, schema::DEALS};
use crate::error::{ApiError, ApiResult};
use crate::models::{DealInput, IdOnly, WithId};
use crate::repo;
use crate::state::AppState;

use super::{id_body, DELETE_ID_REQUIRED, UPDATE_ID_REQUIRED};

pub async fn list(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let pool = &state.pool;
    ensure_table(pool, &DEALS).await?;
    let deals = repo::deals::list_all(pool).await?;
    Ok(HttpResponse::Ok().json(deals))
}

pub async fn create(body: web::Json<DealInput>, state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let pool = &state.pool;
    ensure_table(pool, &DEALS).await?;
    let deal = repo::deals::insert(pool, &body).await?;
    Ok(HttpResponse::Created().json(deal))
}

pub async fn update(
    body: web::Bytes,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let pool = &state.pool;
    ensure_table(pool, &DEALS).await?;
    let WithId { id, fields } = id_body::<WithId<DealInput>>(&body)?;
    let id = id.ok_or_else(|| ApiError::validation(UPDATE_ID_REQUIRED))?;
    match repo::deals::update(pool, id, &fields).await? {
        Some(deal) => Ok(HttpResponse::Ok().json(deal)),
        None => Err(ApiError::not_found("Deal")),
    }
}

pub async fn delete(body: web::Bytes, state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let pool = &state.pool;
    ensure_table(pool, &DEALS).await?;
    let id = id_body::<IdOnly>(&body)?
        .id
        .ok_or_else(|| ApiError::validation(DELETE_ID_REQUIRED))?;
    if !repo::deals::delete(pool, id).await? {
        return Err(ApiError::not_found("Deal"));
    }
    Ok(HttpResponse::NoContent().finish())
}
