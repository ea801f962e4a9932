use actix_web::{web, HttpResponse};

use crate::db::{ensure_table, schema::LEADS};
use crate::error::{ApiError, ApiResult};
use crate::models::{IdOnly, LeadInput, WithId};
use crate::repo;
use crate::state::AppState;

use super::{id_body, DELETE_ID_REQUIRED, UPDATE_ID_REQUIRED};

pub async fn list(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let pool = &state.pool;
    ensure_table(pool, &LEADS).await?;
    let leads = repo::leads::list_all(pool).await?;
    Ok(HttpResponse::Ok().json(leads))
}

pub async fn create(body: web::Json<LeadInput>, state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let pool = &state.pool;
    ensure_table(pool, &LEADS).await?;
    let lead = repo::leads::insert(pool, &body).await?;
    Ok(HttpResponse::Created().json(lead))
}

pub async fn update(
    body: web::Bytes,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let pool = &state.pool;
    ensure_table(pool, &LEADS).await?;
    let WithId { id, fields } = id_body::<WithId<LeadInput>>(&body)?;
    let id = id.ok_or_else(|| ApiError::validation(UPDATE_ID_REQUIRED))?;
    match repo::leads::update(pool, id, &fields).await? {
        Some(lead) => Ok(HttpResponse::Ok().json(lead)),
        None => Err(ApiError::not_found("Lead")),
    }
}

pub async fn delete(body: web::Bytes, state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let pool = &state.pool;
    ensure_table(pool, &LEADS).await?;
    let id = id_body::<IdOnly>(&body)?
        .id
        .ok_or_else(|| ApiError::validation(DELETE_ID_REQUIRED))?;
    if !repo::leads::delete(pool, id).await? {
        return Err(ApiError::not_found("Lead"));
    }
    Ok(HttpResponse::NoContent().finish())
}
