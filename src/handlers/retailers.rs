use actix_web::{web, HttpResponse};

use crate::db::{ensure_table, schema::RETAILERS};
use crate::error::{ApiError, ApiResult};
use crate::models::{today, RetailerInput, WithId};
use crate::repo;
use crate::state::AppState;

use super::{id_body, UPDATE_ID_REQUIRED};

pub async fn list(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let pool = &state.pool;
    ensure_table(pool, &RETAILERS).await?;
    let retailers = repo::retailers::list_all(pool).await?;
    Ok(HttpResponse::Ok().json(retailers))
}

pub async fn create(
    body: web::Json<RetailerInput>,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let pool = &state.pool;
    ensure_table(pool, &RETAILERS).await?;
    let mut input = body.into_inner();
    input.join_date = Some(today());
    let retailer = repo::retailers::insert(pool, &input).await?;
    Ok(HttpResponse::Created().json(retailer))
}

pub async fn update(
    body: web::Bytes,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let pool = &state.pool;
    ensure_table(pool, &RETAILERS).await?;
    let WithId { id, fields } = id_body::<WithId<RetailerInput>>(&body)?;
    let id = id.ok_or_else(|| ApiError::validation(UPDATE_ID_REQUIRED))?;
    match repo::retailers::update(pool, id, &fields).await? {
        Some(retailer) => Ok(HttpResponse::Ok().json(retailer)),
        None => Err(ApiError::not_found("Retailer")),
    }
}
