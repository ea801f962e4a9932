use actix_web::{web, HttpResponse};

use crate::db::{ensure_table, schema::VENDORS};
use crate::error::{ApiError, ApiResult};
use crate::models::{today, VendorInput, WithId};
use crate::repo;
use crate::state::AppState;

use super::{id_body, UPDATE_ID_REQUIRED};

pub async fn list(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let pool = &state.pool;
    ensure_table(pool, &VENDORS).await?;
    let vendors = repo::vendors::list_all(pool).await?;
    Ok(HttpResponse::Ok().json(vendors))
}

pub async fn create(
    body: web::Json<VendorInput>,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let pool = &state.pool;
    ensure_table(pool, &VENDORS).await?;
    let mut input = body.into_inner();
    input.join_date = Some(today());
    let vendor = repo::vendors::insert(pool, &input).await?;
    Ok(HttpResponse::Created().json(vendor))
}

pub async fn update(
    body: web::Bytes,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let pool = &state.pool;
    ensure_table(pool, &VENDORS).await?;
    let WithId { id, fields } = id_body::<WithId<VendorInput>>(&body)?;
    let id = id.ok_or_else(|| ApiError::validation(UPDATE_ID_REQUIRED))?;
    match repo::vendors::update(pool, id, &fields).await? {
        Some(vendor) => Ok(HttpResponse::Ok().json(vendor)),
        None => Err(ApiError::not_found("Vendor")),
    }
}
