use actix_web::{web, HttpResponse};

use crate::db::{ensure_table, schema::USER_PROFILE};
use crate::error::{ApiError, ApiResult};
use crate::models::ProfileInput;
use crate::repo;
use crate::state::AppState;

pub async fn get_profile(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let pool = &state.pool;
    ensure_table(pool, &USER_PROFILE).await?;
    match repo::profile::get(pool).await? {
        Some(profile) => Ok(HttpResponse::Ok().json(profile)),
        None => Err(ApiError::not_found("Profile")),
    }
}

pub async fn update_profile(
    body: web::Json<ProfileInput>,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let pool = &state.pool;
    ensure_table(pool, &USER_PROFILE).await?;
    let profile = repo::profile::upsert(pool, &body).await?;
    Ok(HttpResponse::Ok().json(profile))
}
