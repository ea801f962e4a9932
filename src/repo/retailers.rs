use sqlx::SqlitePool;

use crate::models::{Retailer, RetailerInput};

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Retailer>, sqlx::Error> {
    sqlx::query_as::<_, Retailer>(
        "SELECT id, name, company, email, phone, account_status, marketplace_status, join_date \
         FROM retailers ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await
}

pub async fn insert(pool: &SqlitePool, input: &RetailerInput) -> Result<Retailer, sqlx::Error> {
    sqlx::query_as::<_, Retailer>(
        "INSERT INTO retailers (name, company, email, phone, account_status, marketplace_status, join_date) \
         VALUES (?, ?, ?, ?, ?, ?, ?) \
         RETURNING id, name, company, email, phone, account_status, marketplace_status, join_date",
    )
    .bind(&input.name)
    .bind(&input.company)
    .bind(&input.email)
    .bind(&input.phone)
    .bind(&input.account_status)
    .bind(&input.marketplace_status)
    .bind(&input.join_date)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    input: &RetailerInput,
) -> Result<Option<Retailer>, sqlx::Error> {
    sqlx::query_as::<_, Retailer>(
        "UPDATE retailers \
         SET name = ?, company = ?, email = ?, phone = ?, account_status = ?, marketplace_status = ?, join_date = ? \
         WHERE id = ? \
         RETURNING id, name, company, email, phone, account_status, marketplace_status, join_date",
    )
    .bind(&input.name)
    .bind(&input.company)
    .bind(&input.email)
    .bind(&input.phone)
    .bind(&input.account_status)
    .bind(&input.marketplace_status)
    .bind(&input.join_date)
    .bind(id)
    .fetch_optional(pool)
    .await
}
