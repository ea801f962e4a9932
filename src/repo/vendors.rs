use sqlx::SqlitePool;

use crate::models::{Vendor, VendorInput};

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Vendor>, sqlx::Error> {
    sqlx::query_as::<_, Vendor>(
        "SELECT id, name, business_name, category, email, phone, account_status, marketplace_status, join_date \
         FROM vendors ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await
}

pub async fn insert(pool: &SqlitePool, input: &VendorInput) -> Result<Vendor, sqlx::Error> {
    sqlx::query_as::<_, Vendor>(
        "INSERT INTO vendors (name, business_name, category, email, phone, account_status, marketplace_status, join_date) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
         RETURNING id, name, business_name, category, email, phone, account_status, marketplace_status, join_date",
    )
    .bind(&input.name)
    .bind(&input.business_name)
    .bind(&input.category)
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
    input: &VendorInput,
) -> Result<Option<Vendor>, sqlx::Error> {
    sqlx::query_as::<_, Vendor>(
        "UPDATE vendors \
         SET name = ?, business_name = ?, category = ?, email = ?, phone = ?, \
             account_status = ?, marketplace_status = ?, join_date = ? \
         WHERE id = ? \
         RETURNING id, name, business_name, category, email, phone, account_status, marketplace_status, join_date",
    )
    .bind(&input.name)
    .bind(&input.business_name)
    .bind(&input.category)
    .bind(&input.email)
    .bind(&input.phone)
    .bind(&input.account_status)
    .bind(&input.marketplace_status)
    .bind(&input.join_date)
    .bind(id)
    .fetch_optional(pool)
    .await
}
