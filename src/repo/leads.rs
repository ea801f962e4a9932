use sqlx::SqlitePool;

use crate::models::{Lead, LeadInput};

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Lead>, sqlx::Error> {
    sqlx::query_as::<_, Lead>(
        "SELECT id, company, contact_name, email, phone, status, source, CAST(value AS REAL) AS value FROM leads ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await
}

pub async fn insert(pool: &SqlitePool, input: &LeadInput) -> Result<Lead, sqlx::Error> {
    sqlx::query_as::<_, Lead>(
        "INSERT INTO leads (company, contact_name, email, phone, status, source, value) \
         VALUES (?, ?, ?, ?, ?, ?, ?) \
         RETURNING id, company, contact_name, email, phone, status, source, CAST(value AS REAL) AS value",
    )
    .bind(&input.company)
    .bind(&input.contact_name)
    .bind(&input.email)
    .bind(&input.phone)
    .bind(&input.status)
    .bind(&input.source)
    .bind(input.value)
    .fetch_one(pool)
    .await
}

pub async fn update(pool: &SqlitePool, id: i64, input: &LeadInput) -> Result<Option<Lead>, sqlx::Error> {
    sqlx::query_as::<_, Lead>(
        "UPDATE leads \
         SET company = ?, contact_name = ?, email = ?, phone = ?, status = ?, source = ?, value = ? \
         WHERE id = ? \
         RETURNING id, company, contact_name, email, phone, status, source, CAST(value AS REAL) AS value",
    )
    .bind(&input.company)
    .bind(&input.contact_name)
    .bind(&input.email)
    .bind(&input.phone)
    .bind(&input.status)
    .bind(&input.source)
    .bind(input.value)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("DELETE FROM leads WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected() > 0)
}
