use sqlx::SqlitePool;

use crate::models::{Proposal, ProposalInput};

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Proposal>, sqlx::Error> {
    sqlx::query_as::<_, Proposal>(
        "SELECT id, title, client_name, client_company, CAST(value AS REAL) AS value, currency, status, valid_until, sent_date, created_at \
         FROM proposals ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await
}

pub async fn insert(pool: &SqlitePool, input: &ProposalInput) -> Result<Proposal, sqlx::Error> {
    sqlx::query_as::<_, Proposal>(
        "INSERT INTO proposals (title, client_name, client_company, value, currency, status, valid_until, sent_date, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) \
         RETURNING id, title, client_name, client_company, CAST(value AS REAL) AS value, currency, status, valid_until, sent_date, created_at",
    )
    .bind(&input.title)
    .bind(&input.client_name)
    .bind(&input.client_company)
    .bind(input.value)
    .bind(&input.currency)
    .bind(&input.status)
    .bind(&input.valid_until)
    .bind(&input.sent_date)
    .bind(&input.created_at)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    input: &ProposalInput,
) -> Result<Option<Proposal>, sqlx::Error> {
    sqlx::query_as::<_, Proposal>(
        "UPDATE proposals \
         SET title = ?, client_name = ?, client_company = ?, value = ?, currency = ?, status = ?, \
             valid_until = ?, sent_date = ?, created_at = ? \
         WHERE id = ? \
         RETURNING id, title, client_name, client_company, CAST(value AS REAL) AS value, currency, status, valid_until, sent_date, created_at",
    )
    .bind(&input.title)
    .bind(&input.client_name)
    .bind(&input.client_company)
    .bind(input.value)
    .bind(&input.currency)
    .bind(&input.status)
    .bind(&input.valid_until)
    .bind(&input.sent_date)
    .bind(&input.created_at)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("DELETE FROM proposals WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected() > 0)
}
