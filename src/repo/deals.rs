use sqlx::SqlitePool;

use crate::models::{Deal, DealInput};

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Deal>, sqlx::Error> {
    sqlx::query_as::<_, Deal>(
        "SELECT id, title, company, contact_name, CAST(value AS REAL) AS value, stage, probability, close_date FROM deals ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await
}

pub async fn insert(pool: &SqlitePool, input: &DealInput) -> Result<Deal, sqlx::Error> {
    sqlx::query_as::<_, Deal>(
        "INSERT INTO deals (title, company, contact_name, value, stage, probability, close_date) \
         VALUES (?, ?, ?, ?, ?, ?, ?) \
         RETURNING id, title, company, contact_name, CAST(value AS REAL) AS value, stage, probability, close_date",
    )
    .bind(&input.title)
    .bind(&input.company)
    .bind(&input.contact_name)
    .bind(input.value)
    .bind(&input.stage)
    .bind(input.probability)
    .bind(&input.close_date)
    .fetch_one(pool)
    .await
}

pub async fn update(pool: &SqlitePool, id: i64, input: &DealInput) -> Result<Option<Deal>, sqlx::Error> {
    sqlx::query_as::<_, Deal>(
        "UPDATE deals \
         SET title = ?, company = ?, contact_name = ?, value = ?, stage = ?, probability = ?, close_date = ? \
         WHERE id = ? \
         RETURNING id, title, company, contact_name, CAST(value AS REAL) AS value, stage, probability, close_date",
    )
    .bind(&input.title)
    .bind(&input.company)
    .bind(&input.contact_name)
    .bind(input.value)
    .bind(&input.stage)
    .bind(input.probability)
    .bind(&input.close_date)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("DELETE FROM deals WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected() > 0)
}
