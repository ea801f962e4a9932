use sqlx::SqlitePool;

use crate::models::{Ticket, TicketInput};

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Ticket>, sqlx::Error> {
    sqlx::query_as::<_, Ticket>(
        "SELECT id, title, description, status, type, user_id, user_type, created_at FROM tickets ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await
}

pub async fn insert(pool: &SqlitePool, input: &TicketInput) -> Result<Ticket, sqlx::Error> {
    sqlx::query_as::<_, Ticket>(
        "INSERT INTO tickets (title, description, status, type, user_id, user_type, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?) \
         RETURNING id, title, description, status, type, user_id, user_type, created_at",
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.status)
    .bind(&input.kind)
    .bind(input.user_id)
    .bind(&input.user_type)
    .bind(&input.created_at)
    .fetch_one(pool)
    .await
}

pub async fn update(pool: &SqlitePool, id: i64, input: &TicketInput) -> Result<Option<Ticket>, sqlx::Error> {
    sqlx::query_as::<_, Ticket>(
        "UPDATE tickets \
         SET title = ?, description = ?, status = ?, type = ?, user_id = ?, user_type = ?, created_at = ? \
         WHERE id = ? \
         RETURNING id, title, description, status, type, user_id, user_type, created_at",
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.status)
    .bind(&input.kind)
    .bind(input.user_id)
    .bind(&input.user_type)
    .bind(&input.created_at)
    .bind(id)
    .fetch_optional(pool)
    .await
}
