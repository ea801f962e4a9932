use sqlx::SqlitePool;

use crate::models::{ProfileInput, UserProfile, PROFILE_ID};

pub async fn get(pool: &SqlitePool) -> Result<Option<UserProfile>, sqlx::Error> {
    sqlx::query_as::<_, UserProfile>("SELECT id, full_name, email, phone FROM user_profile WHERE id = ?")
        .bind(PROFILE_ID)
        .fetch_optional(pool)
        .await
}

/// Replaces the singleton row, creating it when missing.
pub async fn upsert(pool: &SqlitePool, input: &ProfileInput) -> Result<UserProfile, sqlx::Error> {
    sqlx::query_as::<_, UserProfile>(
        "INSERT INTO user_profile (id, full_name, email, phone) VALUES (?, ?, ?, ?) \
         ON CONFLICT(id) DO UPDATE SET \
            full_name = excluded.full_name, \
            email = excluded.email, \
            phone = excluded.phone \
         RETURNING id, full_name, email, phone",
    )
    .bind(PROFILE_ID)
    .bind(&input.full_name)
    .bind(&input.email)
    .bind(&input.phone)
    .fetch_one(pool)
    .await
}
