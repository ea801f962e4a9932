//! Create-if-missing and seed-if-empty for the entity tables.
//!
//! Runs at the top of every request. Once a table holds a row it is never
//! reseeded, so a seed interrupted halfway stays partial.

use serde_json::{Map, Value};
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments};
use sqlx::SqlitePool;

use super::schema::TableDef;

pub async fn ensure_table(pool: &SqlitePool, table: &TableDef) -> Result<(), sqlx::Error> {
    sqlx::query(&format!("CREATE TABLE IF NOT EXISTS {} ({});", table.name, table.schema))
        .execute(pool)
        .await?;

    let existing = sqlx::query(&format!("SELECT 1 FROM {} LIMIT 1;", table.name))
        .fetch_optional(pool)
        .await?;
    if existing.is_some() {
        return Ok(());
    }

    let rows = (table.seed)();
    tracing::info!(table = table.name, rows = rows.len(), "seeding table");
    for row in &rows {
        if let Value::Object(fields) = row {
            insert_seed_row(pool, table.name, fields).await?;
        }
    }
    Ok(())
}

async fn insert_seed_row(
    pool: &SqlitePool,
    table: &str,
    fields: &Map<String, Value>,
) -> Result<(), sqlx::Error> {
    let columns: Vec<String> = fields.keys().map(|k| camel_to_snake(k)).collect();
    let placeholders = vec!["?"; columns.len()].join(",");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({});",
        table,
        columns.join(","),
        placeholders
    );

    let mut query = sqlx::query(&sql);
    for value in fields.values() {
        query = bind_json(query, value);
    }
    query.execute(pool).await?;
    Ok(())
}

fn bind_json<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    value: &Value,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        Value::Null => query.bind(None::<String>),
        Value::Bool(b) => query.bind(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => query.bind(i),
            None => query.bind(n.as_f64()),
        },
        Value::String(s) => query.bind(s.clone()),
        other => query.bind(other.to_string()),
    }
}

/// `contactName` -> `contact_name`.
pub fn camel_to_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("id", "id")]
    #[case("contactName", "contact_name")]
    #[case("marketplaceStatus", "marketplace_status")]
    #[case("userId", "user_id")]
    #[case("fullName", "full_name")]
    fn converts_camel_case_keys(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(camel_to_snake(input), expected);
    }
}
