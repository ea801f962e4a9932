mod common;

use rstest::rstest;

use crm_backend::db::schema::{self, TableDef};
use crm_backend::db::{ensure_table, provision_all};

async fn row_count(pool: &sqlx::SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(1) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}

#[rstest]
#[case(&schema::RETAILERS)]
#[case(&schema::VENDORS)]
#[case(&schema::LEADS)]
#[case(&schema::DEALS)]
#[case(&schema::PROPOSALS)]
#[case(&schema::TICKETS)]
#[case(&schema::USER_PROFILE)]
#[actix_web::test]
async fn provisioning_twice_seeds_once(#[case] table: &'static TableDef) {
    let pool = common::memory_pool().await;

    ensure_table(&pool, table).await.expect("first provision");
    let seeded = row_count(&pool, table.name).await;
    assert_eq!(seeded, (table.seed)().len() as i64);

    ensure_table(&pool, table).await.expect("second provision");
    assert_eq!(row_count(&pool, table.name).await, seeded);
}

#[actix_web::test]
async fn non_empty_table_is_not_reseeded() {
    let pool = common::memory_pool().await;
    ensure_table(&pool, &schema::LEADS).await.unwrap();

    sqlx::query("DELETE FROM leads WHERE id > 1").execute(&pool).await.unwrap();
    ensure_table(&pool, &schema::LEADS).await.unwrap();
    assert_eq!(row_count(&pool, "leads").await, 1);
}

#[actix_web::test]
async fn seed_keys_land_in_snake_case_columns() {
    let pool = common::memory_pool().await;
    provision_all(&pool).await.unwrap();

    let contact: String = sqlx::query_scalar("SELECT contact_name FROM leads WHERE id = 1")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(contact, "Ahmed Salem");

    let kind: String = sqlx::query_scalar("SELECT type FROM tickets WHERE id = 2")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(kind, "Feature Request");
}
