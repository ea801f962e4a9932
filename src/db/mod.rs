pub mod provision;
pub mod schema;
pub mod seed;

use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, SqlitePool};
use std::str::FromStr;

pub use provision::ensure_table;

/// Opens the pool. Tables are not created here: every handler provisions the
/// table it touches on demand.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let mut pool_opts = SqlitePoolOptions::new().max_connections(max_connections);

    // An in-memory database lives only as long as its connection.
    if database_url.contains(":memory:") {
        pool_opts = pool_opts
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    pool_opts.connect_with(connect_opts).await
}

/// Provisions every table up front; used by the server at startup so the
/// first request of each kind does not pay for seeding.
pub async fn provision_all(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for table in schema::ALL_TABLES {
        ensure_table(pool, table).await?;
    }
    Ok(())
}
