use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

pub mod queries;

pub type DbPool = Pool<Sqlite>;

pub async fn init_pool(database_url: &str) -> Result<DbPool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Creates the rides table if it is not there yet. Runs once at startup.
pub async fn ensure_schema(pool: &DbPool) -> Result<()> {
    sqlx::query(queries::CREATE_RIDES_TABLE)
        .execute(pool)
        .await?;
    Ok(())
}
