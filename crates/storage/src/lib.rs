use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub mod conflict;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;

use error::Result;

/// Shared connection pool. Each query checks a connection out and returns it
/// when the query completes.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn with_max_connections(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}
