// Database module - owns the trivia schema and the bundle store operations

use std::time::Duration;

use color_eyre::{
    eyre::{ensure, OptionExt},
    Result,
};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::config::DbConfig;

pub mod models;
pub use models::*;

mod bundle;
mod error;
mod schema;

pub use error::StoreError;

// Main database handle
#[derive(Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    pub async fn new(config: &DbConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(config.connect_options())
            .await?;

        Self::init(pool).await
    }

    /// Connect with explicit options, e.g. parsed from a `postgres://` URL.
    pub async fn connect_with(options: PgConnectOptions) -> Result<Self> {
        let pool = PgPoolOptions::new().connect_with(options).await?;
        Self::init(pool).await
    }

    /// Wrap an existing pool without touching the database.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn init(pool: PgPool) -> Result<Self> {
        // Verify connection
        let one: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_optional(&pool)
            .await?
            .ok_or_eyre("connection check failed")?;
        ensure!(one == 1, "connection check returned {one}");

        schema::create_schema(&pool).await?;

        tracing::info!("database connection has been verified");

        Ok(Self { pool })
    }

    /// Round-trip to the database, failing if it takes longer than `deadline`.
    pub async fn health(&self, deadline: Duration) -> Result<(), StoreError> {
        tokio::time::timeout(deadline, sqlx::query("SELECT 1").execute(&self.pool))
            .await
            .map_err(|_| StoreError::Timeout(deadline))??;

        Ok(())
    }
}
