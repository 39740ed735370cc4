use std::time::Duration;

use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

use crate::config::Config;

#[derive(Clone)]
pub struct Client {
    pool: SqlitePool,
}

impl Client {
    pub async fn new(config: &Config) -> Result<Self, sqlx::Error> {
        let mut options = SqlitePoolOptions::new().max_connections(config.max_connections);

        if config.is_in_memory() {
            // each new connection would open an empty database
            options = options.max_connections(1).idle_timeout(None::<Duration>).max_lifetime(None::<Duration>);
        }

        let pool = options.connect(&config.database_url).await?;
        tracing::debug!("Connected to {}", config.database_url);

        Ok(Self { pool })
    }

    pub async fn init(config: &Config) -> Result<Self, sqlx::Error> {
        let client = Client::new(config).await?;

        // Create tables on startup
        sqlx::raw_sql(include_str!("../resources/create_tables.sql")).execute(client.pool()).await?;

        Ok(client)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
