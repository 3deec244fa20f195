//! Document store client.
//!
//! Owns the PostgreSQL connection pool and hands out repository handles for
//! the three collections (`users`, `urls`, `clicks`). Every statement issued
//! through a handle runs under the client's per-operation deadline.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::future::Future;
use std::time::Duration;

use super::{PgClickRepository, PgUrlRepository, PgUserRepository};
use crate::domain::repositories::StoreHealth;
use crate::error::AppError;

/// Connection settings for [`StoreClient::connect`].
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Maximum number of pooled connections.
    pub max_connections: u32,
    /// Deadline for acquiring a pooled connection.
    pub connect_timeout: Duration,
    /// Deadline for each individual store operation.
    pub operation_timeout: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            max_connections: 10,
            connect_timeout: Duration::from_secs(10),
            operation_timeout: Duration::from_secs(5),
        }
    }
}

/// Shared, thread-safe handle to the document store.
///
/// Cloning is cheap: the pool is reference counted internally.
#[derive(Debug, Clone)]
pub struct StoreClient {
    pool: PgPool,
    operation_timeout: Duration,
}

impl StoreClient {
    /// Connects a new pool to `database_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot open its first connection within
    /// `options.connect_timeout`.
    pub async fn connect(database_url: &str, options: &StoreOptions) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(options.max_connections)
            .acquire_timeout(options.connect_timeout)
            .connect(database_url)
            .await
            .context("Failed to connect to the document store")?;

        Ok(Self::from_pool(pool, options.operation_timeout))
    }

    /// Wraps an existing pool.
    pub fn from_pool(pool: PgPool, operation_timeout: Duration) -> Self {
        Self {
            pool,
            operation_timeout,
        }
    }

    /// Applies the bundled schema migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if any migration fails to apply.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to apply migrations")?;
        Ok(())
    }

    /// Underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Deadline applied to each store operation.
    pub fn operation_timeout(&self) -> Duration {
        self.operation_timeout
    }

    /// Handle for the `users` collection.
    pub fn users(&self) -> PgUserRepository {
        PgUserRepository::new(self.clone())
    }

    /// Handle for the `urls` collection.
    pub fn urls(&self) -> PgUrlRepository {
        PgUrlRepository::new(self.clone())
    }

    /// Handle for the `clicks` collection.
    pub fn clicks(&self) -> PgClickRepository {
        PgClickRepository::new(self.clone())
    }

    /// Runs `fut` under the operation deadline.
    ///
    /// `operation` names the statement in logs and in the timeout error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Timeout`] when the deadline elapses, otherwise the
    /// converted `sqlx` error.
    pub async fn bounded<T, F>(&self, operation: &'static str, fut: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.operation_timeout, fut).await {
            Ok(result) => result.map_err(AppError::from),
            Err(_) => {
                let timeout_ms = self.operation_timeout.as_millis() as u64;
                tracing::warn!(operation, timeout_ms, "Store operation timed out");
                Err(AppError::timeout(
                    "Store operation timed out",
                    json!({ "operation": operation, "timeout_ms": timeout_ms }),
                ))
            }
        }
    }
}

#[async_trait]
impl StoreHealth for StoreClient {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.bounded("ping", sqlx::query("SELECT 1").execute(&self.pool))
            .await
            .map(|_| ())
    }
}
