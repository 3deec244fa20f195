//! PostgreSQL implementation of the click repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::StoreClient;
use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ClickRow {
    id: i64,
    short_code: String,
    clicked_at: DateTime<Utc>,
    ip: Option<String>,
    user_agent: Option<String>,
}

impl From<ClickRow> for Click {
    fn from(r: ClickRow) -> Self {
        Click::new(r.id, r.short_code, r.clicked_at, r.ip, r.user_agent)
    }
}

/// PostgreSQL handle for the append-only `clicks` collection.
pub struct PgClickRepository {
    store: StoreClient,
}

impl PgClickRepository {
    /// Creates a new repository over a store client.
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError> {
        let row = self
            .store
            .bounded(
                "clicks.insert",
                sqlx::query_as::<_, ClickRow>(
                    r#"
                    INSERT INTO clicks (short_code, ip, user_agent)
                    VALUES ($1, $2, $3)
                    RETURNING id, short_code, clicked_at, ip, user_agent
                    "#,
                )
                .bind(&new_click.code)
                .bind(&new_click.ip)
                .bind(&new_click.user_agent)
                .fetch_one(self.store.pool()),
            )
            .await?;

        Ok(row.into())
    }

    async fn list_by_code(&self, code: &str) -> Result<Vec<Click>, AppError> {
        let rows = self
            .store
            .bounded(
                "clicks.list_by_code",
                sqlx::query_as::<_, ClickRow>(
                    r#"
                    SELECT id, short_code, clicked_at, ip, user_agent
                    FROM clicks
                    WHERE short_code = $1
                    ORDER BY clicked_at ASC, id ASC
                    "#,
                )
                .bind(code)
                .fetch_all(self.store.pool()),
            )
            .await?;

        Ok(rows.into_iter().map(Click::from).collect())
    }
}
