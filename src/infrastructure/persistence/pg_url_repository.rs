//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::StoreClient;
use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    long_url: String,
    short_code: String,
    user_id: i64,
    email: String,
    created_at: DateTime<Utc>,
    click_count: i64,
}

impl From<UrlRow> for ShortUrl {
    fn from(r: UrlRow) -> Self {
        ShortUrl::new(
            r.id,
            r.long_url,
            r.short_code,
            r.user_id,
            r.email,
            r.created_at,
            r.click_count,
        )
    }
}

/// PostgreSQL handle for the `urls` collection.
pub struct PgUrlRepository {
    store: StoreClient,
}

impl PgUrlRepository {
    /// Creates a new repository over a store client.
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let row = self
            .store
            .bounded(
                "urls.insert",
                sqlx::query_as::<_, UrlRow>(
                    r#"
                    INSERT INTO urls (long_url, short_code, user_id, email)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id, long_url, short_code, user_id, email, created_at, click_count
                    "#,
                )
                .bind(&new_url.long_url)
                .bind(&new_url.code)
                .bind(new_url.owner_id)
                .bind(&new_url.email)
                .fetch_one(self.store.pool()),
            )
            .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = self
            .store
            .bounded(
                "urls.find_by_code",
                sqlx::query_as::<_, UrlRow>(
                    r#"
                    SELECT id, long_url, short_code, user_id, email, created_at, click_count
                    FROM urls
                    WHERE short_code = $1
                    "#,
                )
                .bind(code)
                .fetch_optional(self.store.pool()),
            )
            .await?;

        Ok(row.map(ShortUrl::from))
    }

    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<ShortUrl>, AppError> {
        let rows = self
            .store
            .bounded(
                "urls.list_by_owner",
                sqlx::query_as::<_, UrlRow>(
                    r#"
                    SELECT id, long_url, short_code, user_id, email, created_at, click_count
                    FROM urls
                    WHERE user_id = $1
                    ORDER BY created_at ASC, id ASC
                    "#,
                )
                .bind(owner_id)
                .fetch_all(self.store.pool()),
            )
            .await?;

        Ok(rows.into_iter().map(ShortUrl::from).collect())
    }

    async fn increment_click_count(&self, code: &str) -> Result<bool, AppError> {
        let result = self
            .store
            .bounded(
                "urls.increment_click_count",
                sqlx::query(
                    r#"
                    UPDATE urls
                    SET click_count = click_count + 1
                    WHERE short_code = $1
                    "#,
                )
                .bind(code)
                .execute(self.store.pool()),
            )
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
