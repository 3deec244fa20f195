//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;

use super::StoreClient;
use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    name: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User::new(r.id, r.email, r.name, r.created_at)
    }
}

/// PostgreSQL handle for the `users` collection.
///
/// Email uniqueness relies on the `users_email_key` constraint, so
/// concurrent registrations of the same address cannot both succeed.
pub struct PgUserRepository {
    store: StoreClient,
}

impl PgUserRepository {
    /// Creates a new repository over a store client.
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let row = self
            .store
            .bounded(
                "users.insert",
                sqlx::query_as::<_, UserRow>(
                    r#"
                    INSERT INTO users (email, name)
                    VALUES ($1, $2)
                    RETURNING id, email, name, created_at
                    "#,
                )
                .bind(&new_user.email)
                .bind(&new_user.name)
                .fetch_one(self.store.pool()),
            )
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => AppError::conflict(
                    "User already exists",
                    json!({ "email": new_user.email }),
                ),
                other => other,
            })?;

        Ok(row.into())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = self
            .store
            .bounded(
                "users.find_by_email",
                sqlx::query_as::<_, UserRow>(
                    r#"
                    SELECT id, email, name, created_at
                    FROM users
                    WHERE email = $1
                    "#,
                )
                .bind(email)
                .fetch_optional(self.store.pool()),
            )
            .await?;

        Ok(row.map(User::from))
    }
}
