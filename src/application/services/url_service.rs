//! Short URL creation, resolution and listing service.

use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::{UrlRepository, UserRepository};
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_policy::check_long_url;
use serde_json::json;

/// Attempts at finding a free short code before giving up.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Service for short URLs owned by users.
pub struct UrlService<U, R>
where
    U: UserRepository + ?Sized,
    R: UrlRepository + ?Sized,
{
    user_repository: Arc<U>,
    url_repository: Arc<R>,
}

impl<U, R> UrlService<U, R>
where
    U: UserRepository + ?Sized,
    R: UrlRepository + ?Sized,
{
    /// Creates a new URL service.
    pub fn new(user_repository: Arc<U>, url_repository: Arc<R>) -> Self {
        Self {
            user_repository,
            url_repository,
        }
    }

    /// Creates a short URL owned by the user registered under `owner_email`.
    ///
    /// The owner's id and email are copied onto the record. The code is
    /// generated randomly; if the store reports it as taken, a fresh code is
    /// tried, up to 10 times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `long_url` is not an HTTP(S) URL.
    /// Returns [`AppError::NotFound`] if no user has `owner_email`.
    /// Returns [`AppError::Internal`] if no free code was found, or on store errors.
    pub async fn create(&self, long_url: &str, owner_email: &str) -> Result<ShortUrl, AppError> {
        check_long_url(long_url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        let owner = self
            .user_repository
            .find_by_email(owner_email.trim())
            .await?
            .ok_or_else(|| {
                AppError::not_found("User not found", json!({ "email": owner_email }))
            })?;

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let new_url = NewShortUrl {
                code: generate_code()?,
                long_url: long_url.to_string(),
                owner_id: owner.id,
                email: owner.email.clone(),
            };

            match self.url_repository.create(new_url).await {
                Ok(url) => {
                    tracing::info!(
                        code = %url.code,
                        owner_id = url.owner_id,
                        "Short URL created"
                    );
                    return Ok(url);
                }
                Err(AppError::Conflict { .. }) => {
                    tracing::warn!(attempt, "Short code collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Resolves a short code to its record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    /// Returns [`AppError::Internal`] or [`AppError::Timeout`] on store errors.
    pub async fn resolve(&self, code: &str) -> Result<ShortUrl, AppError> {
        tracing::debug!(code, "Resolving short code");

        self.url_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "code": code })))
    }

    /// Lists the records owned by `owner_id`; empty if there are none.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] or [`AppError::Timeout`] on store errors.
    pub async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<ShortUrl>, AppError> {
        self.url_repository.list_by_owner(owner_id).await
    }

    /// Lists the records owned by the user registered under `email`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this email.
    /// Returns [`AppError::Internal`] or [`AppError::Timeout`] on store errors.
    pub async fn list_by_owner_email(&self, email: &str) -> Result<Vec<ShortUrl>, AppError> {
        let owner = self
            .user_repository
            .find_by_email(email.trim())
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "email": email })))?;

        self.list_by_owner(owner.id).await
    }

    /// Adds one to the click counter of `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    /// Returns [`AppError::Internal`] or [`AppError::Timeout`] on store errors.
    pub async fn increment_click(&self, code: &str) -> Result<(), AppError> {
        if self.url_repository.increment_click_count(code).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Short URL not found",
                json!({ "code": code }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::User;
    use crate::domain::repositories::{MockUrlRepository, MockUserRepository};
    use crate::infrastructure::memory::MemoryStore;
    use chrono::Utc;

    fn owner() -> User {
        User::new(
            4,
            "owner@example.com".to_string(),
            "Owner".to_string(),
            Utc::now(),
        )
    }

    fn stored(new_url: NewShortUrl) -> ShortUrl {
        ShortUrl::new(
            10,
            new_url.long_url,
            new_url.code,
            new_url.owner_id,
            new_url.email,
            Utc::now(),
            0,
        )
    }

    #[tokio::test]
    async fn test_create_success() {
        let mut mock_users = MockUserRepository::new();
        let mut mock_urls = MockUrlRepository::new();

        mock_users
            .expect_find_by_email()
            .withf(|email| email == "owner@example.com")
            .times(1)
            .returning(|_| Ok(Some(owner())));

        mock_urls
            .expect_create()
            .withf(|u| {
                u.owner_id == 4
                    && u.email == "owner@example.com"
                    && u.long_url == "https://example.com/page"
                    && u.code.len() == 12
            })
            .times(1)
            .returning(|u| Ok(stored(u)));

        let service = UrlService::new(Arc::new(mock_users), Arc::new(mock_urls));

        let url = service
            .create("https://example.com/page", "owner@example.com")
            .await
            .unwrap();

        assert_eq!(url.long_url, "https://example.com/page");
        assert_eq!(url.click_count, 0);
        assert_eq!(url.owner_id, 4);
    }

    #[tokio::test]
    async fn test_create_unknown_owner() {
        let mut mock_users = MockUserRepository::new();
        let mut mock_urls = MockUrlRepository::new();

        mock_users
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        mock_urls.expect_create().times(0);

        let service = UrlService::new(Arc::new(mock_users), Arc::new(mock_urls));

        let result = service
            .create("https://example.com", "ghost@example.com")
            .await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_create_rejects_non_http_url() {
        let mock_users = MockUserRepository::new();
        let mock_urls = MockUrlRepository::new();

        let service = UrlService::new(Arc::new(mock_users), Arc::new(mock_urls));

        let result = service
            .create("javascript:alert(1)", "owner@example.com")
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_retries_on_code_collision() {
        let mut mock_users = MockUserRepository::new();
        let mut mock_urls = MockUrlRepository::new();

        mock_users
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(owner())));

        let mut seq = mockall::Sequence::new();
        mock_urls
            .expect_create()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Err(AppError::conflict("Unique constraint violation", json!({}))));
        mock_urls
            .expect_create()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|u| Ok(stored(u)));

        let service = UrlService::new(Arc::new(mock_users), Arc::new(mock_urls));

        let result = service
            .create("https://example.com", "owner@example.com")
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_gives_up_after_max_attempts() {
        let mut mock_users = MockUserRepository::new();
        let mut mock_urls = MockUrlRepository::new();

        mock_users
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(owner())));
        mock_urls
            .expect_create()
            .times(MAX_CODE_ATTEMPTS)
            .returning(|_| Err(AppError::conflict("Unique constraint violation", json!({}))));

        let service = UrlService::new(Arc::new(mock_users), Arc::new(mock_urls));

        let result = service
            .create("https://example.com", "owner@example.com")
            .await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_create_propagates_store_error() {
        let mut mock_users = MockUserRepository::new();
        let mut mock_urls = MockUrlRepository::new();

        mock_users
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(owner())));
        mock_urls
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::timeout("Store operation timed out", json!({}))));

        let service = UrlService::new(Arc::new(mock_users), Arc::new(mock_urls));

        let result = service
            .create("https://example.com", "owner@example.com")
            .await;

        assert!(matches!(result, Err(AppError::Timeout { .. })));
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mock_users = MockUserRepository::new();
        let mut mock_urls = MockUrlRepository::new();

        mock_urls
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let service = UrlService::new(Arc::new(mock_users), Arc::new(mock_urls));

        let result = service.resolve("missing").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_increment_click_not_found() {
        let mock_users = MockUserRepository::new();
        let mut mock_urls = MockUrlRepository::new();

        mock_urls
            .expect_increment_click_count()
            .times(1)
            .returning(|_| Ok(false));

        let service = UrlService::new(Arc::new(mock_users), Arc::new(mock_urls));

        let result = service.increment_click("missing").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_by_owner_email_unknown_user() {
        let mut mock_users = MockUserRepository::new();
        let mut mock_urls = MockUrlRepository::new();

        mock_users
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        mock_urls.expect_list_by_owner().times(0);

        let service = UrlService::new(Arc::new(mock_users), Arc::new(mock_urls));

        let result = service.list_by_owner_email("ghost@example.com").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_resolve_after_create_and_increments() {
        let store = Arc::new(MemoryStore::new());
        UserRepository::create(
            store.as_ref(),
            crate::domain::entities::NewUser {
                email: "owner@example.com".to_string(),
                name: "Owner".to_string(),
            },
        )
        .await
        .unwrap();

        let service = UrlService::new(store.clone(), store.clone());

        let created = service
            .create("https://rust-lang.org", "owner@example.com")
            .await
            .unwrap();

        let resolved = service.resolve(&created.code).await.unwrap();
        assert_eq!(resolved.long_url, "https://rust-lang.org");
        assert_eq!(resolved.click_count, 0);

        for _ in 0..5 {
            service.increment_click(&created.code).await.unwrap();
        }

        let resolved = service.resolve(&created.code).await.unwrap();
        assert_eq!(resolved.click_count, 5);

        let owned = service.list_by_owner(created.owner_id).await.unwrap();
        assert_eq!(owned.len(), 1);
        assert!(service.list_by_owner(999).await.unwrap().is_empty());
    }
}
