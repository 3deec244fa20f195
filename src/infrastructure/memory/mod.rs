//! In-process document store.
//!
//! [`MemoryStore`] implements every repository trait over `DashMap`
//! collections with the same guarantees as the PostgreSQL backend: unique
//! emails, unique short codes, and an atomic click counter. It backs the
//! `STORE_BACKEND=memory` mode and the HTTP test suite.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{Click, NewClick, NewShortUrl, NewUser, ShortUrl, User};
use crate::domain::repositories::{ClickRepository, StoreHealth, UrlRepository, UserRepository};
use crate::error::AppError;

/// In-memory implementation of the user, URL and click repositories.
///
/// Keys: users by email, URLs by short code, clicks grouped by short code.
/// Each collection has its own id sequence starting at 1.
#[derive(Debug)]
pub struct MemoryStore {
    users: DashMap<String, User>,
    urls: DashMap<String, ShortUrl>,
    clicks: DashMap<String, Vec<Click>>,
    user_ids: AtomicI64,
    url_ids: AtomicI64,
    click_ids: AtomicI64,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            urls: DashMap::new(),
            clicks: DashMap::new(),
            user_ids: AtomicI64::new(0),
            url_ids: AtomicI64::new(0),
            click_ids: AtomicI64::new(0),
        }
    }

    fn next_id(sequence: &AtomicI64) -> i64 {
        sequence.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        match self.users.entry(new_user.email.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "User already exists",
                json!({ "email": new_user.email }),
            )),
            Entry::Vacant(slot) => {
                let user = User::new(
                    Self::next_id(&self.user_ids),
                    new_user.email,
                    new_user.name,
                    Utc::now(),
                );
                slot.insert(user.clone());
                Ok(user)
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.get(email).map(|u| u.clone()))
    }
}

#[async_trait]
impl UrlRepository for MemoryStore {
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        match self.urls.entry(new_url.code.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "urls_short_code_key" }),
            )),
            Entry::Vacant(slot) => {
                let url = ShortUrl::new(
                    Self::next_id(&self.url_ids),
                    new_url.long_url,
                    new_url.code,
                    new_url.owner_id,
                    new_url.email,
                    Utc::now(),
                    0,
                );
                slot.insert(url.clone());
                Ok(url)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        Ok(self.urls.get(code).map(|u| u.clone()))
    }

    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<ShortUrl>, AppError> {
        let mut owned: Vec<ShortUrl> = self
            .urls
            .iter()
            .filter(|u| u.owner_id == owner_id)
            .map(|u| u.clone())
            .collect();

        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(owned)
    }

    async fn increment_click_count(&self, code: &str) -> Result<bool, AppError> {
        // The shard write lock makes the read-modify-write atomic.
        match self.urls.get_mut(code) {
            Some(mut url) => {
                url.click_count += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl ClickRepository for MemoryStore {
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError> {
        let click = Click::new(
            Self::next_id(&self.click_ids),
            new_click.code,
            Utc::now(),
            new_click.ip,
            new_click.user_agent,
        );

        self.clicks
            .entry(click.code.clone())
            .or_default()
            .push(click.clone());

        Ok(click)
    }

    async fn list_by_code(&self, code: &str) -> Result<Vec<Click>, AppError> {
        let mut clicks = self
            .clicks
            .get(code)
            .map(|c| c.clone())
            .unwrap_or_default();

        // Ids are taken before the shard lock, so concurrent pushes may land out of order.
        clicks.sort_by(|a, b| a.clicked_at.cmp(&b.clicked_at).then(a.id.cmp(&b.id)));
        Ok(clicks)
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            name: "Test".to_string(),
        }
    }

    fn new_url(code: &str, owner_id: i64) -> NewShortUrl {
        NewShortUrl {
            code: code.to_string(),
            long_url: format!("https://example.com/{code}"),
            owner_id,
            email: "owner@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_user_email_is_unique() {
        let store = MemoryStore::new();

        let first = UserRepository::create(&store, new_user("a@example.com")).await;
        assert!(first.is_ok());

        let second = UserRepository::create(&store, new_user("a@example.com")).await;
        assert!(matches!(second, Err(AppError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_find_user_by_email() {
        let store = MemoryStore::new();
        let created = UserRepository::create(&store, new_user("b@example.com"))
            .await
            .unwrap();

        let found = store.find_by_email("b@example.com").await.unwrap();
        assert_eq!(found, Some(created));
        assert!(store.find_by_email("nobody@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_short_code_is_unique() {
        let store = MemoryStore::new();

        UrlRepository::create(&store, new_url("code1", 1)).await.unwrap();
        let dup = UrlRepository::create(&store, new_url("code1", 2)).await;

        assert!(matches!(dup, Err(AppError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_new_url_starts_with_zero_clicks() {
        let store = MemoryStore::new();

        let url = UrlRepository::create(&store, new_url("zero", 1)).await.unwrap();
        assert_eq!(url.click_count, 0);
        assert!(url.id > 0);
    }

    #[tokio::test]
    async fn test_list_by_owner_filters_and_orders() {
        let store = MemoryStore::new();
        UrlRepository::create(&store, new_url("first", 1)).await.unwrap();
        UrlRepository::create(&store, new_url("other", 2)).await.unwrap();
        UrlRepository::create(&store, new_url("second", 1)).await.unwrap();

        let owned = store.list_by_owner(1).await.unwrap();
        let codes: Vec<&str> = owned.iter().map(|u| u.code.as_str()).collect();
        assert_eq!(codes, vec!["first", "second"]);

        assert!(store.list_by_owner(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_increment_unknown_code() {
        let store = MemoryStore::new();
        assert!(!store.increment_click_count("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_concurrent_increments_are_not_lost() {
        let store = Arc::new(MemoryStore::new());
        UrlRepository::create(store.as_ref(), new_url("hot", 1))
            .await
            .unwrap();

        let tasks: Vec<_> = (0..50)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.increment_click_count("hot").await })
            })
            .collect();

        for task in tasks {
            assert!(task.await.unwrap().unwrap());
        }

        let url = store.find_by_code("hot").await.unwrap().unwrap();
        assert_eq!(url.click_count, 50);
    }

    #[tokio::test]
    async fn test_clicks_grouped_by_code() {
        let store = MemoryStore::new();
        for ip in ["1.1.1.1", "2.2.2.2"] {
            store
                .record(NewClick {
                    code: "abc".to_string(),
                    ip: Some(ip.to_string()),
                    user_agent: None,
                })
                .await
                .unwrap();
        }
        store
            .record(NewClick {
                code: "xyz".to_string(),
                ip: None,
                user_agent: Some("curl/8".to_string()),
            })
            .await
            .unwrap();

        let clicks = store.list_by_code("abc").await.unwrap();
        assert_eq!(clicks.len(), 2);
        assert_eq!(clicks[0].ip.as_deref(), Some("1.1.1.1"));
        assert_eq!(store.list_by_code("xyz").await.unwrap().len(), 1);
        assert!(store.list_by_code("none").await.unwrap().is_empty());
    }
}
