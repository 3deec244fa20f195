//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ClickService, DashboardService, UrlService, UserService};
use crate::domain::repositories::{ClickRepository, StoreHealth, UrlRepository, UserRepository};
use crate::infrastructure::memory::MemoryStore;
use crate::infrastructure::persistence::StoreClient;

pub type DynUserService = UserService<dyn UserRepository>;
pub type DynUrlService = UrlService<dyn UserRepository, dyn UrlRepository>;
pub type DynClickService =
    ClickService<dyn UserRepository, dyn UrlRepository, dyn ClickRepository>;
pub type DynDashboardService =
    DashboardService<dyn UserRepository, dyn UrlRepository, dyn ClickRepository>;

/// Services and the store health check, shared across requests.
///
/// Services hold repository trait objects, so the same state type serves
/// both the PostgreSQL and the in-memory backend.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<DynUserService>,
    pub url_service: Arc<DynUrlService>,
    pub click_service: Arc<DynClickService>,
    pub dashboard_service: Arc<DynDashboardService>,
    pub store: Arc<dyn StoreHealth>,
}

impl AppState {
    /// Wires the services on top of the given repositories.
    pub fn new(
        users: Arc<dyn UserRepository>,
        urls: Arc<dyn UrlRepository>,
        clicks: Arc<dyn ClickRepository>,
        store: Arc<dyn StoreHealth>,
    ) -> Self {
        let url_service = Arc::new(UrlService::new(users.clone(), urls.clone()));

        Self {
            user_service: Arc::new(UserService::new(users.clone())),
            click_service: Arc::new(ClickService::new(url_service.clone(), clicks.clone())),
            url_service,
            dashboard_service: Arc::new(DashboardService::new(users, urls, clicks)),
            store,
        }
    }

    /// State backed by PostgreSQL through `client`.
    pub fn postgres(client: StoreClient) -> Self {
        Self::new(
            Arc::new(client.users()),
            Arc::new(client.urls()),
            Arc::new(client.clicks()),
            Arc::new(client),
        )
    }

    /// State backed by a fresh, empty [`MemoryStore`].
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(store.clone(), store.clone(), store.clone(), store)
    }
}
