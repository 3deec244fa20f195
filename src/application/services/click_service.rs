//! Click tracking service.

use std::sync::Arc;

use super::UrlService;
use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::{ClickRepository, UrlRepository, UserRepository};
use crate::error::AppError;
use crate::utils::client_info::ClientInfo;

/// Service for recording and listing click events.
///
/// Counter updates go through [`UrlService::increment_click`].
pub struct ClickService<U, R, C>
where
    U: UserRepository + ?Sized,
    R: UrlRepository + ?Sized,
    C: ClickRepository + ?Sized,
{
    url_service: Arc<UrlService<U, R>>,
    click_repository: Arc<C>,
}

impl<U, R, C> ClickService<U, R, C>
where
    U: UserRepository + ?Sized,
    R: UrlRepository + ?Sized,
    C: ClickRepository + ?Sized,
{
    /// Creates a new click service.
    pub fn new(url_service: Arc<UrlService<U, R>>, click_repository: Arc<C>) -> Self {
        Self {
            url_service,
            click_repository,
        }
    }

    /// Appends a click event for `code` without touching the counter.
    ///
    /// The code is not checked for existence.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] or [`AppError::Timeout`] on store errors.
    pub async fn record(&self, code: &str, client: ClientInfo) -> Result<Click, AppError> {
        self.click_repository
            .record(NewClick {
                code: code.to_string(),
                ip: client.ip,
                user_agent: client.user_agent,
            })
            .await
    }

    /// Counts a visit of `code`: increments its counter, then records the event.
    ///
    /// The increment doubles as the existence check, so an unknown code leaves
    /// no trace. If recording fails after the increment, the counter stays
    /// incremented.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    /// Returns [`AppError::Internal`] or [`AppError::Timeout`] on store errors.
    pub async fn track(&self, code: &str, client: ClientInfo) -> Result<Click, AppError> {
        self.url_service.increment_click(code).await?;

        let click = self.record(code, client).await?;
        tracing::debug!(code, click_id = click.id, "Click tracked");

        Ok(click)
    }

    /// Lists the clicks recorded for `code`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] or [`AppError::Timeout`] on store errors.
    pub async fn list_by_code(&self, code: &str) -> Result<Vec<Click>, AppError> {
        self.click_repository.list_by_code(code).await
    }
}
