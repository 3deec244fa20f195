//! Per-user dashboard aggregation.

use std::sync::Arc;

use crate::domain::entities::{Click, ShortUrl};
use crate::domain::repositories::{ClickRepository, UrlRepository, UserRepository};
use crate::error::AppError;
use serde_json::json;

/// One owned short URL together with its click history.
#[derive(Debug, Clone)]
pub struct LinkActivity {
    pub url: ShortUrl,
    pub clicks: Vec<Click>,
}

/// Activity summary over every short URL a user owns.
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub links: Vec<LinkActivity>,
    pub total_links: usize,
    pub total_clicks: i64,
    /// Record with the highest `click_count`; the first one wins a tie and
    /// the empty record stands in when no link has been clicked.
    pub most_clicked_link: ShortUrl,
}

impl DashboardSummary {
    /// Aggregates link activity in listing order.
    ///
    /// `total_clicks` sums the stored counters, not the lengths of the click
    /// histories.
    pub fn summarize(links: Vec<LinkActivity>) -> Self {
        let total_clicks = links.iter().map(|l| l.url.click_count).sum();

        let most_clicked_link = links
            .iter()
            .map(|l| &l.url)
            .filter(|url| url.click_count > 0)
            .fold(None::<&ShortUrl>, |best, url| match best {
                Some(b) if b.click_count >= url.click_count => Some(b),
                _ => Some(url),
            })
            .cloned()
            .unwrap_or_default();

        Self {
            total_links: links.len(),
            total_clicks,
            most_clicked_link,
            links,
        }
    }
}

/// Service building the dashboard of a user.
pub struct DashboardService<U, R, C>
where
    U: UserRepository + ?Sized,
    R: UrlRepository + ?Sized,
    C: ClickRepository + ?Sized,
{
    user_repository: Arc<U>,
    url_repository: Arc<R>,
    click_repository: Arc<C>,
}

impl<U, R, C> DashboardService<U, R, C>
where
    U: UserRepository + ?Sized,
    R: UrlRepository + ?Sized,
    C: ClickRepository + ?Sized,
{
    /// Creates a new dashboard service.
    pub fn new(user_repository: Arc<U>, url_repository: Arc<R>, click_repository: Arc<C>) -> Self {
        Self {
            user_repository,
            url_repository,
            click_repository,
        }
    }

    /// Builds the dashboard for the user registered under `email`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this email.
    /// Returns [`AppError::Internal`] or [`AppError::Timeout`] on store errors.
    pub async fn dashboard(&self, email: &str) -> Result<DashboardSummary, AppError> {
        let user = self
            .user_repository
            .find_by_email(email.trim())
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "email": email })))?;

        let urls = self.url_repository.list_by_owner(user.id).await?;

        let mut links = Vec::with_capacity(urls.len());
        for url in urls {
            let clicks = self.click_repository.list_by_code(&url.code).await?;
            links.push(LinkActivity { url, clicks });
        }

        let summary = DashboardSummary::summarize(links);
        tracing::debug!(
            user_id = user.id,
            total_links = summary.total_links,
            total_clicks = summary.total_clicks,
            "Dashboard built"
        );

        Ok(summary)
    }
}
