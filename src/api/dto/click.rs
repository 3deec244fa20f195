//! DTOs for click events.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Click;

/// A recorded click. `short_url` carries the short code.
#[derive(Debug, Serialize)]
pub struct ClickResponse {
    pub id: i64,
    pub short_url: String,
    pub clicked_at: DateTime<Utc>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

impl From<Click> for ClickResponse {
    fn from(click: Click) -> Self {
        Self {
            id: click.id,
            short_url: click.code,
            clicked_at: click.clicked_at,
            ip: click.ip,
            user_agent: click.user_agent,
        }
    }
}
