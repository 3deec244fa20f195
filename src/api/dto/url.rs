//! DTOs for short URL endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortUrl;

/// Request body of `POST /api/url`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUrlRequest {
    /// The original URL to shorten.
    #[validate(url(message = "Invalid URL format"))]
    pub long_url: String,

    /// Email of the registered owner.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

/// A short URL record as returned by the API.
///
/// `short_url` carries the short code, not a full URL.
#[derive(Debug, Serialize)]
pub struct ShortUrlResponse {
    pub id: i64,
    pub long_url: String,
    pub short_url: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl From<ShortUrl> for ShortUrlResponse {
    fn from(url: ShortUrl) -> Self {
        Self {
            id: url.id,
            long_url: url.long_url,
            short_url: url.code,
            user_id: url.owner_id,
            email: url.email,
            created_at: url.created_at,
            click_count: url.click_count,
        }
    }
}

/// Acknowledgement of `POST /api/url/{code}/click`.
#[derive(Debug, Serialize)]
pub struct ClickStatusResponse {
    pub status: &'static str,
}

impl ClickStatusResponse {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}
