//! Short URL entity: a long URL reachable through a short code.

use chrono::{DateTime, Utc};

/// A shortened URL owned by a user.
///
/// `owner_id` is a weak reference to [`super::User::id`]; nothing in the store
/// enforces it. `email` is the owner's email copied at creation time.
///
/// The [`Default`] value is the empty record (id `0`, epoch timestamp) and is
/// what a dashboard reports as the most clicked link when a user owns none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortUrl {
    pub id: i64,
    pub long_url: String,
    pub code: String,
    pub owner_id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(
        id: i64,
        long_url: String,
        code: String,
        owner_id: i64,
        email: String,
        created_at: DateTime<Utc>,
        click_count: i64,
    ) -> Self {
        Self {
            id,
            long_url,
            code,
            owner_id,
            email,
            created_at,
            click_count,
        }
    }

    /// Returns true for the zero-value record.
    pub fn is_empty(&self) -> bool {
        self.id == 0
    }
}

/// Input data for persisting a short URL. The counter always starts at zero.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub code: String,
    pub long_url: String,
    pub owner_id: i64,
    pub email: String,
}
