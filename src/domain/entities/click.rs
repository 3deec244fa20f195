//! Click entity: one visit of a short URL.

use chrono::{DateTime, Utc};

/// A click event recorded against a short code.
///
/// Clicks reference their short URL by code, not by id, and are never
/// modified after insertion. Client fields are optional because the headers
/// they come from may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub id: i64,
    pub code: String,
    pub clicked_at: DateTime<Utc>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(
        id: i64,
        code: String,
        clicked_at: DateTime<Utc>,
        ip: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            id,
            code,
            clicked_at,
            ip,
            user_agent,
        }
    }
}

/// Input data for recording a click. The timestamp is set on insertion.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub code: String,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}
