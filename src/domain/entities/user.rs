//! User entity: the owner of short URLs.

use chrono::{DateTime, Utc};

/// A registered user.
///
/// `email` is the business key and is unique across all users. Users are
/// created once and never updated, so `created_at` is immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: i64, email: String, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email,
            name,
            created_at,
        }
    }
}

/// Input data for registering a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let now = Utc::now();
        let user = User::new(
            7,
            "ada@example.com".to_string(),
            "Ada".to_string(),
            now,
        );

        assert_eq!(user.id, 7);
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.name, "Ada");
        assert_eq!(user.created_at, now);
    }
}
