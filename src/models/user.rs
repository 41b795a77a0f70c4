// src/models/user.rs

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Represents the 'users' table in the database.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: i64,

    /// Unique by convention only; the schema does not enforce it.
    pub username: String,

    pub email: String,

    pub created_at: DateTime<Utc>,
    pub last_modified_at: DateTime<Utc>,
}

/// A user row about to be inserted.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub last_modified_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(username: &str, email: &str, created_at: DateTime<Utc>, last_modified_at: DateTime<Utc>) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            created_at,
            last_modified_at,
        }
    }
}
