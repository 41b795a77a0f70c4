// src/repositories/user_repository.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::user::{NewUser, User},
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
    async fn create(&self, user: NewUser) -> AppResult<User>;
    async fn count(&self) -> AppResult<i64>;
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        // Usernames are not unique in the schema; the oldest account wins.
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, created_at, last_modified_at
            FROM users
            WHERE username = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, created_at, last_modified_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, email, created_at, last_modified_at
            "#,
        )
        .bind(user.username)
        .bind(user.email)
        .bind(user.created_at)
        .bind(user.last_modified_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
