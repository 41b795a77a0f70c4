// src/repositories/result_repository.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::result::{NewQuizResult, QuizResult},
};

#[async_trait]
pub trait ResultRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<QuizResult>>;
    async fn create(&self, result: NewQuizResult) -> AppResult<QuizResult>;
    async fn update(&self, result: &QuizResult) -> AppResult<Option<QuizResult>>;
    async fn delete(&self, id: i64) -> AppResult<bool>;
    async fn list_by_quiz(&self, quiz_id: i64) -> AppResult<Vec<QuizResult>>;
    async fn count(&self) -> AppResult<i64>;
}

pub struct PgResultRepository {
    pool: PgPool,
}

impl PgResultRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResultRepository for PgResultRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<QuizResult>> {
        let result = sqlx::query_as::<_, QuizResult>(
            r#"
            SELECT id, quiz_id, text, min_value, max_value, notes, created_at, last_modified_at
            FROM results
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    async fn create(&self, result: NewQuizResult) -> AppResult<QuizResult> {
        let result = sqlx::query_as::<_, QuizResult>(
            r#"
            INSERT INTO results (quiz_id, text, min_value, max_value, notes, created_at, last_modified_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, quiz_id, text, min_value, max_value, notes, created_at, last_modified_at
            "#,
        )
        .bind(result.quiz_id)
        .bind(result.text)
        .bind(result.min_value)
        .bind(result.max_value)
        .bind(result.notes)
        .bind(result.created_at)
        .bind(result.last_modified_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn update(&self, result: &QuizResult) -> AppResult<Option<QuizResult>> {
        let updated = sqlx::query_as::<_, QuizResult>(
            r#"
            UPDATE results
            SET quiz_id = $1, text = $2, min_value = $3, max_value = $4, notes = $5, last_modified_at = $6
            WHERE id = $7
            RETURNING id, quiz_id, text, min_value, max_value, notes, created_at, last_modified_at
            "#,
        )
        .bind(result.quiz_id)
        .bind(&result.text)
        .bind(result.min_value)
        .bind(result.max_value)
        .bind(&result.notes)
        .bind(result.last_modified_at)
        .bind(result.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM results WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_by_quiz(&self, quiz_id: i64) -> AppResult<Vec<QuizResult>> {
        let results = sqlx::query_as::<_, QuizResult>(
            r#"
            SELECT id, quiz_id, text, min_value, max_value, notes, created_at, last_modified_at
            FROM results
            WHERE quiz_id = $1
            ORDER BY id
            "#,
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(results)
    }

    async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM results")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
