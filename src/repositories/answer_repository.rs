// src/repositories/answer_repository.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::answer::{Answer, NewAnswer},
};

#[async_trait]
pub trait AnswerRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Answer>>;
    async fn create(&self, answer: NewAnswer) -> AppResult<Answer>;
    async fn update(&self, answer: &Answer) -> AppResult<Option<Answer>>;
    async fn delete(&self, id: i64) -> AppResult<bool>;
    async fn list_by_question(&self, question_id: i64) -> AppResult<Vec<Answer>>;
    async fn count(&self) -> AppResult<i64>;
}

pub struct PgAnswerRepository {
    pool: PgPool,
}

impl PgAnswerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnswerRepository for PgAnswerRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Answer>> {
        let answer = sqlx::query_as::<_, Answer>(
            r#"
            SELECT id, question_id, text, value, notes, created_at, last_modified_at
            FROM answers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(answer)
    }

    async fn create(&self, answer: NewAnswer) -> AppResult<Answer> {
        let answer = sqlx::query_as::<_, Answer>(
            r#"
            INSERT INTO answers (question_id, text, value, notes, created_at, last_modified_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, question_id, text, value, notes, created_at, last_modified_at
            "#,
        )
        .bind(answer.question_id)
        .bind(answer.text)
        .bind(answer.value)
        .bind(answer.notes)
        .bind(answer.created_at)
        .bind(answer.last_modified_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(answer)
    }

    async fn update(&self, answer: &Answer) -> AppResult<Option<Answer>> {
        let updated = sqlx::query_as::<_, Answer>(
            r#"
            UPDATE answers
            SET question_id = $1, text = $2, value = $3, notes = $4, last_modified_at = $5
            WHERE id = $6
            RETURNING id, question_id, text, value, notes, created_at, last_modified_at
            "#,
        )
        .bind(answer.question_id)
        .bind(&answer.text)
        .bind(answer.value)
        .bind(&answer.notes)
        .bind(answer.last_modified_at)
        .bind(answer.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM answers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_by_question(&self, question_id: i64) -> AppResult<Vec<Answer>> {
        let answers = sqlx::query_as::<_, Answer>(
            r#"
            SELECT id, question_id, text, value, notes, created_at, last_modified_at
            FROM answers
            WHERE question_id = $1
            ORDER BY id
            "#,
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(answers)
    }

    async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM answers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
