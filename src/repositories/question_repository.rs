// src/repositories/question_repository.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::question::{NewQuestion, Question},
};

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>>;
    async fn create(&self, question: NewQuestion) -> AppResult<Question>;
    async fn update(&self, question: &Question) -> AppResult<Option<Question>>;

    /// Removes the question together with its answers.
    async fn delete(&self, id: i64) -> AppResult<bool>;

    async fn list_by_quiz(&self, quiz_id: i64) -> AppResult<Vec<Question>>;
    async fn count(&self) -> AppResult<i64>;
}

pub struct PgQuestionRepository {
    pool: PgPool,
}

impl PgQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PgQuestionRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, quiz_id, text, notes, created_at, last_modified_at
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    async fn create(&self, question: NewQuestion) -> AppResult<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (quiz_id, text, notes, created_at, last_modified_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, quiz_id, text, notes, created_at, last_modified_at
            "#,
        )
        .bind(question.quiz_id)
        .bind(question.text)
        .bind(question.notes)
        .bind(question.created_at)
        .bind(question.last_modified_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(question)
    }

    async fn update(&self, question: &Question) -> AppResult<Option<Question>> {
        let updated = sqlx::query_as::<_, Question>(
            r#"
            UPDATE questions
            SET quiz_id = $1, text = $2, notes = $3, last_modified_at = $4
            WHERE id = $5
            RETURNING id, quiz_id, text, notes, created_at, last_modified_at
            "#,
        )
        .bind(question.quiz_id)
        .bind(&question.text)
        .bind(&question.notes)
        .bind(question.last_modified_at)
        .bind(question.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_by_quiz(&self, quiz_id: i64) -> AppResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, quiz_id, text, notes, created_at, last_modified_at
            FROM questions
            WHERE quiz_id = $1
            ORDER BY id
            "#,
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
