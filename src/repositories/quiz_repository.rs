// src/repositories/quiz_repository.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::quiz::{NewQuiz, Quiz},
};

#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>>;
    async fn create(&self, quiz: NewQuiz) -> AppResult<Quiz>;

    /// Persists the editable fields and last-modified date of `quiz`.
    /// Returns `None` when the row no longer exists.
    async fn update(&self, quiz: &Quiz) -> AppResult<Option<Quiz>>;

    /// Removes the quiz together with its questions, answers and results.
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// Most recently created first.
    async fn latest(&self, limit: i64) -> AppResult<Vec<Quiz>>;

    /// Ascending by title.
    async fn by_title(&self, limit: i64) -> AppResult<Vec<Quiz>>;

    async fn list_all(&self) -> AppResult<Vec<Quiz>>;
    async fn count(&self) -> AppResult<i64>;
}

pub struct PgQuizRepository {
    pool: PgPool,
}

impl PgQuizRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuizRepository for PgQuizRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>> {
        let quiz = sqlx::query_as::<_, Quiz>(
            r#"
            SELECT id, user_id, title, description, text, notes, view_count, created_at, last_modified_at
            FROM quizzes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(quiz)
    }

    async fn create(&self, quiz: NewQuiz) -> AppResult<Quiz> {
        let quiz = sqlx::query_as::<_, Quiz>(
            r#"
            INSERT INTO quizzes
            (user_id, title, description, text, notes, view_count, created_at, last_modified_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, title, description, text, notes, view_count, created_at, last_modified_at
            "#,
        )
        .bind(quiz.user_id)
        .bind(quiz.title)
        .bind(quiz.description)
        .bind(quiz.text)
        .bind(quiz.notes)
        .bind(quiz.view_count)
        .bind(quiz.created_at)
        .bind(quiz.last_modified_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(quiz)
    }

    async fn update(&self, quiz: &Quiz) -> AppResult<Option<Quiz>> {
        let updated = sqlx::query_as::<_, Quiz>(
            r#"
            UPDATE quizzes
            SET title = $1, description = $2, text = $3, notes = $4, last_modified_at = $5
            WHERE id = $6
            RETURNING id, user_id, title, description, text, notes, view_count, created_at, last_modified_at
            "#,
        )
        .bind(&quiz.title)
        .bind(&quiz.description)
        .bind(&quiz.text)
        .bind(&quiz.notes)
        .bind(quiz.last_modified_at)
        .bind(quiz.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM quizzes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn latest(&self, limit: i64) -> AppResult<Vec<Quiz>> {
        let quizzes = sqlx::query_as::<_, Quiz>(
            r#"
            SELECT id, user_id, title, description, text, notes, view_count, created_at, last_modified_at
            FROM quizzes
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(quizzes)
    }

    async fn by_title(&self, limit: i64) -> AppResult<Vec<Quiz>> {
        // Byte-wise collation keeps the order independent of the server locale.
        let quizzes = sqlx::query_as::<_, Quiz>(
            r#"
            SELECT id, user_id, title, description, text, notes, view_count, created_at, last_modified_at
            FROM quizzes
            ORDER BY title COLLATE "C", id
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(quizzes)
    }

    async fn list_all(&self) -> AppResult<Vec<Quiz>> {
        let quizzes = sqlx::query_as::<_, Quiz>(
            r#"
            SELECT id, user_id, title, description, text, notes, view_count, created_at, last_modified_at
            FROM quizzes
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(quizzes)
    }

    async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM quizzes")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
