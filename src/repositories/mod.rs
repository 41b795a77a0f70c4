// src/repositories/mod.rs

//! Persistence seams.
//!
//! Each entity has an async repository trait. `Pg*Repository` types back
//! them with PostgreSQL; [`MemoryStore`] implements all of them over shared
//! in-process tables for database-less runs and tests.

use std::sync::Arc;

use sqlx::PgPool;

pub mod answer_repository;
pub mod memory;
pub mod question_repository;
pub mod quiz_repository;
pub mod result_repository;
pub mod user_repository;

pub use answer_repository::{AnswerRepository, PgAnswerRepository};
pub use memory::MemoryStore;
pub use question_repository::{PgQuestionRepository, QuestionRepository};
pub use quiz_repository::{PgQuizRepository, QuizRepository};
pub use result_repository::{PgResultRepository, ResultRepository};
pub use user_repository::{PgUserRepository, UserRepository};

/// The full set of repositories handed to handlers through `AppState`.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub quizzes: Arc<dyn QuizRepository>,
    pub questions: Arc<dyn QuestionRepository>,
    pub answers: Arc<dyn AnswerRepository>,
    pub results: Arc<dyn ResultRepository>,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            quizzes: Arc::new(PgQuizRepository::new(pool.clone())),
            questions: Arc::new(PgQuestionRepository::new(pool.clone())),
            answers: Arc::new(PgAnswerRepository::new(pool.clone())),
            results: Arc::new(PgResultRepository::new(pool)),
        }
    }

    pub fn in_memory() -> Self {
        Self::from_store(MemoryStore::new())
    }

    /// Shares one in-memory store across every repository so relations
    /// and cascades see the same tables.
    pub fn from_store(store: MemoryStore) -> Self {
        Self {
            users: Arc::new(store.clone()),
            quizzes: Arc::new(store.clone()),
            questions: Arc::new(store.clone()),
            answers: Arc::new(store.clone()),
            results: Arc::new(store),
        }
    }
}
