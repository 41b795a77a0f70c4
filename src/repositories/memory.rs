// src/repositories/memory.rs

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{
        answer::{Answer, NewAnswer},
        question::{NewQuestion, Question},
        quiz::{NewQuiz, Quiz},
        result::{NewQuizResult, QuizResult},
        user::{NewUser, User},
    },
};

use super::{AnswerRepository, QuestionRepository, QuizRepository, ResultRepository, UserRepository};

/// Rows keyed by id, with a monotonically increasing id sequence.
struct Table<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T: Clone> Table<T> {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn count(&self) -> i64 {
        self.rows.len() as i64
    }
}

#[derive(Default)]
struct Tables {
    users: Table<User>,
    quizzes: Table<Quiz>,
    questions: Table<Question>,
    answers: Table<Answer>,
    results: Table<QuizResult>,
}

impl Tables {
    fn require_user(&self, id: i64) -> AppResult<()> {
        if self.users.rows.contains_key(&id) {
            Ok(())
        } else {
            Err(foreign_key_violation("quizzes", "user", id))
        }
    }

    fn require_quiz(&self, table: &str, id: i64) -> AppResult<()> {
        if self.quizzes.rows.contains_key(&id) {
            Ok(())
        } else {
            Err(foreign_key_violation(table, "quiz", id))
        }
    }

    fn require_question(&self, id: i64) -> AppResult<()> {
        if self.questions.rows.contains_key(&id) {
            Ok(())
        } else {
            Err(foreign_key_violation("answers", "question", id))
        }
    }

    fn remove_question(&mut self, id: i64) -> bool {
        if self.questions.rows.remove(&id).is_none() {
            return false;
        }
        self.answers.rows.retain(|_, answer| answer.question_id != id);
        true
    }

    fn remove_quiz(&mut self, id: i64) -> bool {
        if self.quizzes.rows.remove(&id).is_none() {
            return false;
        }
        let question_ids: Vec<i64> = self
            .questions
            .rows
            .values()
            .filter(|question| question.quiz_id == id)
            .map(|question| question.id)
            .collect();
        for question_id in question_ids {
            self.remove_question(question_id);
        }
        self.results.rows.retain(|_, result| result.quiz_id != id);
        true
    }
}

fn foreign_key_violation(table: &str, parent: &str, id: i64) -> AppError {
    AppError::InternalServerError(format!(
        "insert or update on table \"{}\" violates foreign key: {} {} does not exist",
        table, parent, id
    ))
}

fn take(limit: i64) -> usize {
    limit.max(0) as usize
}

/// In-process store implementing every repository trait.
///
/// Mirrors the PostgreSQL schema: ids come from per-table sequences, foreign
/// keys are checked on insert and update, and deletes cascade to child rows.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .rows
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let mut tables = self.tables.write().await;
        let user = User {
            id: tables.users.next_id(),
            username: user.username,
            email: user.email,
            created_at: user.created_at,
            last_modified_at: user.last_modified_at,
        };
        tables.users.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.tables.read().await.users.count())
    }
}

#[async_trait]
impl QuizRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>> {
        Ok(self.tables.read().await.quizzes.get(id))
    }

    async fn create(&self, quiz: NewQuiz) -> AppResult<Quiz> {
        let mut tables = self.tables.write().await;
        tables.require_user(quiz.user_id)?;
        let quiz = Quiz {
            id: tables.quizzes.next_id(),
            user_id: quiz.user_id,
            title: quiz.title,
            description: quiz.description,
            text: quiz.text,
            notes: quiz.notes,
            view_count: quiz.view_count,
            created_at: quiz.created_at,
            last_modified_at: quiz.last_modified_at,
        };
        tables.quizzes.rows.insert(quiz.id, quiz.clone());
        Ok(quiz)
    }

    async fn update(&self, quiz: &Quiz) -> AppResult<Option<Quiz>> {
        let mut tables = self.tables.write().await;
        let Some(stored) = tables.quizzes.rows.get_mut(&quiz.id) else {
            return Ok(None);
        };
        stored.title = quiz.title.clone();
        stored.description = quiz.description.clone();
        stored.text = quiz.text.clone();
        stored.notes = quiz.notes.clone();
        stored.last_modified_at = quiz.last_modified_at;
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.tables.write().await.remove_quiz(id))
    }

    async fn latest(&self, limit: i64) -> AppResult<Vec<Quiz>> {
        let tables = self.tables.read().await;
        let mut quizzes: Vec<Quiz> = tables.quizzes.rows.values().cloned().collect();
        quizzes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        quizzes.truncate(take(limit));
        Ok(quizzes)
    }

    async fn by_title(&self, limit: i64) -> AppResult<Vec<Quiz>> {
        let tables = self.tables.read().await;
        let mut quizzes: Vec<Quiz> = tables.quizzes.rows.values().cloned().collect();
        quizzes.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        quizzes.truncate(take(limit));
        Ok(quizzes)
    }

    async fn list_all(&self) -> AppResult<Vec<Quiz>> {
        Ok(self.tables.read().await.quizzes.rows.values().cloned().collect())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.tables.read().await.quizzes.count())
    }
}

#[async_trait]
impl QuestionRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>> {
        Ok(self.tables.read().await.questions.get(id))
    }

    async fn create(&self, question: NewQuestion) -> AppResult<Question> {
        let mut tables = self.tables.write().await;
        tables.require_quiz("questions", question.quiz_id)?;
        let question = Question {
            id: tables.questions.next_id(),
            quiz_id: question.quiz_id,
            text: question.text,
            notes: question.notes,
            created_at: question.created_at,
            last_modified_at: question.last_modified_at,
        };
        tables.questions.rows.insert(question.id, question.clone());
        Ok(question)
    }

    async fn update(&self, question: &Question) -> AppResult<Option<Question>> {
        let mut tables = self.tables.write().await;
        if !tables.questions.rows.contains_key(&question.id) {
            return Ok(None);
        }
        tables.require_quiz("questions", question.quiz_id)?;
        let Some(stored) = tables.questions.rows.get_mut(&question.id) else {
            return Ok(None);
        };
        stored.quiz_id = question.quiz_id;
        stored.text = question.text.clone();
        stored.notes = question.notes.clone();
        stored.last_modified_at = question.last_modified_at;
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.tables.write().await.remove_question(id))
    }

    async fn list_by_quiz(&self, quiz_id: i64) -> AppResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .rows
            .values()
            .filter(|question| question.quiz_id == quiz_id)
            .cloned()
            .collect())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.tables.read().await.questions.count())
    }
}

#[async_trait]
impl AnswerRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Answer>> {
        Ok(self.tables.read().await.answers.get(id))
    }

    async fn create(&self, answer: NewAnswer) -> AppResult<Answer> {
        let mut tables = self.tables.write().await;
        tables.require_question(answer.question_id)?;
        let answer = Answer {
            id: tables.answers.next_id(),
            question_id: answer.question_id,
            text: answer.text,
            value: answer.value,
            notes: answer.notes,
            created_at: answer.created_at,
            last_modified_at: answer.last_modified_at,
        };
        tables.answers.rows.insert(answer.id, answer.clone());
        Ok(answer)
    }

    async fn update(&self, answer: &Answer) -> AppResult<Option<Answer>> {
        let mut tables = self.tables.write().await;
        if !tables.answers.rows.contains_key(&answer.id) {
            return Ok(None);
        }
        tables.require_question(answer.question_id)?;
        let Some(stored) = tables.answers.rows.get_mut(&answer.id) else {
            return Ok(None);
        };
        stored.question_id = answer.question_id;
        stored.text = answer.text.clone();
        stored.value = answer.value;
        stored.notes = answer.notes.clone();
        stored.last_modified_at = answer.last_modified_at;
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.tables.write().await.answers.rows.remove(&id).is_some())
    }

    async fn list_by_question(&self, question_id: i64) -> AppResult<Vec<Answer>> {
        let tables = self.tables.read().await;
        Ok(tables
            .answers
            .rows
            .values()
            .filter(|answer| answer.question_id == question_id)
            .cloned()
            .collect())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.tables.read().await.answers.count())
    }
}

#[async_trait]
impl ResultRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<QuizResult>> {
        Ok(self.tables.read().await.results.get(id))
    }

    async fn create(&self, result: NewQuizResult) -> AppResult<QuizResult> {
        let mut tables = self.tables.write().await;
        tables.require_quiz("results", result.quiz_id)?;
        let result = QuizResult {
            id: tables.results.next_id(),
            quiz_id: result.quiz_id,
            text: result.text,
            min_value: result.min_value,
            max_value: result.max_value,
            notes: result.notes,
            created_at: result.created_at,
            last_modified_at: result.last_modified_at,
        };
        tables.results.rows.insert(result.id, result.clone());
        Ok(result)
    }

    async fn update(&self, result: &QuizResult) -> AppResult<Option<QuizResult>> {
        let mut tables = self.tables.write().await;
        if !tables.results.rows.contains_key(&result.id) {
            return Ok(None);
        }
        tables.require_quiz("results", result.quiz_id)?;
        let Some(stored) = tables.results.rows.get_mut(&result.id) else {
            return Ok(None);
        };
        stored.quiz_id = result.quiz_id;
        stored.text = result.text.clone();
        stored.min_value = result.min_value;
        stored.max_value = result.max_value;
        stored.notes = result.notes.clone();
        stored.last_modified_at = result.last_modified_at;
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.tables.write().await.results.rows.remove(&id).is_some())
    }

    async fn list_by_quiz(&self, quiz_id: i64) -> AppResult<Vec<QuizResult>> {
        let tables = self.tables.read().await;
        Ok(tables
            .results
            .rows
            .values()
            .filter(|result| result.quiz_id == quiz_id)
            .cloned()
            .collect())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.tables.read().await.results.count())
    }
}
