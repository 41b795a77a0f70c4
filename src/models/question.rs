// src/models/question.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Question {
    pub id: i64,
    pub quiz_id: i64,

    /// The prompt shown to the quiz taker.
    pub text: String,

    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_modified_at: DateTime<Utc>,
}

/// A question row about to be inserted.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub quiz_id: i64,
    pub text: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_modified_at: DateTime<Utc>,
}

impl NewQuestion {
    pub fn from_view_model(model: QuestionViewModel, now: DateTime<Utc>) -> Self {
        Self {
            quiz_id: model.quiz_id,
            text: model.text,
            notes: model.notes,
            created_at: now,
            last_modified_at: now,
        }
    }
}

impl Question {
    /// Overwrites the editable fields with those of `model`.
    pub fn apply(&mut self, model: QuestionViewModel, now: DateTime<Utc>) {
        self.quiz_id = model.quiz_id;
        self.text = model.text;
        self.notes = model.notes;
        self.last_modified_at = now;
    }
}

/// Wire shape of a question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct QuestionViewModel {
    pub id: i64,
    pub quiz_id: i64,
    pub text: String,
    pub notes: Option<String>,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

impl From<Question> for QuestionViewModel {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            quiz_id: question.quiz_id,
            text: question.text,
            notes: question.notes,
            created_date: question.created_at,
            last_modified_date: question.last_modified_at,
        }
    }
}
