// src/models/answer.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Represents the 'answers' table in the database.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub text: String,

    /// Score contributed to the quiz total when this answer is picked.
    pub value: i32,

    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_modified_at: DateTime<Utc>,
}

/// An answer row about to be inserted.
#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub question_id: i64,
    pub text: String,
    pub value: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_modified_at: DateTime<Utc>,
}

impl NewAnswer {
    pub fn from_view_model(model: AnswerViewModel, now: DateTime<Utc>) -> Self {
        Self {
            question_id: model.question_id,
            text: model.text,
            value: model.value,
            notes: model.notes,
            created_at: now,
            last_modified_at: now,
        }
    }
}

impl Answer {
    pub fn apply(&mut self, model: AnswerViewModel, now: DateTime<Utc>) {
        self.question_id = model.question_id;
        self.text = model.text;
        self.value = model.value;
        self.notes = model.notes;
        self.last_modified_at = now;
    }
}

/// Wire shape of an answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct AnswerViewModel {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
    pub value: i32,
    pub notes: Option<String>,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

impl From<Answer> for AnswerViewModel {
    fn from(answer: Answer) -> Self {
        Self {
            id: answer.id,
            question_id: answer.question_id,
            text: answer.text,
            value: answer.value,
            notes: answer.notes,
            created_date: answer.created_at,
            last_modified_date: answer.last_modified_at,
        }
    }
}
