// src/models/quiz.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::utils::identity::CurrentUser;

/// Represents the 'quizzes' table in the database.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Quiz {
    pub id: i64,

    /// Author of the quiz.
    pub user_id: i64,

    pub title: String,
    pub description: Option<String>,

    /// Introductory text shown before the first question.
    pub text: Option<String>,

    pub notes: Option<String>,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub last_modified_at: DateTime<Utc>,
}

/// A quiz row about to be inserted.
#[derive(Debug, Clone)]
pub struct NewQuiz {
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub text: Option<String>,
    pub notes: Option<String>,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub last_modified_at: DateTime<Utc>,
}

impl NewQuiz {
    /// Builds a quiz from a client payload.
    /// Only the descriptive fields are taken from the request; ownership and
    /// timestamps are server-side.
    pub fn from_view_model(model: QuizViewModel, author: &CurrentUser, now: DateTime<Utc>) -> Self {
        Self {
            user_id: author.id,
            title: model.title,
            description: model.description,
            text: model.text,
            notes: model.notes,
            view_count: 0,
            created_at: now,
            last_modified_at: now,
        }
    }
}

impl Quiz {
    /// Overwrites the editable fields with those of `model`.
    pub fn apply(&mut self, model: QuizViewModel, now: DateTime<Utc>) {
        self.title = model.title;
        self.description = model.description;
        self.text = model.text;
        self.notes = model.notes;
        self.last_modified_at = now;
    }
}

/// Wire shape of a quiz.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct QuizViewModel {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub text: Option<String>,
    pub notes: Option<String>,
    pub user_id: i64,
    pub view_count: i64,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

impl From<Quiz> for QuizViewModel {
    fn from(quiz: Quiz) -> Self {
        Self {
            id: quiz.id,
            title: quiz.title,
            description: quiz.description,
            text: quiz.text,
            notes: quiz.notes,
            user_id: quiz.user_id,
            view_count: quiz.view_count,
            created_date: quiz.created_at,
            last_modified_date: quiz.last_modified_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn author() -> CurrentUser {
        CurrentUser {
            id: 7,
            username: "Admin".to_string(),
        }
    }

    #[test]
    fn payload_owner_and_dates_are_ignored() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let model = QuizViewModel {
            id: 42,
            title: "T".to_string(),
            description: Some("D".to_string()),
            text: Some("X".to_string()),
            user_id: 999,
            view_count: 1234,
            ..Default::default()
        };

        let quiz = NewQuiz::from_view_model(model, &author(), now);

        assert_eq!(quiz.user_id, 7);
        assert_eq!(quiz.title, "T");
        assert_eq!(quiz.view_count, 0);
        assert_eq!(quiz.created_at, now);
        assert_eq!(quiz.last_modified_at, now);
    }

    #[test]
    fn apply_keeps_identity_and_creation_date() {
        let created = Utc.with_ymd_and_hms(2019, 2, 19, 12, 0, 0).unwrap();
        let mut quiz = Quiz {
            id: 3,
            user_id: 7,
            title: "Old".to_string(),
            description: None,
            text: None,
            notes: None,
            view_count: 10,
            created_at: created,
            last_modified_at: created,
        };
        let later = created + Duration::days(3);

        quiz.apply(
            QuizViewModel {
                id: 3,
                title: "New".to_string(),
                notes: Some("n".to_string()),
                ..Default::default()
            },
            later,
        );

        assert_eq!(quiz.title, "New");
        assert_eq!(quiz.notes.as_deref(), Some("n"));
        assert_eq!(quiz.user_id, 7);
        assert_eq!(quiz.view_count, 10);
        assert_eq!(quiz.created_at, created);
        assert_eq!(quiz.last_modified_at, later);
    }

    #[test]
    fn view_model_reads_pascal_case_and_tolerates_missing_members() {
        let model: QuizViewModel =
            serde_json::from_str(r#"{"Title":"T","Description":"D","Text":"X"}"#).unwrap();
        assert_eq!(model.title, "T");
        assert_eq!(model.description.as_deref(), Some("D"));
        assert_eq!(model.id, 0);
        assert!(model.notes.is_none());
    }
}
