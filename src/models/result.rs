// src/models/result.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Represents the 'results' table in the database.
/// A scored outcome: a quiz whose total falls in `[min_value, max_value]`
/// is classified with this result's text.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct QuizResult {
    pub id: i64,
    pub quiz_id: i64,
    pub text: String,

    /// Lower bound, inclusive. `None` means unbounded.
    pub min_value: Option<i32>,

    /// Upper bound, inclusive. `None` means unbounded.
    pub max_value: Option<i32>,

    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_modified_at: DateTime<Utc>,
}

/// A result row about to be inserted.
#[derive(Debug, Clone)]
pub struct NewQuizResult {
    pub quiz_id: i64,
    pub text: String,
    pub min_value: Option<i32>,
    pub max_value: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_modified_at: DateTime<Utc>,
}

impl NewQuizResult {
    pub fn from_view_model(model: ResultViewModel, now: DateTime<Utc>) -> Self {
        Self {
            quiz_id: model.quiz_id,
            text: model.text,
            min_value: model.min_value,
            max_value: model.max_value,
            notes: model.notes,
            created_at: now,
            last_modified_at: now,
        }
    }
}

impl QuizResult {
    pub fn apply(&mut self, model: ResultViewModel, now: DateTime<Utc>) {
        self.quiz_id = model.quiz_id;
        self.text = model.text;
        self.min_value = model.min_value;
        self.max_value = model.max_value;
        self.notes = model.notes;
        self.last_modified_at = now;
    }

    /// Whether `score` lies inside this result's inclusive range.
    pub fn contains(&self, score: i32) -> bool {
        self.min_value.is_none_or(|min| score >= min) && self.max_value.is_none_or(|max| score <= max)
    }
}

/// Picks the result a completed quiz with total `score` is classified as.
///
/// No endpoint calls this: the server never scores quizzes. It is the rule
/// the client applies, kept here for Rust consumers of the crate. The sum of
/// the picked answers' values is matched against the quiz's results in
/// order, and the first range that contains it wins.
pub fn select_result(results: &[QuizResult], score: i32) -> Option<&QuizResult> {
    results.iter().find(|result| result.contains(score))
}

/// Wire shape of a result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResultViewModel {
    pub id: i64,
    pub quiz_id: i64,
    pub text: String,
    pub min_value: Option<i32>,
    pub max_value: Option<i32>,
    pub notes: Option<String>,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

impl From<QuizResult> for ResultViewModel {
    fn from(result: QuizResult) -> Self {
        Self {
            id: result.id,
            quiz_id: result.quiz_id,
            text: result.text,
            min_value: result.min_value,
            max_value: result.max_value,
            notes: result.notes,
            created_date: result.created_at,
            last_modified_date: result.last_modified_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: i64, min_value: Option<i32>, max_value: Option<i32>) -> QuizResult {
        let now = Utc::now();
        QuizResult {
            id,
            quiz_id: 1,
            text: format!("Result {}", id),
            min_value,
            max_value,
            notes: None,
            created_at: now,
            last_modified_at: now,
        }
    }

    #[test]
    fn ranges_are_inclusive() {
        let r = result(1, Some(0), Some(6));
        assert!(r.contains(0));
        assert!(r.contains(6));
        assert!(!r.contains(7));
        assert!(!r.contains(-1));
    }

    #[test]
    fn missing_bounds_are_open() {
        assert!(result(1, None, Some(3)).contains(i32::MIN));
        assert!(result(1, Some(3), None).contains(i32::MAX));
    }

    #[test]
    fn first_matching_range_wins() {
        let results = vec![result(1, Some(0), Some(3)), result(2, Some(3), Some(6)), result(3, Some(7), None)];

        assert_eq!(select_result(&results, 3).map(|r| r.id), Some(1));
        assert_eq!(select_result(&results, 5).map(|r| r.id), Some(2));
        assert_eq!(select_result(&results, 100).map(|r| r.id), Some(3));
        assert!(select_result(&results, -5).is_none());
    }
}
