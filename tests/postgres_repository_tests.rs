// tests/postgres_repository_tests.rs
//
// Runs against a live database only when DATABASE_URL is set; otherwise
// each test returns early.

use chrono::{Duration, Utc};
use quizmaker::{
    models::{question::NewQuestion, quiz::NewQuiz, user::NewUser},
    repositories::Repositories,
};
use sqlx::postgres::PgPoolOptions;

async fn setup() -> Option<Repositories> {
    let database_url = std::env::var("DATABASE_URL").ok()?;
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .expect("Failed to connect to Postgres");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate");
    Some(Repositories::postgres(pool))
}

fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

#[tokio::test]
async fn quiz_crud_and_cascade() {
    let Some(repos) = setup().await else {
        return;
    };
    let now = Utc::now();
    let username = unique("pg-user");
    let user = repos
        .users
        .create(NewUser::new(&username, "pg@example.com", now, now))
        .await
        .unwrap();

    let quiz = repos
        .quizzes
        .create(NewQuiz {
            user_id: user.id,
            title: unique("pg-quiz"),
            description: Some("desc".to_string()),
            text: None,
            notes: None,
            view_count: 0,
            created_at: now,
            last_modified_at: now,
        })
        .await
        .unwrap();
    assert_eq!(repos.quizzes.find_by_id(quiz.id).await.unwrap().as_ref(), Some(&quiz));

    let mut edited = quiz.clone();
    edited.title = "edited".to_string();
    edited.last_modified_at = now + Duration::seconds(5);
    let updated = repos.quizzes.update(&edited).await.unwrap().unwrap();
    assert_eq!(updated.title, "edited");
    assert!(updated.last_modified_at > updated.created_at);

    let question = repos
        .questions
        .create(NewQuestion {
            quiz_id: quiz.id,
            text: "Q".to_string(),
            notes: None,
            created_at: now,
            last_modified_at: now,
        })
        .await
        .unwrap();

    assert!(repos.quizzes.delete(quiz.id).await.unwrap());
    assert!(!repos.quizzes.delete(quiz.id).await.unwrap());
    assert!(repos.questions.find_by_id(question.id).await.unwrap().is_none());
}

#[tokio::test]
async fn latest_is_newest_first() {
    let Some(repos) = setup().await else {
        return;
    };
    let now = Utc::now();
    let user = repos
        .users
        .create(NewUser::new(&unique("pg-latest"), "latest@example.com", now, now))
        .await
        .unwrap();

    let newest = repos
        .quizzes
        .create(NewQuiz {
            user_id: user.id,
            title: unique("pg-newest"),
            description: None,
            text: None,
            notes: None,
            view_count: 0,
            created_at: now + Duration::days(3650),
            last_modified_at: now,
        })
        .await
        .unwrap();

    let latest = repos.quizzes.latest(1).await.unwrap();
    assert_eq!(latest[0].id, newest.id);

    repos.quizzes.delete(newest.id).await.unwrap();
}
