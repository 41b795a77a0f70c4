// src/seed.rs

//! Startup data bootstrap.
//!
//! Each table is seeded only while it is empty, so running the seeder
//! against a populated store changes nothing.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::{
    error::{AppError, AppResult},
    models::{
        answer::NewAnswer,
        question::NewQuestion,
        quiz::NewQuiz,
        result::NewQuizResult,
        user::NewUser,
    },
    repositories::Repositories,
    utils::identity,
};

/// Number of generated sample quizzes.
pub const SAMPLE_QUIZ_COUNT: i64 = 47;
const QUESTIONS_PER_QUIZ: i32 = 3;
const ANSWERS_PER_QUESTION: i32 = 3;
const RESULTS_PER_QUIZ: i32 = 3;

#[derive(Debug, Clone)]
pub struct SeedOptions {
    /// Username and email of the default author account.
    pub admin_username: String,
    pub admin_email: String,

    /// Adds sample accounts and generated quizzes.
    pub sample_data: bool,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            admin_username: "Admin".to_string(),
            admin_email: "admin@testmakerfree.com".to_string(),
            sample_data: false,
        }
    }
}

/// Populates empty tables with the default accounts and quizzes.
pub async fn seed(repos: &Repositories, options: &SeedOptions) -> AppResult<()> {
    if repos.users.count().await? == 0 {
        create_users(repos, options).await?;
    }

    if repos.quizzes.count().await? == 0 {
        create_quizzes(repos, options).await?;
    }

    Ok(())
}

/// The fixed creation date of every seeded row.
fn seed_date() -> AppResult<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2019, 2, 19, 12, 0, 0)
        .single()
        .ok_or_else(|| AppError::InternalServerError("invalid seed date".to_string()))
}

async fn create_users(repos: &Repositories, options: &SeedOptions) -> AppResult<()> {
    let created = seed_date()?;
    let modified = Utc::now();

    tracing::info!("Seeding admin user: {}", options.admin_username);
    repos
        .users
        .create(NewUser::new(&options.admin_username, &options.admin_email, created, modified))
        .await?;

    if options.sample_data {
        for (username, email) in [
            ("John", "john@testmakerfree.com"),
            ("Bob", "bob@testmakerfree.com"),
            ("Mike", "mike@testmakerfree.com"),
        ] {
            repos
                .users
                .create(NewUser::new(username, email, created, modified))
                .await?;
        }
        tracing::info!("Sample users created.");
    }

    Ok(())
}

async fn create_quizzes(repos: &Repositories, options: &SeedOptions) -> AppResult<()> {
    let created = seed_date()?;
    let modified = Utc::now();
    let author = identity::resolve(repos, &options.admin_username).await?;

    if options.sample_data {
        let sample_date = created - Duration::days(SAMPLE_QUIZ_COUNT);
        for num in 1..=SAMPLE_QUIZ_COUNT {
            create_sample_quiz(repos, num, author.id, SAMPLE_QUIZ_COUNT - 1, sample_date).await?;
        }
        tracing::info!("{} sample quizzes created.", SAMPLE_QUIZ_COUNT);
    }

    for (title, description, text, view_count) in EXAMPLE_QUIZZES {
        repos
            .quizzes
            .create(NewQuiz {
                user_id: author.id,
                title: title.to_string(),
                description: Some(description.to_string()),
                text: Some(text.to_string()),
                notes: None,
                view_count: *view_count,
                created_at: created,
                last_modified_at: modified,
            })
            .await?;
    }
    tracing::info!("Example quizzes created.");

    Ok(())
}

/// Creates one generated quiz with its questions, answers and results.
async fn create_sample_quiz(
    repos: &Repositories,
    num: i64,
    author_id: i64,
    view_count: i64,
    created: DateTime<Utc>,
) -> AppResult<()> {
    let quiz = repos
        .quizzes
        .create(NewQuiz {
            user_id: author_id,
            title: format!("Quiz {} Title", num),
            description: Some(format!("This is a sample description for quiz {}.", num)),
            text: Some(
                "This is a sample quiz created by the seeder for testing purposes. \
                 All the questions, answers & results are auto-generated as well."
                    .to_string(),
            ),
            notes: None,
            view_count,
            created_at: created,
            last_modified_at: created,
        })
        .await?;

    for _ in 0..QUESTIONS_PER_QUIZ {
        let question = repos
            .questions
            .create(NewQuestion {
                quiz_id: quiz.id,
                text: "This is a sample question created by the seeder for testing purposes. \
                       All the child answers are auto-generated as well."
                    .to_string(),
                notes: None,
                created_at: created,
                last_modified_at: created,
            })
            .await?;

        for value in 0..ANSWERS_PER_QUESTION {
            repos
                .answers
                .create(NewAnswer {
                    question_id: question.id,
                    text: "This is a sample answer created by the seeder for testing purposes."
                        .to_string(),
                    value,
                    notes: None,
                    created_at: created,
                    last_modified_at: created,
                })
                .await?;
        }
    }

    for _ in 0..RESULTS_PER_QUIZ {
        repos
            .results
            .create(NewQuizResult {
                quiz_id: quiz.id,
                text: "This is a sample result created by the seeder for testing purposes."
                    .to_string(),
                min_value: Some(0),
                max_value: Some(ANSWERS_PER_QUESTION * 2),
                notes: None,
                created_at: created,
                last_modified_at: created,
            })
            .await?;
    }

    Ok(())
}

/// Hand-authored quizzes: title, description, text, view count.
const EXAMPLE_QUIZZES: &[(&str, &str, &str, i64)] = &[
    (
        "Are you more Light or Dark side of the Force?",
        "Star Wars Personality Test",
        "Choose wisely you must, young padawan: \
         this test will prove if your will is strong enough \
         to adhere to the principles of the light side of the Force \
         or if you're fated to embrace the dark side. \
         No you want to become a true JEDI, you can't possibly miss this!",
        2343,
    ),
    (
        "GenX, GenY or GenZ?",
        "Find out what decade most represents you",
        "Do you feel comfortable in your generation? \
         What year should you have been born in? \
         Here's a bunch of questions that will help you to find out!",
        4180,
    ),
    (
        "Which Shingeki No Kyojin character are you?",
        "Attack On Titan Personality Test",
        "Do you relentlessly seek revenge like Eren? \
         Are you willing to put your life on the stake to protect your friends like Mikasa? \
         Would you trust your fighting skills like Levi \
         or rely on your strategies and tactics like Arwin? \
         Unveil your true self with this Attack On Titan Personality Test!",
        5203,
    ),
];
