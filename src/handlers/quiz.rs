// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use crate::{
    error::{AppError, ErrorBody},
    models::quiz::{NewQuiz, QuizViewModel},
    repositories::Repositories,
    utils::{identity::CurrentUser, json::Indented, shuffle::shuffle_take},
};

/// How many quizzes the listing endpoints return when `num` is omitted.
pub const DEFAULT_LIST_SIZE: i64 = 10;

/// Retrieves the quiz with the given ID.
#[utoipa::path(
    get,
    path = "/api/quiz/{id}",
    tag = "quiz",
    params(("id" = i64, Path, description = "ID of an existing quiz")),
    responses(
        (status = 200, description = "The quiz", body = QuizViewModel),
        (status = 404, description = "No quiz has that ID", body = ErrorBody)
    )
)]
pub async fn get_quiz(
    State(repos): State<Repositories>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let quiz = repos
        .quizzes
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Quiz", id))?;

    Ok(Indented(QuizViewModel::from(quiz)))
}

/// Adds a new quiz.
///
/// * Title, description, text and notes come from the payload.
/// * Creation and last-modified dates are stamped server-side.
/// * The author is the calling user.
#[utoipa::path(
    put,
    path = "/api/quiz",
    tag = "quiz",
    request_body = QuizViewModel,
    responses(
        (status = 200, description = "The created quiz", body = QuizViewModel),
        (status = 500, description = "Missing payload")
    )
)]
pub async fn create_quiz(
    State(repos): State<Repositories>,
    author: Result<CurrentUser, AppError>,
    payload: Result<Json<QuizViewModel>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(model) = payload?;
    let author = author?;

    let quiz = repos
        .quizzes
        .create(NewQuiz::from_view_model(model, &author, Utc::now()))
        .await?;

    tracing::info!("Quiz {} created by {}", quiz.id, author.username);

    Ok(Indented(QuizViewModel::from(quiz)))
}

/// Edits the quiz identified by the payload's `Id`.
/// Overwrites title, description, text and notes, and stamps the
/// last-modified date.
#[utoipa::path(
    post,
    path = "/api/quiz",
    tag = "quiz",
    request_body = QuizViewModel,
    responses(
        (status = 200, description = "The updated quiz", body = QuizViewModel),
        (status = 404, description = "No quiz has that ID", body = ErrorBody),
        (status = 500, description = "Missing payload")
    )
)]
pub async fn update_quiz(
    State(repos): State<Repositories>,
    payload: Result<Json<QuizViewModel>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(model) = payload?;
    let id = model.id;

    let mut quiz = repos
        .quizzes
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Quiz", id))?;

    quiz.apply(model, Utc::now());

    let quiz = repos
        .quizzes
        .update(&quiz)
        .await?
        .ok_or_else(|| AppError::not_found("Quiz", id))?;

    Ok(Indented(QuizViewModel::from(quiz)))
}

/// Deletes the quiz with the given ID, along with its questions, answers
/// and results.
#[utoipa::path(
    delete,
    path = "/api/quiz/{id}",
    tag = "quiz",
    params(("id" = i64, Path, description = "ID of an existing quiz")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "No quiz has that ID", body = ErrorBody)
    )
)]
pub async fn delete_quiz(
    State(repos): State<Repositories>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    if !repos.quizzes.delete(id).await? {
        return Err(AppError::not_found("Quiz", id));
    }

    tracing::info!("Quiz {} deleted", id);

    Ok(StatusCode::OK)
}

/// Retrieves the `num` most recently created quizzes.
#[utoipa::path(
    get,
    path = "/api/quiz/latest/{num}",
    tag = "quiz",
    params(("num" = i64, Path, description = "Number of quizzes to return (10 when omitted)")),
    responses((status = 200, description = "Newest first", body = [QuizViewModel]))
)]
pub async fn latest_quizzes(
    State(repos): State<Repositories>,
    num: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(num) = num?;
    list_latest(&repos, num).await
}

/// `GET /api/quiz/latest` with the default count.
pub async fn latest_quizzes_default(
    State(repos): State<Repositories>,
) -> Result<impl IntoResponse, AppError> {
    list_latest(&repos, DEFAULT_LIST_SIZE).await
}

/// Retrieves `num` quizzes sorted by title (A to Z).
#[utoipa::path(
    get,
    path = "/api/quiz/bytitle/{num}",
    tag = "quiz",
    params(("num" = i64, Path, description = "Number of quizzes to return (10 when omitted)")),
    responses((status = 200, description = "Ascending by title", body = [QuizViewModel]))
)]
pub async fn quizzes_by_title(
    State(repos): State<Repositories>,
    num: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(num) = num?;
    list_by_title(&repos, num).await
}

/// `GET /api/quiz/bytitle` with the default count.
pub async fn quizzes_by_title_default(
    State(repos): State<Repositories>,
) -> Result<impl IntoResponse, AppError> {
    list_by_title(&repos, DEFAULT_LIST_SIZE).await
}

/// Retrieves `num` quizzes in random order. Every call reshuffles.
#[utoipa::path(
    get,
    path = "/api/quiz/random/{num}",
    tag = "quiz",
    params(("num" = i64, Path, description = "Number of quizzes to return (10 when omitted)")),
    responses((status = 200, description = "Random order", body = [QuizViewModel]))
)]
pub async fn random_quizzes(
    State(repos): State<Repositories>,
    num: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(num) = num?;
    list_random(&repos, num).await
}

/// `GET /api/quiz/random` with the default count.
pub async fn random_quizzes_default(
    State(repos): State<Repositories>,
) -> Result<impl IntoResponse, AppError> {
    list_random(&repos, DEFAULT_LIST_SIZE).await
}

async fn list_latest(
    repos: &Repositories,
    num: i64,
) -> Result<Indented<Vec<QuizViewModel>>, AppError> {
    let quizzes = repos.quizzes.latest(num.max(0)).await?;
    Ok(Indented(quizzes.into_iter().map(QuizViewModel::from).collect()))
}

async fn list_by_title(
    repos: &Repositories,
    num: i64,
) -> Result<Indented<Vec<QuizViewModel>>, AppError> {
    let quizzes = repos.quizzes.by_title(num.max(0)).await?;
    Ok(Indented(quizzes.into_iter().map(QuizViewModel::from).collect()))
}

async fn list_random(
    repos: &Repositories,
    num: i64,
) -> Result<Indented<Vec<QuizViewModel>>, AppError> {
    let quizzes = repos.quizzes.list_all().await?;
    let picked = shuffle_take(quizzes, num, &mut rand::thread_rng());
    Ok(Indented(picked.into_iter().map(QuizViewModel::from).collect()))
}
