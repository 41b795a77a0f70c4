// src/handlers/question.rs

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
    models::question::{NewQuestion, QuestionViewModel},
    repositories::Repositories,
    utils::json::Indented,
};

/// Retrieves the question with the given ID.
#[utoipa::path(
    get,
    path = "/api/question/{id}",
    tag = "question",
    params(("id" = i64, Path, description = "ID of an existing question")),
    responses(
        (status = 200, description = "The question", body = QuestionViewModel),
        (status = 404, description = "No question has that ID", body = ErrorBody)
    )
)]
pub async fn get_question(
    State(repos): State<Repositories>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let question = repos
        .questions
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Question", id))?;

    Ok(Indented(QuestionViewModel::from(question)))
}

/// Adds a new question to the quiz named by the payload's `QuizId`.
#[utoipa::path(
    put,
    path = "/api/question",
    tag = "question",
    request_body = QuestionViewModel,
    responses(
        (status = 200, description = "The created question", body = QuestionViewModel),
        (status = 500, description = "Missing payload")
    )
)]
pub async fn create_question(
    State(repos): State<Repositories>,
    payload: Result<Json<QuestionViewModel>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(model) = payload?;

    let question = repos
        .questions
        .create(NewQuestion::from_view_model(model, Utc::now()))
        .await
        .map_err(|e| {
            tracing::error!("Failed to create question: {}", e);
            e
        })?;

    Ok(Indented(QuestionViewModel::from(question)))
}

/// Edits the question identified by the payload's `Id`.
#[utoipa::path(
    post,
    path = "/api/question",
    tag = "question",
    request_body = QuestionViewModel,
    responses(
        (status = 200, description = "The updated question", body = QuestionViewModel),
        (status = 404, description = "No question has that ID", body = ErrorBody),
        (status = 500, description = "Missing payload")
    )
)]
pub async fn update_question(
    State(repos): State<Repositories>,
    payload: Result<Json<QuestionViewModel>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(model) = payload?;
    let id = model.id;

    let mut question = repos
        .questions
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Question", id))?;

    question.apply(model, Utc::now());

    let question = repos
        .questions
        .update(&question)
        .await?
        .ok_or_else(|| AppError::not_found("Question", id))?;

    Ok(Indented(QuestionViewModel::from(question)))
}

/// Deletes the question with the given ID and its answers.
#[utoipa::path(
    delete,
    path = "/api/question/{id}",
    tag = "question",
    params(("id" = i64, Path, description = "ID of an existing question")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "No question has that ID", body = ErrorBody)
    )
)]
pub async fn delete_question(
    State(repos): State<Repositories>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    if !repos.questions.delete(id).await? {
        return Err(AppError::not_found("Question", id));
    }

    Ok(StatusCode::OK)
}

/// Lists every question of a quiz.
#[utoipa::path(
    get,
    path = "/api/question/all/{quiz_id}",
    tag = "question",
    params(("quiz_id" = i64, Path, description = "ID of the parent quiz")),
    responses((status = 200, description = "Questions in storage order", body = [QuestionViewModel]))
)]
pub async fn list_questions(
    State(repos): State<Repositories>,
    quiz_id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(quiz_id) = quiz_id?;
    let questions = repos.questions.list_by_quiz(quiz_id).await?;

    Ok(Indented(
        questions
            .into_iter()
            .map(QuestionViewModel::from)
            .collect::<Vec<_>>(),
    ))
}
