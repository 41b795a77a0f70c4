// src/handlers/answer.rs

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
    models::answer::{AnswerViewModel, NewAnswer},
    repositories::Repositories,
    utils::json::Indented,
};

/// Retrieves the answer with the given ID.
#[utoipa::path(
    get,
    path = "/api/answer/{id}",
    tag = "answer",
    params(("id" = i64, Path, description = "ID of an existing answer")),
    responses(
        (status = 200, description = "The answer", body = AnswerViewModel),
        (status = 404, description = "No answer has that ID", body = ErrorBody)
    )
)]
pub async fn get_answer(
    State(repos): State<Repositories>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let answer = repos
        .answers
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Answer", id))?;

    Ok(Indented(AnswerViewModel::from(answer)))
}

/// Adds a new answer to the question named by the payload's `QuestionId`.
#[utoipa::path(
    put,
    path = "/api/answer",
    tag = "answer",
    request_body = AnswerViewModel,
    responses(
        (status = 200, description = "The created answer", body = AnswerViewModel),
        (status = 500, description = "Missing payload")
    )
)]
pub async fn create_answer(
    State(repos): State<Repositories>,
    payload: Result<Json<AnswerViewModel>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(model) = payload?;

    let answer = repos
        .answers
        .create(NewAnswer::from_view_model(model, Utc::now()))
        .await
        .map_err(|e| {
            tracing::error!("Failed to create answer: {}", e);
            e
        })?;

    Ok(Indented(AnswerViewModel::from(answer)))
}

/// Edits the answer identified by the payload's `Id`.
#[utoipa::path(
    post,
    path = "/api/answer",
    tag = "answer",
    request_body = AnswerViewModel,
    responses(
        (status = 200, description = "The updated answer", body = AnswerViewModel),
        (status = 404, description = "No answer has that ID", body = ErrorBody),
        (status = 500, description = "Missing payload")
    )
)]
pub async fn update_answer(
    State(repos): State<Repositories>,
    payload: Result<Json<AnswerViewModel>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(model) = payload?;
    let id = model.id;

    let mut answer = repos
        .answers
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Answer", id))?;

    answer.apply(model, Utc::now());

    let answer = repos
        .answers
        .update(&answer)
        .await?
        .ok_or_else(|| AppError::not_found("Answer", id))?;

    Ok(Indented(AnswerViewModel::from(answer)))
}

/// Deletes the answer with the given ID.
#[utoipa::path(
    delete,
    path = "/api/answer/{id}",
    tag = "answer",
    params(("id" = i64, Path, description = "ID of an existing answer")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "No answer has that ID", body = ErrorBody)
    )
)]
pub async fn delete_answer(
    State(repos): State<Repositories>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    if !repos.answers.delete(id).await? {
        return Err(AppError::not_found("Answer", id));
    }

    Ok(StatusCode::OK)
}

/// Lists every answer of a question.
#[utoipa::path(
    get,
    path = "/api/answer/all/{question_id}",
    tag = "answer",
    params(("question_id" = i64, Path, description = "ID of the parent question")),
    responses((status = 200, description = "Answers in storage order", body = [AnswerViewModel]))
)]
pub async fn list_answers(
    State(repos): State<Repositories>,
    question_id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(question_id) = question_id?;
    let answers = repos.answers.list_by_question(question_id).await?;

    Ok(Indented(
        answers
            .into_iter()
            .map(AnswerViewModel::from)
            .collect::<Vec<_>>(),
    ))
}
