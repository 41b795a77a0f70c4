// src/handlers/result.rs

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
    models::result::{NewQuizResult, ResultViewModel},
    repositories::Repositories,
    utils::json::Indented,
};

/// Retrieves the result with the given ID.
#[utoipa::path(
    get,
    path = "/api/result/{id}",
    tag = "result",
    params(("id" = i64, Path, description = "ID of an existing result")),
    responses(
        (status = 200, description = "The result", body = ResultViewModel),
        (status = 404, description = "No result has that ID", body = ErrorBody)
    )
)]
pub async fn get_result(
    State(repos): State<Repositories>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let result = repos
        .results
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Result", id))?;

    Ok(Indented(ResultViewModel::from(result)))
}

/// Adds a new result to the quiz named by the payload's `QuizId`.
#[utoipa::path(
    put,
    path = "/api/result",
    tag = "result",
    request_body = ResultViewModel,
    responses(
        (status = 200, description = "The created result", body = ResultViewModel),
        (status = 500, description = "Missing payload")
    )
)]
pub async fn create_result(
    State(repos): State<Repositories>,
    payload: Result<Json<ResultViewModel>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(model) = payload?;

    let result = repos
        .results
        .create(NewQuizResult::from_view_model(model, Utc::now()))
        .await
        .map_err(|e| {
            tracing::error!("Failed to create result: {}", e);
            e
        })?;

    Ok(Indented(ResultViewModel::from(result)))
}

/// Edits the result identified by the payload's `Id`.
#[utoipa::path(
    post,
    path = "/api/result",
    tag = "result",
    request_body = ResultViewModel,
    responses(
        (status = 200, description = "The updated result", body = ResultViewModel),
        (status = 404, description = "No result has that ID", body = ErrorBody),
        (status = 500, description = "Missing payload")
    )
)]
pub async fn update_result(
    State(repos): State<Repositories>,
    payload: Result<Json<ResultViewModel>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(model) = payload?;
    let id = model.id;

    let mut result = repos
        .results
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Result", id))?;

    result.apply(model, Utc::now());

    let result = repos
        .results
        .update(&result)
        .await?
        .ok_or_else(|| AppError::not_found("Result", id))?;

    Ok(Indented(ResultViewModel::from(result)))
}

/// Deletes the result with the given ID.
#[utoipa::path(
    delete,
    path = "/api/result/{id}",
    tag = "result",
    params(("id" = i64, Path, description = "ID of an existing result")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "No result has that ID", body = ErrorBody)
    )
)]
pub async fn delete_result(
    State(repos): State<Repositories>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    if !repos.results.delete(id).await? {
        return Err(AppError::not_found("Result", id));
    }

    Ok(StatusCode::OK)
}

/// Lists every result of a quiz.
#[utoipa::path(
    get,
    path = "/api/result/all/{quiz_id}",
    tag = "result",
    params(("quiz_id" = i64, Path, description = "ID of the parent quiz")),
    responses((status = 200, description = "Results in storage order", body = [ResultViewModel]))
)]
pub async fn list_results(
    State(repos): State<Repositories>,
    quiz_id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(quiz_id) = quiz_id?;
    let results = repos.results.list_by_quiz(quiz_id).await?;

    Ok(Indented(
        results
            .into_iter()
            .map(ResultViewModel::from)
            .collect::<Vec<_>>(),
    ))
}
