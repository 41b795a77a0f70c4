// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    response::IntoResponse,
    routing::{get, put},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    client::client_router,
    error::AppError,
    handlers::{answer, question, quiz, result},
    openapi::ApiDoc,
    state::AppState,
    utils::json::Indented,
};

/// Assembles the main application router.
///
/// * Mounts the quiz, question, answer and result resources under `/api`.
/// * Serves the front end when a client directory is configured.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (repositories and configuration).
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let quiz_routes = Router::new()
        .route("/quiz", put(quiz::create_quiz).post(quiz::update_quiz))
        .route("/quiz/{id}", get(quiz::get_quiz).delete(quiz::delete_quiz))
        .route("/quiz/latest", get(quiz::latest_quizzes_default))
        .route("/quiz/latest/{num}", get(quiz::latest_quizzes))
        .route("/quiz/bytitle", get(quiz::quizzes_by_title_default))
        .route("/quiz/bytitle/{num}", get(quiz::quizzes_by_title))
        .route("/quiz/random", get(quiz::random_quizzes_default))
        .route("/quiz/random/{num}", get(quiz::random_quizzes));

    let question_routes = Router::new()
        .route(
            "/question",
            put(question::create_question).post(question::update_question),
        )
        .route(
            "/question/{id}",
            get(question::get_question).delete(question::delete_question),
        )
        .route("/question/all/{quiz_id}", get(question::list_questions));

    let answer_routes = Router::new()
        .route("/answer", put(answer::create_answer).post(answer::update_answer))
        .route("/answer/{id}", get(answer::get_answer).delete(answer::delete_answer))
        .route("/answer/all/{question_id}", get(answer::list_answers));

    let result_routes = Router::new()
        .route("/result", put(result::create_result).post(result::update_result))
        .route("/result/{id}", get(result::get_result).delete(result::delete_result))
        .route("/result/all/{quiz_id}", get(result::list_results));

    let api_routes = Router::new()
        .merge(quiz_routes)
        .merge(question_routes)
        .merge(answer_routes)
        .merge(result_routes)
        .route("/openapi.json", get(openapi_document))
        .fallback(api_not_found);

    let mut app = Router::new().nest("/api", api_routes);

    app = match &state.config.client_dir {
        Some(dir) => {
            tracing::info!("Serving client from {}", dir);
            app.merge(client_router(dir))
        }
        None => app.fallback(api_not_found),
    };

    app
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

async fn openapi_document() -> impl IntoResponse {
    Indented(ApiDoc::openapi())
}

async fn api_not_found() -> AppError {
    AppError::NotFound("Resource not found".to_string())
}
