// src/openapi.rs

use utoipa::OpenApi;

use crate::{
    error::ErrorBody,
    handlers::{answer, question, quiz, result},
    models::{
        answer::AnswerViewModel, question::QuestionViewModel, quiz::QuizViewModel,
        result::ResultViewModel,
    },
};

/// OpenAPI description of the REST surface, served at `/api/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(title = "quizmaker", description = "Quiz authoring REST API"),
    paths(
        quiz::get_quiz,
        quiz::create_quiz,
        quiz::update_quiz,
        quiz::delete_quiz,
        quiz::latest_quizzes,
        quiz::quizzes_by_title,
        quiz::random_quizzes,
        question::get_question,
        question::create_question,
        question::update_question,
        question::delete_question,
        question::list_questions,
        answer::get_answer,
        answer::create_answer,
        answer::update_answer,
        answer::delete_answer,
        answer::list_answers,
        result::get_result,
        result::create_result,
        result::update_result,
        result::delete_result,
        result::list_results,
    ),
    components(schemas(
        QuizViewModel,
        QuestionViewModel,
        AnswerViewModel,
        ResultViewModel,
        ErrorBody
    )),
    tags(
        (name = "quiz", description = "Quizzes and quiz listings"),
        (name = "question", description = "Questions of a quiz"),
        (name = "answer", description = "Scored answers of a question"),
        (name = "result", description = "Score ranges of a quiz")
    )
)]
pub struct ApiDoc;
