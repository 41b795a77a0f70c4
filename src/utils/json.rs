// src/utils/json.rs

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON response body written with indented formatting.
///
/// Behaves like `axum::Json` on the way out, but pretty-prints the document.
#[derive(Debug, Clone, Copy, Default)]
pub struct Indented<T>(pub T);

impl<T: Serialize> IntoResponse for Indented<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(body) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json; charset=utf-8"),
                )],
                body,
            )
                .into_response(),
            Err(err) => {
                tracing::error!("Failed to serialize response body: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
