// src/client.rs

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// Routes rendered by the front end's router.
/// Each is answered with `index.html` so deep links and reloads work.
pub const CLIENT_ROUTES: &[&str] = &[
    "/",
    "/home",
    "/quiz/create",
    "/quiz/edit/{id}",
    "/quiz/{id}",
    "/question/create/{id}",
    "/question/edit/{id}",
    "/about",
    "/login",
];

/// Serves the compiled front end found in `dir`.
///
/// Known client routes map to `index.html`; everything else is looked up as
/// a static asset and falls back to `index.html`, where the client renders
/// its own not-found page.
pub fn client_router<S>(dir: &str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let index = Path::new(dir).join("index.html");

    let router = CLIENT_ROUTES
        .iter()
        .fold(Router::new(), |router, route| {
            router.route_service(route, ServeFile::new(&index))
        });

    router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(&index)))
}
