// tests/common/mod.rs

#![allow(dead_code)]

use chrono::Utc;
use quizmaker::{
    config::Config,
    models::user::NewUser,
    repositories::Repositories,
    routes,
    seed::{self, SeedOptions},
    state::AppState,
};

pub struct TestApp {
    pub address: String,
    pub repos: Repositories,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

/// Spawns the app on a random port over `repos`.
pub async fn spawn_app_with(repos: Repositories) -> TestApp {
    let config = Config {
        rust_log: "error".to_string(),
        ..Config::default()
    };

    spawn_app_with_config(repos, config).await
}

pub async fn spawn_app_with_config(repos: Repositories, config: Config) -> TestApp {
    let state = AppState {
        repos: repos.clone(),
        config,
    };
    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    // Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address,
        repos,
        client: reqwest::Client::new(),
    }
}

/// An app whose store only holds the admin account.
pub async fn spawn_app() -> TestApp {
    let repos = Repositories::in_memory();
    let now = Utc::now();
    repos
        .users
        .create(NewUser::new("Admin", "admin@testmakerfree.com", now, now))
        .await
        .expect("Failed to create admin");

    spawn_app_with(repos).await
}

/// An app over a store populated by the seeder.
pub async fn spawn_seeded_app(sample_data: bool) -> TestApp {
    let repos = Repositories::in_memory();
    let options = SeedOptions {
        sample_data,
        ..SeedOptions::default()
    };
    seed::seed(&repos, &options).await.expect("Failed to seed");

    spawn_app_with(repos).await
}

/// Creates a quiz over HTTP and returns the response body.
pub async fn create_quiz(app: &TestApp, title: &str) -> serde_json::Value {
    app.client
        .put(app.url("/api/quiz"))
        .json(&serde_json::json!({
            "Title": title,
            "Description": format!("{} description", title),
            "Text": format!("{} text", title)
        }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse quiz json")
}
