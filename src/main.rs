// src/main.rs

use quizmaker::config::Config;
use quizmaker::repositories::Repositories;
use quizmaker::routes;
use quizmaker::seed::{self, SeedOptions};
use quizmaker::state::AppState;
use dotenvy::dotenv;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let repos = match &config.database_url {
        Some(database_url) => {
            let pool = connect_with_retry(database_url, config.max_connections).await?;
            tracing::info!("Database connected...");

            // Run Migrations Automatically
            tracing::info!("Running migrations...");
            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Migrations applied successfully.");

            Repositories::postgres(pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using the in-memory store. Data is lost on exit.");
            Repositories::in_memory()
        }
    };

    // Seed default accounts and quizzes
    let options = SeedOptions {
        admin_username: config.admin_username.clone(),
        sample_data: config.seed_sample_data,
        ..SeedOptions::default()
    };
    if let Err(e) = seed::seed(&repos, &options).await {
        tracing::error!("Failed to seed database: {}", e);
    }

    let addr = config.bind_addr;

    // Create AppState
    let state = AppState { repos, config };

    // Create the Axum application router
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    // Start the server
    axum::serve(listener, app).await?;

    Ok(())
}

/// Connects to PostgreSQL, retrying while the database comes up.
async fn connect_with_retry(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    let mut retry_count = 0;
    loop {
        match PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await
        {
            Ok(pool) => return Ok(pool),
            Err(e) => {
                retry_count += 1;
                if retry_count > 5 {
                    tracing::error!("Failed to connect to database after 5 retries: {}", e);
                    return Err(e);
                }
                tracing::warn!("Database not ready, retrying in 2s... (Attempt {})", retry_count);
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
        }
    }
}
