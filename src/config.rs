// src/config.rs

use std::env;
use std::net::SocketAddr;

use dotenvy::dotenv;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:4200,http://127.0.0.1:4200";

#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string. When absent the in-memory store is used.
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub rust_log: String,
    /// Username of the account that authors quizzes created over the API.
    pub admin_username: String,
    /// Whether the seeder adds the sample accounts and generated quizzes.
    pub seed_sample_data: bool,
    /// Directory holding the compiled front end (`index.html` + assets).
    pub client_dir: Option<String>,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        let bind_addr = env::var("BIND_ADDR")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(SocketAddr::from(([0, 0, 0, 0], 3000)));

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let admin_username = env::var("ADMIN_USERNAME")
            .unwrap_or_else(|_| "Admin".to_string());

        let seed_sample_data = env::var("SEED_SAMPLE_DATA")
            .ok()
            .and_then(|s| parse_flag(&s))
            .unwrap_or(cfg!(debug_assertions));

        let client_dir = env::var("CLIENT_DIR").ok().filter(|dir| !dir.is_empty());

        let cors_origins = parse_origins(
            &env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
        );

        Self {
            database_url,
            max_connections,
            bind_addr,
            rust_log,
            admin_username,
            seed_sample_data,
            client_dir,
            cors_origins,
        }
    }
}

impl Default for Config {
    /// In-memory configuration with the default admin and no sample data.
    fn default() -> Self {
        Self {
            database_url: None,
            max_connections: 5,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            rust_log: "info".to_string(),
            admin_username: "Admin".to_string(),
            seed_sample_data: false,
            client_dir: None,
            cors_origins: parse_origins(DEFAULT_CORS_ORIGINS),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
