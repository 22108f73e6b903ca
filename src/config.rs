// src/config.rs

use std::env;
use dotenvy::dotenv;
use url::Url;

pub const DEFAULT_GENERATOR_URL: &str = "http://localhost:5001/generate_quiz";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Endpoint of the external quiz generator.
    pub generator_url: Url,
    pub generator_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set");

        let generator_url = env::var("GENERATOR_URL")
            .unwrap_or_else(|_| DEFAULT_GENERATOR_URL.to_string());
        let generator_url = Url::parse(&generator_url)
            .expect("GENERATOR_URL must be a valid URL");

        let generator_timeout_secs = env::var("GENERATOR_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(120);

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000);

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Self {
            database_url,
            generator_url,
            generator_timeout_secs,
            port,
            rust_log,
        }
    }
}
