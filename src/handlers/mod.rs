// src/handlers/mod.rs

pub mod dashboard;
pub mod quiz;

/// Liveness probe.
pub async fn health() -> &'static str {
    "Backend server is running"
}
