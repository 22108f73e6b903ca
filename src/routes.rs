// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{self, dashboard, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges the quiz and dashboard sub-routers.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (pool, generator).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        HeaderValue::from_static("http://localhost:3000"),
        HeaderValue::from_static("http://127.0.0.1:3000"),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let quiz_routes = Router::new()
        .route("/parse", post(quiz::parse_quiz))
        .route("/generate", post(quiz::generate_quiz))
        .route("/submit", post(quiz::submit_quiz));

    let dashboard_routes =
        Router::new().route("/dashboard-data/{user_id}", get(dashboard::get_dashboard_data));

    Router::new()
        .route("/", get(handlers::health))
        .nest("/api/quiz", quiz_routes)
        .nest("/api/dashboard", dashboard_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
