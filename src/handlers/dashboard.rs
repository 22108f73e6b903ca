// src/handlers/dashboard.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use sqlx::PgPool;

use crate::{
    engine,
    error::AppError,
    models::{
        dashboard::DashboardData,
        quiz_record::{AttemptSummary, QuizRecordRow},
    },
};

/// Builds the four dashboard charts for one user.
///
/// Returns 404 when the user has no stored attempts, so the client can
/// render an empty state instead of zero-valued charts.
pub async fn get_dashboard_data(
    State(pool): State<PgPool>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let rows = sqlx::query_as::<_, QuizRecordRow>(
        r#"
        SELECT id, topic, type, difficulty, user_id, correct_attempts, wrong_attempts, created_at
        FROM quizzes
        WHERE user_id = $1
        ORDER BY created_at, id
        "#,
    )
    .bind(&user_id)
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch quizzes for {}: {:?}", user_id, e);
        AppError::InternalServerError(e.to_string())
    })?;

    let records = rows
        .into_iter()
        .map(AttemptSummary::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!("Aggregating {} quizzes for {}", records.len(), user_id);

    let view = engine::aggregate(&records)?;

    Ok(Json(DashboardData::from(&view)))
}
