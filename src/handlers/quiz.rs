// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::PgPool;
use validator::Validate;

use crate::{
    engine::{self, AttemptContext},
    error::AppError,
    generator::{GenerationRequest, QuizGenerator},
    models::{
        quiz::{
            GenerateQuizRequest, GenerateQuizResponse, ParseQuizRequest, SubmitQuizRequest,
            SubmitQuizResponse,
        },
        quiz_record::{AttemptSummary, QuizRecordRow},
    },
};

/// Parses raw generator text into structured questions.
///
/// Never fails on malformed text; unrecognized lines are dropped.
pub async fn parse_quiz(Json(req): Json<ParseQuizRequest>) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let questions = engine::parse(&req.raw_text, req.quiz_type);
    tracing::debug!("Parsed {} questions ({})", questions.len(), req.quiz_type);

    Ok(Json(questions))
}

/// Requests a quiz from the external generator and parses it.
///
/// * Validates topic and material.
/// * Forwards the request to the generator.
/// * Returns the raw text alongside the parsed questions.
pub async fn generate_quiz(
    State(generator): State<Arc<dyn QuizGenerator>>,
    Json(req): Json<GenerateQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = req.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    tracing::info!("Generating {} quiz on '{}' for {}", req.quiz_type, req.topic, req.user_id);

    let request = GenerationRequest {
        topic: req.topic,
        quiz_type: req.quiz_type,
        difficulty: req.difficulty,
        user_id: req.user_id,
        material: req.material,
    };

    let raw = generator.generate(&request).await?;
    let questions = engine::parse(&raw, request.quiz_type);

    if questions.is_empty() {
        tracing::warn!("Generator output for '{}' contained no recognizable questions", request.topic);
    }

    Ok(Json(GenerateQuizResponse {
        success: true,
        quiz: raw,
        questions,
    }))
}

/// Grades a submitted quiz and stores the attempt summary.
///
/// * Compares answers case-insensitively, ignoring surrounding whitespace.
/// * Unanswered questions count as wrong.
/// * Inserts exactly one row into `quizzes`.
pub async fn submit_quiz(
    State(pool): State<PgPool>,
    Json(req): Json<SubmitQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = req.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let graded = engine::grade_attempt(
        AttemptContext {
            topic: req.topic,
            quiz_type: req.quiz_type,
            difficulty: req.difficulty,
            user_id: req.user_id,
        },
        &req.questions,
    );
    let record = &graded.record;

    let count = |value: u32| {
        i32::try_from(value).map_err(|_| AppError::BadRequest("Too many questions".to_string()))
    };

    let row = sqlx::query_as::<_, QuizRecordRow>(
        r#"
        INSERT INTO quizzes (topic, type, difficulty, user_id, correct_attempts, wrong_attempts)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, topic, type, difficulty, user_id, correct_attempts, wrong_attempts, created_at
        "#,
    )
    .bind(&record.topic)
    .bind(record.quiz_type.as_str())
    .bind(record.difficulty.as_str())
    .bind(&record.user_id)
    .bind(count(record.correct_attempts)?)
    .bind(count(record.wrong_attempts)?)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to save quiz results: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    tracing::info!(
        "Saved quiz {} for {}: {} correct, {} wrong",
        row.id,
        record.user_id,
        record.correct_attempts,
        record.wrong_attempts
    );

    Ok(Json(SubmitQuizResponse {
        success: true,
        message: "Quiz results saved successfully.".to_string(),
        record: AttemptSummary::try_from(row)?,
        results: graded.results,
    }))
}
