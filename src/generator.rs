// src/generator.rs

//! Client for the external quiz generation service.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::models::{question::QuestionType, quiz_record::Difficulty};

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The request never produced a response.
    #[error("generator unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("generator returned HTTP {0}")]
    Status(u16),

    /// The service answered but reported failure.
    #[error("generator rejected request: {0}")]
    Rejected(String),
}

/// Payload sent to the generator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub topic: String,
    pub quiz_type: QuestionType,
    pub difficulty: Difficulty,
    pub user_id: String,
    pub material: String,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    success: bool,
    quiz: Option<String>,
    message: Option<String>,
}

/// Produces raw quiz text for the parser.
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GeneratorError>;
}

/// Generator reached over HTTP with a JSON body.
pub struct HttpGenerator {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpGenerator {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, GeneratorError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl QuizGenerator for HttpGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GeneratorError> {
        tracing::debug!(
            topic = %request.topic,
            quiz_type = %request.quiz_type,
            "requesting quiz from generator"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeneratorError::Status(status.as_u16()));
        }

        let body: GenerationResponse = response.json().await?;
        match (body.success, body.quiz) {
            (true, Some(quiz)) => Ok(quiz),
            (true, None) => Err(GeneratorError::Rejected("empty quiz".to_string())),
            (false, _) => Err(GeneratorError::Rejected(
                body.message.unwrap_or_else(|| "unknown error".to_string()),
            )),
        }
    }
}
