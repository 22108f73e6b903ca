// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{
    question::{Question, QuestionType},
    quiz_record::{AttemptSummary, Difficulty},
};

fn guest() -> String {
    "guest".to_string()
}

/// DTO for parsing generator text that the client already holds.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ParseQuizRequest {
    #[validate(length(max = 100000))]
    pub raw_text: String,
    #[serde(default)]
    pub quiz_type: QuestionType,
}

/// DTO for asking the generator for a new quiz.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, max = 200, message = "Topic is required."))]
    pub topic: String,

    #[serde(default)]
    pub quiz_type: QuestionType,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default = "guest")]
    #[validate(length(min = 1, max = 100))]
    pub user_id: String,

    /// Study material the questions are drawn from.
    #[validate(length(min = 1, max = 200000, message = "Material is required."))]
    pub material: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuizResponse {
    pub success: bool,
    /// The generator's raw text, kept for clients that re-parse it.
    pub quiz: String,
    pub questions: Vec<Question>,
}

/// DTO for submitting answered questions.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub topic: String,

    pub quiz_type: QuestionType,

    pub difficulty: Difficulty,

    #[serde(default = "guest")]
    #[validate(length(min = 1, max = 100))]
    pub user_id: String,

    #[validate(length(min = 1, message = "No answers submitted"))]
    pub questions: Vec<Question>,
}

#[derive(Debug, Serialize)]
pub struct SubmitQuizResponse {
    pub success: bool,
    pub message: String,
    pub record: AttemptSummary,
    /// `results[i]` is whether question `i` was answered correctly.
    pub results: Vec<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_applies_defaults() {
        let req: GenerateQuizRequest =
            serde_json::from_str(r#"{"topic": "Cells", "material": "Mitochondria..."}"#).unwrap();
        assert_eq!(req.quiz_type, QuestionType::TrueFalse);
        assert_eq!(req.difficulty, Difficulty::Medium);
        assert_eq!(req.user_id, "guest");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn generate_request_requires_topic() {
        let req: GenerateQuizRequest =
            serde_json::from_str(r#"{"topic": "", "material": "text"}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn parse_request_uses_camel_case_and_any_case_quiz_type() {
        let req: ParseQuizRequest =
            serde_json::from_str(r#"{"rawText": "Q1. Hi?", "quizType": "MCQ"}"#).unwrap();
        assert_eq!(req.raw_text, "Q1. Hi?");
        assert_eq!(req.quiz_type, QuestionType::MultipleChoice);
    }

    #[test]
    fn submit_request_rejects_empty_question_list() {
        let req: SubmitQuizRequest = serde_json::from_str(
            r#"{"topic": "Cells", "quizType": "mcq", "difficulty": "easy", "userId": "a", "questions": []}"#,
        )
        .unwrap();
        assert!(req.validate().is_err());
    }
}
