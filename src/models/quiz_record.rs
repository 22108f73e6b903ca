// src/models/quiz_record.rs

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{UnknownVariant, question::QuestionType};

/// Difficulty level chosen when the quiz was generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(UnknownVariant::new("difficulty", s)),
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A graded attempt that has not been stored yet.
/// `created_at` is assigned by the database on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewQuizRecord {
    pub topic: String,
    #[serde(rename = "type")]
    pub quiz_type: QuestionType,
    pub difficulty: Difficulty,
    pub user_id: String,
    pub correct_attempts: u32,
    pub wrong_attempts: u32,
}

/// One persisted quiz attempt. Immutable once stored.
///
/// Field names follow the `quizzes` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptSummary {
    pub topic: String,
    #[serde(rename = "type")]
    pub quiz_type: QuestionType,
    pub difficulty: Difficulty,
    /// Opaque owner identifier, usually the student's display name.
    pub user_id: String,
    pub correct_attempts: u32,
    pub wrong_attempts: u32,
    pub created_at: DateTime<Utc>,
}

impl AttemptSummary {
    pub fn total_questions(&self) -> u32 {
        self.correct_attempts + self.wrong_attempts
    }
}

/// Raw row of the `quizzes` table.
#[derive(Debug, Clone, FromRow)]
pub struct QuizRecordRow {
    pub id: i64,
    pub topic: String,
    #[sqlx(rename = "type")]
    pub quiz_type: String,
    pub difficulty: String,
    pub user_id: String,
    pub correct_attempts: i32,
    pub wrong_attempts: i32,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<QuizRecordRow> for AttemptSummary {
    type Error = UnknownVariant;

    fn try_from(row: QuizRecordRow) -> Result<Self, Self::Error> {
        let count = |field: &'static str, value: i32| {
            u32::try_from(value).map_err(|_| UnknownVariant::new(field, &value.to_string()))
        };

        Ok(AttemptSummary {
            quiz_type: row.quiz_type.parse()?,
            difficulty: row.difficulty.parse()?,
            correct_attempts: count("correct_attempts", row.correct_attempts)?,
            wrong_attempts: count("wrong_attempts", row.wrong_attempts)?,
            topic: row.topic,
            user_id: row.user_id,
            created_at: row.created_at,
        })
    }
}
