// src/models/question.rs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::UnknownVariant;

/// Kind of quiz requested from the generator.
/// Decides the option-set shape and how the `Answer:` line is read.
/// Deserialization goes through `FromStr`, so any letter case is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum QuestionType {
    #[serde(rename = "mcq")]
    MultipleChoice,
    #[default]
    #[serde(rename = "true_false")]
    TrueFalse,
    #[serde(rename = "fill_in_the_blanks")]
    FillInBlank,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "mcq",
            QuestionType::TrueFalse => "true_false",
            QuestionType::FillInBlank => "fill_in_the_blanks",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mcq" | "multiple_choice" => Ok(QuestionType::MultipleChoice),
            "true_false" => Ok(QuestionType::TrueFalse),
            "fill_in_the_blanks" | "fill_in_blank" => Ok(QuestionType::FillInBlank),
            _ => Err(UnknownVariant::new("quiz type", s)),
        }
    }
}

impl TryFrom<String> for QuestionType {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One parsed quiz question.
///
/// `selected_answer` stays `None` until the student answers; the parser
/// never sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// The question text.
    #[serde(rename = "question")]
    pub prompt: String,

    /// Answer choices in label order. Empty for fill-in-the-blank.
    #[serde(default)]
    pub options: Vec<String>,

    /// Resolved answer text, never a letter. Empty when unresolved.
    #[serde(default)]
    pub correct_answer: String,

    #[serde(default)]
    pub selected_answer: Option<String>,
}

impl Question {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_uses_external_field_names() {
        let q = Question {
            prompt: "What is 2+2?".into(),
            options: vec!["3".into(), "4".into()],
            correct_answer: "4".into(),
            selected_answer: None,
        };

        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["question"], "What is 2+2?");
        assert_eq!(json["correctAnswer"], "4");
        assert!(json["selectedAnswer"].is_null());
    }

    #[test]
    fn quiz_type_accepts_wire_names_and_aliases() {
        assert_eq!("mcq".parse::<QuestionType>().unwrap(), QuestionType::MultipleChoice);
        assert_eq!("True_False".parse::<QuestionType>().unwrap(), QuestionType::TrueFalse);
        assert_eq!(
            "fill_in_blank".parse::<QuestionType>().unwrap(),
            QuestionType::FillInBlank
        );
        assert!("qa".parse::<QuestionType>().is_err());

        let parsed: QuestionType = serde_json::from_str("\"fill_in_the_blanks\"").unwrap();
        assert_eq!(parsed, QuestionType::FillInBlank);
        let parsed: QuestionType = serde_json::from_str("\"MCQ\"").unwrap();
        assert_eq!(parsed, QuestionType::MultipleChoice);
        assert!(serde_json::from_str::<QuestionType>("\"essay\"").is_err());
        assert_eq!(serde_json::to_string(&QuestionType::MultipleChoice).unwrap(), "\"mcq\"");
    }
}
