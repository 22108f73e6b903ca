// src/engine/grading.rs

use serde::Serialize;

use crate::models::{
    question::{Question, QuestionType},
    quiz_record::{Difficulty, NewQuizRecord},
};

/// Correct/wrong split for one graded quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub correct: u32,
    pub wrong: u32,
}

impl Score {
    pub fn total(&self) -> u32 {
        self.correct + self.wrong
    }
}

/// Case-insensitive comparison of trimmed answers.
pub fn answers_match(selected: &str, correct: &str) -> bool {
    selected.trim().to_lowercase() == correct.trim().to_lowercase()
}

/// Whether the student's answer to `question` counts as correct.
///
/// Unanswered questions are wrong. A question without a resolved answer,
/// or a choice question with no options, can never be answered correctly.
pub fn is_correct(question: &Question, quiz_type: QuestionType) -> bool {
    if question.correct_answer.trim().is_empty() {
        return false;
    }
    if quiz_type != QuestionType::FillInBlank && question.options.is_empty() {
        return false;
    }
    question
        .selected_answer
        .as_deref()
        .is_some_and(|selected| answers_match(selected, &question.correct_answer))
}

/// Grades every question. `correct + wrong` always equals `questions.len()`.
pub fn grade(questions: &[Question], quiz_type: QuestionType) -> Score {
    let correct = questions
        .iter()
        .filter(|q| is_correct(q, quiz_type))
        .count() as u32;
    Score {
        correct,
        wrong: questions.len() as u32 - correct,
    }
}

/// Who took the quiz and under which settings.
#[derive(Debug, Clone)]
pub struct AttemptContext {
    pub topic: String,
    pub quiz_type: QuestionType,
    pub difficulty: Difficulty,
    pub user_id: String,
}

/// Outcome of grading a submission: the record to store plus per-question marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradedAttempt {
    pub record: NewQuizRecord,
    pub results: Vec<bool>,
}

/// Grades a submission and builds the record the caller should persist.
pub fn grade_attempt(context: AttemptContext, questions: &[Question]) -> GradedAttempt {
    let results: Vec<bool> = questions
        .iter()
        .map(|q| is_correct(q, context.quiz_type))
        .collect();
    let score = grade(questions, context.quiz_type);

    GradedAttempt {
        record: NewQuizRecord {
            topic: context.topic,
            quiz_type: context.quiz_type,
            difficulty: context.difficulty,
            user_id: context.user_id,
            correct_attempts: score.correct,
            wrong_attempts: score.wrong,
        },
        results,
    }
}
