// src/engine/parser.rs

//! Line-oriented parser for generator output.
//!
//! The generator is asked for text shaped like:
//!
//! ```text
//! Q1. What is 2+2?
//! A) 3
//! B) 4
//! C) 5
//! D) 6
//! Answer: B
//! ```
//!
//! Nothing enforces that shape, so parsing never fails. Lines that match no
//! marker are dropped, and a question is only emitted once it has a prompt.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::question::{Question, QuestionType};

/// `Q`, an optional number, then one of `.`, `)` or `:`.
static QUESTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Q\d*[.):]\s*(.*)$").expect("valid question regex"));

/// One of the four option labels followed by `)`.
static OPTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-D])\)\s*(.*)$").expect("valid option regex"));

const ANSWER_MARKER: &str = "Answer:";
const OPTION_LABELS: &str = "ABCD";

/// What a single non-blank line contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line<'a> {
    Question(&'a str),
    Choice(&'a str),
    Answer(&'a str),
    Noise,
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        if let Some(caps) = QUESTION_MARKER.captures(line) {
            let rest = caps.get(1).map_or("", |m| m.as_str());
            return Line::Question(rest.trim());
        }
        if let Some(caps) = OPTION_MARKER.captures(line) {
            let rest = caps.get(2).map_or("", |m| m.as_str());
            return Line::Choice(rest.trim());
        }
        if let Some(rest) = line.strip_prefix(ANSWER_MARKER) {
            return Line::Answer(rest.trim());
        }
        Line::Noise
    }
}

/// Completed questions plus the one still being accumulated.
#[derive(Debug, Default)]
struct ParseState {
    done: Vec<Question>,
    current: Question,
}

impl ParseState {
    fn step(mut self, line: Line<'_>, quiz_type: QuestionType) -> Self {
        match line {
            Line::Question(prompt) => {
                self.flush();
                self.current = Question::new(prompt);
            }
            Line::Choice(text) => self.current.options.push(text.to_string()),
            Line::Answer(answer) => resolve_answer(&mut self.current, answer, quiz_type),
            Line::Noise => {}
        }
        self
    }

    /// Moves the accumulator to `done` if it has a prompt; otherwise drops it.
    fn flush(&mut self) {
        let current = std::mem::take(&mut self.current);
        if !current.prompt.is_empty() {
            self.done.push(current);
        }
    }

    fn finish(mut self) -> Vec<Question> {
        self.flush();
        self.done
    }
}

fn resolve_answer(question: &mut Question, answer: &str, quiz_type: QuestionType) {
    match quiz_type {
        QuestionType::MultipleChoice => {
            if let Some(option) = option_index(answer).and_then(|idx| question.options.get(idx)) {
                question.correct_answer = option.clone();
            }
        }
        QuestionType::TrueFalse => {
            question.options = vec!["True".to_string(), "False".to_string()];
            question.correct_answer = answer.to_string();
        }
        QuestionType::FillInBlank => question.correct_answer = answer.to_string(),
    }
}

/// Maps a single answer letter (`A`..`D`) to its option position.
fn option_index(answer: &str) -> Option<usize> {
    let mut chars = answer.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => OPTION_LABELS.find(letter),
        _ => None,
    }
}

/// Parses generator output into questions, best effort.
pub fn parse(raw_text: &str, quiz_type: QuestionType) -> Vec<Question> {
    raw_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Line::classify)
        .fold(ParseState::default(), |state, line| state.step(line, quiz_type))
        .finish()
}
