// src/engine/mod.rs

//! Quiz lifecycle: parse generator text, grade answers, aggregate attempts.
//! Everything here is pure and synchronous.

pub mod analytics;
pub mod grading;
pub mod parser;

pub use analytics::{AggregateError, AggregateView, Tally, aggregate};
pub use grading::{AttemptContext, GradedAttempt, Score, grade, grade_attempt};
pub use parser::parse;
