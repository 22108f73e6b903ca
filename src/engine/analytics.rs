// src/engine/analytics.rs

//! Aggregation of a user's stored attempts into dashboard statistics.
//!
//! Totals do not depend on input order. Breakdown keys keep first-seen
//! order, which becomes the chart label order.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use crate::models::quiz_record::{AttemptSummary, Difficulty};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AggregateError {
    /// There is nothing to aggregate. Callers show an empty state.
    #[error("no quiz data found")]
    NoData,
}

/// Correct and wrong answer counts summed over some set of attempts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub correct: u64,
    pub wrong: u64,
}

impl Tally {
    fn add(&mut self, attempt: &AttemptSummary) {
        self.correct += u64::from(attempt.correct_attempts);
        self.wrong += u64::from(attempt.wrong_attempts);
    }
}

/// Four independent views over the same attempts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateView {
    pub outcome: Tally,
    pub by_topic: IndexMap<String, Tally>,
    /// Number of attempts (not questions) per difficulty.
    pub by_difficulty: IndexMap<Difficulty, u64>,
    /// Keyed by the UTC calendar date of `created_at`.
    pub by_day: IndexMap<NaiveDate, Tally>,
}

/// Aggregates `records` in a single pass.
pub fn aggregate(records: &[AttemptSummary]) -> Result<AggregateView, AggregateError> {
    if records.is_empty() {
        return Err(AggregateError::NoData);
    }

    let mut view = AggregateView {
        outcome: Tally::default(),
        by_topic: IndexMap::new(),
        by_difficulty: IndexMap::new(),
        by_day: IndexMap::new(),
    };

    for record in records {
        view.outcome.add(record);
        view.by_topic
            .entry(record.topic.clone())
            .or_default()
            .add(record);
        *view.by_difficulty.entry(record.difficulty).or_insert(0) += 1;
        view.by_day
            .entry(record.created_at.date_naive())
            .or_default()
            .add(record);
    }

    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::QuestionType;
    use chrono::{DateTime, TimeZone, Utc};

    fn attempt(
        topic: &str,
        difficulty: Difficulty,
        correct: u32,
        wrong: u32,
        created_at: DateTime<Utc>,
    ) -> AttemptSummary {
        AttemptSummary {
            topic: topic.into(),
            quiz_type: QuestionType::MultipleChoice,
            difficulty,
            user_id: "alice".into(),
            correct_attempts: correct,
            wrong_attempts: wrong,
            created_at,
        }
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, hour, 30, 0).unwrap()
    }

    fn sample() -> Vec<AttemptSummary> {
        vec![
            attempt("Biology", Difficulty::Medium, 3, 2, at(1, 9)),
            attempt("Physics", Difficulty::Hard, 1, 4, at(1, 23)),
            attempt("Biology", Difficulty::Easy, 5, 0, at(2, 0)),
            attempt("Chemistry", Difficulty::Medium, 2, 3, at(4, 12)),
        ]
    }

    #[test]
    fn empty_input_is_reported_distinctly() {
        assert_eq!(aggregate(&[]), Err(AggregateError::NoData));
    }

    #[test]
    fn outcome_sums_every_attempt() {
        let view = aggregate(&sample()).unwrap();
        assert_eq!(view.outcome, Tally { correct: 11, wrong: 9 });
    }

    #[test]
    fn topics_keep_first_seen_order() {
        let view = aggregate(&sample()).unwrap();
        let topics: Vec<_> = view.by_topic.keys().cloned().collect();
        assert_eq!(topics, vec!["Biology", "Physics", "Chemistry"]);
        assert_eq!(view.by_topic["Biology"], Tally { correct: 8, wrong: 2 });
    }

    #[test]
    fn difficulty_counts_attempts_not_questions() {
        let view = aggregate(&sample()).unwrap();
        let pairs: Vec<_> = view.by_difficulty.iter().map(|(d, n)| (*d, *n)).collect();
        assert_eq!(
            pairs,
            vec![(Difficulty::Medium, 2), (Difficulty::Hard, 1), (Difficulty::Easy, 1)]
        );
    }

    #[test]
    fn same_utc_day_collapses_regardless_of_time() {
        let view = aggregate(&sample()).unwrap();
        let days: Vec<_> = view.by_day.keys().map(|d| d.to_string()).collect();
        assert_eq!(days, vec!["2024-03-01", "2024-03-02", "2024-03-04"]);
        assert_eq!(view.by_day[0], Tally { correct: 4, wrong: 6 });
    }

    #[test]
    fn day_key_uses_utc_not_offset_local_time() {
        let late = DateTime::parse_from_rfc3339("2024-03-01T23:30:00-05:00")
            .unwrap()
            .with_timezone(&Utc);
        let view = aggregate(&[attempt("Biology", Difficulty::Easy, 1, 0, late)]).unwrap();
        assert_eq!(view.by_day.keys().next().unwrap().to_string(), "2024-03-02");
    }

    #[test]
    fn totals_are_conserved_across_views_and_orderings() {
        let records = sample();
        let mut reversed = records.clone();
        reversed.reverse();

        for input in [records.clone(), reversed] {
            let view = aggregate(&input).unwrap();

            let topic_sum = view.by_topic.values().fold(Tally::default(), |acc, t| Tally {
                correct: acc.correct + t.correct,
                wrong: acc.wrong + t.wrong,
            });
            let day_sum = view.by_day.values().fold(Tally::default(), |acc, t| Tally {
                correct: acc.correct + t.correct,
                wrong: acc.wrong + t.wrong,
            });
            let attempts: u64 = view.by_difficulty.values().sum();

            assert_eq!(topic_sum, view.outcome);
            assert_eq!(day_sum, view.outcome);
            assert_eq!(attempts, input.len() as u64);
            assert_eq!(view.outcome, Tally { correct: 11, wrong: 9 });
        }
    }

    #[test]
    fn zero_counts_are_still_data() {
        let view = aggregate(&[attempt("Empty", Difficulty::Easy, 0, 0, at(5, 5))]).unwrap();
        assert_eq!(view.outcome, Tally::default());
        assert_eq!(view.by_topic.len(), 1);
    }
}
