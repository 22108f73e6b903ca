// src/models/dashboard.rs

use serde::Serialize;

use crate::engine::analytics::{AggregateView, Tally};

const CORRECT_COLOR: &str = "green";
const WRONG_COLOR: &str = "red";
const DIFFICULTY_COLOR: &str = "skyblue";

/// Either one color for the whole dataset or one per data point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ColorHint {
    Single(String),
    PerPoint(Vec<String>),
}

/// A single series in a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorHint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<ColorHint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

impl Dataset {
    fn bar(label: &str, data: Vec<u64>, color: &str) -> Self {
        Self {
            label: Some(label.to_string()),
            data,
            background_color: Some(ColorHint::Single(color.to_string())),
            border_color: None,
            fill: None,
        }
    }

    fn line(label: &str, data: Vec<u64>, color: &str) -> Self {
        Self {
            label: Some(label.to_string()),
            data,
            background_color: None,
            border_color: Some(ColorHint::Single(color.to_string())),
            fill: Some(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Response body of the dashboard endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    /// Overall correct vs wrong.
    pub pie_chart_data: ChartData,
    /// Correct and wrong per topic.
    pub bar_chart_data: ChartData,
    /// Attempts per difficulty.
    pub difficulty_bar_chart_data: ChartData,
    /// Correct and wrong per day.
    pub line_chart_data: ChartData,
}

fn split<'a>(tallies: impl Iterator<Item = &'a Tally>) -> (Vec<u64>, Vec<u64>) {
    tallies.map(|t| (t.correct, t.wrong)).unzip()
}

impl From<&AggregateView> for DashboardData {
    fn from(view: &AggregateView) -> Self {
        let pie_chart_data = ChartData {
            labels: vec!["Correct".to_string(), "Wrong".to_string()],
            datasets: vec![Dataset {
                label: None,
                data: vec![view.outcome.correct, view.outcome.wrong],
                background_color: Some(ColorHint::PerPoint(vec![
                    CORRECT_COLOR.to_string(),
                    WRONG_COLOR.to_string(),
                ])),
                border_color: None,
                fill: None,
            }],
        };

        let (correct, wrong) = split(view.by_topic.values());
        let bar_chart_data = ChartData {
            labels: view.by_topic.keys().cloned().collect(),
            datasets: vec![
                Dataset::bar("Correct", correct, CORRECT_COLOR),
                Dataset::bar("Wrong", wrong, WRONG_COLOR),
            ],
        };

        let difficulty_bar_chart_data = ChartData {
            labels: view
                .by_difficulty
                .keys()
                .map(|d| d.as_str().to_string())
                .collect(),
            datasets: vec![Dataset::bar(
                "Questions",
                view.by_difficulty.values().copied().collect(),
                DIFFICULTY_COLOR,
            )],
        };

        let (correct, wrong) = split(view.by_day.values());
        let line_chart_data = ChartData {
            labels: view
                .by_day
                .keys()
                .map(|day| day.format("%Y-%m-%d").to_string())
                .collect(),
            datasets: vec![
                Dataset::line("Correct", correct, CORRECT_COLOR),
                Dataset::line("Wrong", wrong, WRONG_COLOR),
            ],
        };

        Self {
            pie_chart_data,
            bar_chart_data,
            difficulty_bar_chart_data,
            line_chart_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::analytics::aggregate,
        models::{
            question::QuestionType,
            quiz_record::{AttemptSummary, Difficulty},
        },
    };
    use chrono::{TimeZone, Utc};

    fn records() -> Vec<AttemptSummary> {
        let make = |topic: &str, difficulty, correct, wrong, day| AttemptSummary {
            topic: topic.to_string(),
            quiz_type: QuestionType::TrueFalse,
            difficulty,
            user_id: "bob".to_string(),
            correct_attempts: correct,
            wrong_attempts: wrong,
            created_at: Utc.with_ymd_and_hms(2024, 1, day, 8, 0, 0).unwrap(),
        };
        vec![
            make("History", Difficulty::Hard, 2, 3, 10),
            make("Math", Difficulty::Easy, 4, 1, 10),
            make("History", Difficulty::Hard, 5, 0, 12),
        ]
    }

    #[test]
    fn renders_all_four_charts() {
        let view = aggregate(&records()).unwrap();
        let data = DashboardData::from(&view);

        assert_eq!(data.pie_chart_data.datasets[0].data, vec![11, 4]);

        assert_eq!(data.bar_chart_data.labels, vec!["History", "Math"]);
        assert_eq!(data.bar_chart_data.datasets[0].data, vec![7, 4]);
        assert_eq!(data.bar_chart_data.datasets[1].data, vec![3, 1]);

        assert_eq!(data.difficulty_bar_chart_data.labels, vec!["hard", "easy"]);
        assert_eq!(data.difficulty_bar_chart_data.datasets[0].data, vec![2, 1]);

        assert_eq!(data.line_chart_data.labels, vec!["2024-01-10", "2024-01-12"]);
        assert_eq!(data.line_chart_data.datasets[0].data, vec![6, 5]);
        assert_eq!(data.line_chart_data.datasets[1].data, vec![4, 0]);
    }

    #[test]
    fn serializes_with_chart_field_names() {
        let view = aggregate(&records()).unwrap();
        let json = serde_json::to_value(DashboardData::from(&view)).unwrap();

        assert_eq!(json["pieChartData"]["labels"][0], "Correct");
        assert_eq!(json["pieChartData"]["datasets"][0]["backgroundColor"][1], "red");
        assert!(json["pieChartData"]["datasets"][0].get("label").is_none());
        assert_eq!(json["barChartData"]["datasets"][1]["label"], "Wrong");
        assert_eq!(json["difficultyBarChartData"]["datasets"][0]["backgroundColor"], "skyblue");
        assert_eq!(json["lineChartData"]["datasets"][0]["borderColor"], "green");
        assert_eq!(json["lineChartData"]["datasets"][0]["fill"], false);
    }
}
