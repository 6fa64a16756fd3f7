use crate::scoring::{AnswerOption, ScoreRange, SeverityBand};

pub mod gad7;
pub mod phq9;
pub mod pss10;

/// Frequency scale shared by GAD-7 and PHQ-9.
fn two_week_frequency_scale() -> Vec<AnswerOption> {
    answer_scale(&[
        (0, "Not at all"),
        (1, "Several days"),
        (2, "More than half the days"),
        (3, "Nearly every day"),
    ])
}

fn answer_scale(options: &[(u8, &str)]) -> Vec<AnswerOption> {
    options
        .iter()
        .map(|(value, label)| AnswerOption {
            value: *value,
            label: label.to_string(),
        })
        .collect()
}

fn band(low: u32, high: u32, label: &str, description: &str, recommendations: &[&str]) -> SeverityBand {
    SeverityBand {
        range: ScoreRange { low, high },
        label: label.to_string(),
        description: description.to_string(),
        recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
    }
}
