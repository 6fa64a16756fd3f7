//! Aggregation over a user's stored assessment records for history views.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::instrument::InstrumentKind;
use crate::models::record::AssessmentRecord;

/// Direction of the latest score relative to the one before it.
///
/// All supported instruments score symptoms, so a lower score is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Trend {
    FirstResult,
    Improving,
    Stable,
    Worsening,
}

impl Trend {
    fn between(previous: u32, latest: u32) -> Self {
        match latest.cmp(&previous) {
            std::cmp::Ordering::Less => Self::Improving,
            std::cmp::Ordering::Equal => Self::Stable,
            std::cmp::Ordering::Greater => Self::Worsening,
        }
    }
}

/// Per-instrument digest of a user's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InstrumentSummary {
    #[serde(rename = "type")]
    pub kind: InstrumentKind,
    pub count: usize,
    pub latest_score: u32,
    pub latest_level: String,
    pub latest_at: jiff::Timestamp,
    pub previous_score: Option<u32>,
    pub trend: Trend,
}

/// A single point on a score-over-time chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScorePoint {
    pub timestamp: jiff::Timestamp,
    pub score: u32,
}

/// Summarize records per instrument, in [`InstrumentKind::ALL`] order.
/// Instruments the user never completed are omitted.
pub fn summarize(records: &[AssessmentRecord]) -> Vec<InstrumentSummary> {
    InstrumentKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let mut taken: Vec<&AssessmentRecord> =
                records.iter().filter(|r| r.kind == kind).collect();
            taken.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

            let latest = taken.first()?;
            let previous_score = taken.get(1).map(|r| r.score);
            let trend = previous_score
                .map(|prev| Trend::between(prev, latest.score))
                .unwrap_or(Trend::FirstResult);

            Some(InstrumentSummary {
                kind,
                count: taken.len(),
                latest_score: latest.score,
                latest_level: latest.level.clone(),
                latest_at: latest.timestamp,
                previous_score,
                trend,
            })
        })
        .collect()
}

/// Oldest-first score points for one instrument.
pub fn series(records: &[AssessmentRecord], kind: InstrumentKind) -> Vec<ScorePoint> {
    let mut points: Vec<ScorePoint> = records
        .iter()
        .filter(|r| r.kind == kind)
        .map(|r| ScorePoint {
            timestamp: r.timestamp,
            score: r.score,
        })
        .collect();
    points.sort_by_key(|p| p.timestamp);
    points
}
