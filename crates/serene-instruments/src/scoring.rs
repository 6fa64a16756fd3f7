use serde::{Deserialize, Serialize};
use serene_core::models::instrument::InstrumentKind;
use serene_core::models::record::AssessmentRecord;
use serene_core::models::user::UserId;
use ts_rs::TS;
use uuid::Uuid;

/// Label returned by [`interpret`] when no severity band contains the score.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// One choice on an instrument's answer scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub value: u8,
    pub label: String,
}

/// Closed score interval `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub low: u32,
    pub high: u32,
}

impl ScoreRange {
    pub fn contains(&self, score: u32) -> bool {
        (self.low..=self.high).contains(&score)
    }
}

/// A severity band: score interval plus the text shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub range: ScoreRange,
    pub label: String,
    pub description: String,
    /// Static guidance shown for this band, in display order.
    pub recommendations: Vec<String>,
}

/// Static description of an instrument: items, answer scale, and scoring rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentDefinition {
    pub kind: InstrumentKind,
    pub title: String,
    /// Stem shown above the items (e.g., "Over the last 2 weeks...").
    pub instructions: String,
    pub items: Vec<String>,
    pub answer_scale: Vec<AnswerOption>,
    /// Zero-based item indices scored as `scale_max - value`.
    pub reversed_items: Vec<usize>,
    /// Zero-based item indices where any non-zero answer needs follow-up.
    pub critical_items: Vec<usize>,
    /// Ascending, contiguous, and covering `[0, max_score]`.
    pub severity_bands: Vec<SeverityBand>,
}

impl AssessmentDefinition {
    pub fn scale_max(&self) -> u8 {
        self.answer_scale.iter().map(|o| o.value).max().unwrap_or(0)
    }

    pub fn max_score(&self) -> u32 {
        self.items.len() as u32 * u32::from(self.scale_max())
    }

    pub fn is_on_scale(&self, value: u8) -> bool {
        self.answer_scale.iter().any(|o| o.value == value)
    }

    pub fn band_for(&self, score: u32) -> Option<&SeverityBand> {
        self.severity_bands.iter().find(|b| b.range.contains(score))
    }
}

/// Label and description for a total score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub label: String,
    pub description: String,
}

impl Interpretation {
    fn unknown() -> Self {
        Self {
            label: UNKNOWN_LABEL.to_string(),
            description: String::new(),
        }
    }

    /// False when the score matched no band.
    pub fn is_known(&self) -> bool {
        self.label != UNKNOWN_LABEL
    }
}

/// Total score for a fully answered instrument.
///
/// `answers` must have one on-scale value per item. Reversed items
/// contribute `scale_max - value`.
pub fn score(definition: &AssessmentDefinition, answers: &[u8]) -> u32 {
    debug_assert_eq!(
        answers.len(),
        definition.items.len(),
        "{}: answer count does not match item count",
        definition.kind
    );
    let scale_max = definition.scale_max();

    answers
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            debug_assert!(value <= scale_max, "{}: answer {value} off scale", definition.kind);
            if definition.reversed_items.contains(&i) {
                u32::from(scale_max.saturating_sub(value))
            } else {
                u32::from(value)
            }
        })
        .sum()
}

/// Map a total score to its severity band.
///
/// A score outside every band yields the [`UNKNOWN_LABEL`] sentinel with an
/// empty description instead of an error, and logs a warning.
pub fn interpret(definition: &AssessmentDefinition, score: u32) -> Interpretation {
    match definition.band_for(score) {
        Some(band) => Interpretation {
            label: band.label.clone(),
            description: band.description.clone(),
        },
        None => {
            tracing::warn!(
                instrument = %definition.kind,
                score,
                max_score = definition.max_score(),
                "score matched no severity band"
            );
            Interpretation::unknown()
        }
    }
}

/// The outcome of a completed assessment.
///
/// Only produced by the engine ([`crate::Instrument::evaluate`] or a
/// completed [`crate::attempt::Attempt`]), so its score, label, and
/// recommendations always agree with the instrument's band table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentResult {
    #[serde(rename = "type")]
    kind: InstrumentKind,
    score: u32,
    label: String,
    description: String,
    recommendations: Vec<String>,
    follow_up_required: bool,
}

impl AssessmentResult {
    /// Score and interpret answers already checked against the definition.
    pub(crate) fn from_answers(definition: &AssessmentDefinition, answers: &[u8]) -> Self {
        let total = score(definition, answers);
        let interpretation = interpret(definition, total);
        let recommendations = definition
            .band_for(total)
            .map(|b| b.recommendations.clone())
            .unwrap_or_default();
        let follow_up_required = definition
            .critical_items
            .iter()
            .any(|&i| answers.get(i).is_some_and(|&v| v > 0));

        Self {
            kind: definition.kind,
            score: total,
            label: interpretation.label,
            description: interpretation.description,
            recommendations,
            follow_up_required,
        }
    }

    pub fn kind(&self) -> InstrumentKind {
        self.kind
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    /// True when a critical item (e.g., PHQ-9 item 9) was answered above zero.
    pub fn follow_up_required(&self) -> bool {
        self.follow_up_required
    }

    /// Build the persisted form of this result for `user_id`.
    pub fn to_record(&self, user_id: UserId, timestamp: jiff::Timestamp) -> AssessmentRecord {
        AssessmentRecord {
            id: Uuid::new_v4(),
            user_id,
            kind: self.kind,
            score: self.score,
            level: self.label.clone(),
            recommendations: self.recommendations.clone(),
            timestamp,
        }
    }
}
