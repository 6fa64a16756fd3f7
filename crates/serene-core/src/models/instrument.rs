use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The self-assessment instruments the engine knows how to score.
///
/// Serialized with the topic name the result documents have always used
/// (`"anxiety"`, `"depression"`, `"stress"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum InstrumentKind {
    /// GAD-7, Generalized Anxiety Disorder scale.
    #[serde(rename = "anxiety")]
    Gad7,
    /// PHQ-9, Patient Health Questionnaire depression module.
    #[serde(rename = "depression")]
    Phq9,
    /// PSS-10, Perceived Stress Scale.
    #[serde(rename = "stress")]
    Pss10,
}

impl InstrumentKind {
    pub const ALL: [InstrumentKind; 3] = [Self::Gad7, Self::Phq9, Self::Pss10];

    /// Short identifier used in URLs (e.g., "gad7").
    pub fn id(self) -> &'static str {
        match self {
            Self::Gad7 => "gad7",
            Self::Phq9 => "phq9",
            Self::Pss10 => "pss10",
        }
    }

    /// Topic name stored in the `type` field of a result document.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Gad7 => "anxiety",
            Self::Phq9 => "depression",
            Self::Pss10 => "stress",
        }
    }

    /// Human-readable name (e.g., "GAD-7").
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Gad7 => "GAD-7",
            Self::Phq9 => "PHQ-9",
            Self::Pss10 => "PSS-10",
        }
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for InstrumentKind {
    type Err = CoreError;

    /// Accepts either the short id or the stored topic name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == needle || kind.wire_name() == needle)
            .ok_or_else(|| CoreError::UnknownInstrument(s.to_string()))
    }
}
