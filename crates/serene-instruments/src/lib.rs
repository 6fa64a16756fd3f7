//! serene-instruments
//!
//! Self-assessment instrument definitions and the scoring engine. Pure data
//! and pure functions, with no storage or network dependency. Defines the items,
//! answer scale, reversal rules, and severity bands for each supported
//! instrument, plus the attempt state machine a UI session drives.

pub mod attempt;
pub mod error;
pub mod instruments;
pub mod scoring;

use serene_core::models::instrument::InstrumentKind;

use error::InstrumentError;
use scoring::{AssessmentDefinition, AssessmentResult, Interpretation};

/// Trait implemented by each self-assessment instrument.
pub trait Instrument: Send + Sync {
    fn kind(&self) -> InstrumentKind;

    /// Items, scale, and bands for this instrument.
    fn definition(&self) -> &AssessmentDefinition;

    /// Short identifier (e.g., "gad7").
    fn id(&self) -> &'static str {
        self.kind().id()
    }

    /// Human-readable name (e.g., "GAD-7").
    fn name(&self) -> &'static str {
        self.kind().display_name()
    }

    /// Check that `answers` has one on-scale value per item.
    fn validate_answers(&self, answers: &[u8]) -> Result<(), InstrumentError> {
        let definition = self.definition();
        if answers.len() != definition.items.len() {
            return Err(InstrumentError::WrongAnswerCount {
                instrument: self.kind(),
                expected: definition.items.len(),
                actual: answers.len(),
            });
        }
        if let Some((item, &value)) = answers
            .iter()
            .enumerate()
            .find(|(_, v)| !definition.is_on_scale(**v))
        {
            return Err(InstrumentError::InvalidAnswer {
                instrument: self.kind(),
                item,
                value,
                max: definition.scale_max(),
            });
        }
        Ok(())
    }

    /// Total score for a complete, valid set of answers.
    fn score(&self, answers: &[u8]) -> u32 {
        scoring::score(self.definition(), answers)
    }

    /// Severity label and description for a total score.
    fn interpret(&self, score: u32) -> Interpretation {
        scoring::interpret(self.definition(), score)
    }

    /// Validate, score, and interpret a full set of answers.
    fn evaluate(&self, answers: &[u8]) -> Result<AssessmentResult, InstrumentError> {
        self.validate_answers(answers)?;
        Ok(AssessmentResult::from_answers(self.definition(), answers))
    }
}

/// The instrument for `kind`.
pub fn instrument(kind: InstrumentKind) -> &'static dyn Instrument {
    match kind {
        InstrumentKind::Gad7 => &instruments::gad7::Gad7,
        InstrumentKind::Phq9 => &instruments::phq9::Phq9,
        InstrumentKind::Pss10 => &instruments::pss10::Pss10,
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<&'static dyn Instrument> {
    InstrumentKind::ALL.into_iter().map(instrument).collect()
}

/// Look up an instrument by short id or topic name.
pub fn get_instrument(id: &str) -> Result<&'static dyn Instrument, InstrumentError> {
    id.parse::<InstrumentKind>()
        .map(instrument)
        .map_err(|_| InstrumentError::UnknownInstrument(id.to_string()))
}
