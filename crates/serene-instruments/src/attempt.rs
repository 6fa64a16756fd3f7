//! One user's run through an instrument, one item at a time.

use std::fmt;

use serene_core::models::instrument::InstrumentKind;

use crate::error::InstrumentError;
use crate::scoring::AssessmentResult;
use crate::{instrument, Instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptState {
    InProgress { current_index: usize },
    Completed(AssessmentResult),
}

/// An in-progress or completed run through an instrument.
///
/// Starts at the first item with every answer unset. Answering the last
/// item scores the attempt and moves it to [`AttemptState::Completed`],
/// after which only [`Attempt::restart`] is allowed.
pub struct Attempt {
    instrument: &'static dyn Instrument,
    answers: Vec<Option<u8>>,
    state: AttemptState,
}

impl Attempt {
    pub fn new(instrument: &'static dyn Instrument) -> Self {
        Self {
            instrument,
            answers: vec![None; instrument.definition().items.len()],
            state: AttemptState::InProgress { current_index: 0 },
        }
    }

    pub fn for_kind(kind: InstrumentKind) -> Self {
        Self::new(instrument(kind))
    }

    pub fn kind(&self) -> InstrumentKind {
        self.instrument.kind()
    }

    pub fn state(&self) -> &AttemptState {
        &self.state
    }

    pub fn answers(&self) -> &[Option<u8>] {
        &self.answers
    }

    /// Index of the item being shown, or `None` once completed.
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            AttemptState::InProgress { current_index } => Some(current_index),
            AttemptState::Completed(_) => None,
        }
    }

    /// Prompt text of the item being shown.
    pub fn current_item(&self) -> Option<&str> {
        self.current_index()
            .and_then(|i| self.instrument.definition().items.get(i))
            .map(String::as_str)
    }

    /// `(answered, total)` item counts.
    pub fn progress(&self) -> (usize, usize) {
        let answered = self.answers.iter().filter(|a| a.is_some()).count();
        (answered, self.answers.len())
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        match &self.state {
            AttemptState::Completed(result) => Some(result),
            AttemptState::InProgress { .. } => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, AttemptState::Completed(_))
    }

    /// Record `value` for the current item and advance.
    ///
    /// On the last item this scores the attempt. An off-scale value leaves
    /// the attempt unchanged.
    pub fn answer(&mut self, value: u8) -> Result<&AttemptState, InstrumentError> {
        let AttemptState::InProgress { current_index } = self.state else {
            return Err(InstrumentError::AttemptCompleted);
        };

        let definition = self.instrument.definition();
        if !definition.is_on_scale(value) {
            return Err(InstrumentError::InvalidAnswer {
                instrument: self.kind(),
                item: current_index,
                value,
                max: definition.scale_max(),
            });
        }

        self.answers[current_index] = Some(value);

        if current_index + 1 < self.answers.len() {
            self.state = AttemptState::InProgress {
                current_index: current_index + 1,
            };
        } else {
            let answers = self.completed_answers();
            let result = self.instrument.evaluate(&answers)?;
            self.state = AttemptState::Completed(result);
        }

        Ok(&self.state)
    }

    /// Step back one item, keeping the answer already given there.
    /// Returns the new current index.
    pub fn previous(&mut self) -> Result<usize, InstrumentError> {
        match self.state {
            AttemptState::Completed(_) => Err(InstrumentError::AttemptCompleted),
            AttemptState::InProgress { current_index: 0 } => Err(InstrumentError::NoPreviousItem),
            AttemptState::InProgress { current_index } => {
                let index = current_index - 1;
                self.state = AttemptState::InProgress {
                    current_index: index,
                };
                Ok(index)
            }
        }
    }

    /// Clear every answer and return to the first item.
    pub fn restart(&mut self) {
        self.answers.iter_mut().for_each(|a| *a = None);
        self.state = AttemptState::InProgress { current_index: 0 };
    }

    /// Answers given so far. Any gap shortens the slice, which `evaluate`
    /// rejects as a wrong answer count.
    fn completed_answers(&self) -> Vec<u8> {
        self.answers.iter().flatten().copied().collect()
    }
}

impl fmt::Debug for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attempt")
            .field("instrument", &self.kind())
            .field("answers", &self.answers)
            .field("state", &self.state)
            .finish()
    }
}
