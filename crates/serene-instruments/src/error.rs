use serene_core::models::instrument::InstrumentKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("{instrument} expects {expected} answers, got {actual}")]
    WrongAnswerCount {
        instrument: InstrumentKind,
        expected: usize,
        actual: usize,
    },

    #[error("{instrument} item {item}: answer {value} is outside range [0, {max}]")]
    InvalidAnswer {
        instrument: InstrumentKind,
        item: usize,
        value: u8,
        max: u8,
    },

    #[error("attempt is already completed; restart to answer again")]
    AttemptCompleted,

    #[error("already at the first item")]
    NoPreviousItem,
}
