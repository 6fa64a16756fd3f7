use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("invalid user id: {0}")]
    InvalidUserId(String),
}
