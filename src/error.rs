use thiserror::Error;

pub type LabResult<T> = Result<T, LabError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LabError {
    #[error("point index out of range: index={index}, len={len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unknown preset: `{0}`")]
    UnknownPreset(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
