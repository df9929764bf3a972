use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown sex: {0}")]
    UnknownSex(String),
    #[error("unknown race: {0}")]
    UnknownRace(String),
    #[error("unknown metric: {0}")]
    UnknownMetric(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
