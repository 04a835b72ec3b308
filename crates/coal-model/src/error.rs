use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown phi observable prefix: {0}")]
    UnknownObservable(String),
    #[error("unknown pair combination label: {0}")]
    UnknownPairCombo(String),
    #[error("malformed histogram name: {0}")]
    MalformedHistogramName(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
