use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarginaliaError {
    /// Import input that is not valid JSON, or not the annotation record shape.
    /// Carries the underlying parser message.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

impl MarginaliaError {
    pub(crate) fn parse(err: serde_json::Error) -> Self {
        MarginaliaError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MarginaliaError>;
