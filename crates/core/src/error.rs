#[derive(Debug, thiserror::Error)]
pub enum RoastError {
    #[error("no todos to submit")]
    EmptyBatch,
    #[error("todos must be a non-empty array")]
    InvalidBatch,
    #[error("request body is null")]
    MalformedBody,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("provider error: {0}")]
    Provider(#[from] roaster_anthropic::ProviderError),
    #[error("failed to read todo handoff: {0}")]
    Handoff(serde_json::Error),
    #[error("failed to write export file: {0}")]
    Export(std::io::Error),
}

pub type RoastResult<T> = std::result::Result<T, RoastError>;
