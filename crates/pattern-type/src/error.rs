#[derive(Debug, thiserror::Error)]
pub enum PatternTypeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown pattern type: {0}")]
    UnknownPatternType(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PatternTypeError>;
