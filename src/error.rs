use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum SwitchError {
    #[error("Switch setter failed: {0}")]
    SetterFailed(String),

    #[error("Unknown data point type: {0}")]
    UnknownDataPointType(u8),

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SwitchError>;
