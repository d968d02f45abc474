use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Invalid sleep schedule: hour {0} out of range 0..=23")]
    InvalidSchedule(u8),
}

pub type Result<T> = std::result::Result<T, PetError>;
