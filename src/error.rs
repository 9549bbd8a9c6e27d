use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuakeMapError {
    #[error("Invalid earthquake record '{id}': {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("Invalid map configuration: {message}")]
    InvalidConfig { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuakeMapError {
    pub fn invalid_record(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            id: id.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QuakeMapError>;
