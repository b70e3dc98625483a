use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParcelaError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for ParcelaError {
    fn from(e: serde_json::Error) -> Self {
        ParcelaError::SerializationError(e.to_string())
    }
}
