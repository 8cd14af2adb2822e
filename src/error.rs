//! Error types for the MLB stats client

use thiserror::Error;


pub type Result<T> = std::result::Result<T, MlbError>;

#[derive(Error, Debug)]
pub enum MlbError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Failed to parse id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid season: {value}")]
    InvalidSeason { value: String },

    #[error("Invalid date (expected YYYY-MM-DD): {value}")]
    InvalidDate { value: String },
}

impl MlbError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        MlbError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Transport, HTTP status or payload failures from either upstream API.
    pub fn is_data_fetch(&self) -> bool {
        matches!(self, MlbError::Http(_) | MlbError::Json(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, MlbError::NotFound { .. })
    }
}
