//! Error types for the NBA fantasy sync jobs

use thiserror::Error;


pub type Result<T> = std::result::Result<T, SyncError>;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Failed to parse date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    #[error("Invalid season '{value}', expected the form 2025-26")]
    InvalidSeason { value: String },

    #[error("Result set '{name}' missing from response")]
    MissingResultSet { name: String },

    #[error("Column '{column}' missing from result set '{result_set}'")]
    MissingColumn { result_set: String, column: String },

    #[error("Invalid value for '{column}': {value}")]
    InvalidField { column: String, value: String },

    #[error("Player not found: {id}")]
    PlayerNotFound { id: i64 },

    #[error("User not found: {email}")]
    UserNotFound { email: String },

    #[error("User already exists: {email}")]
    UserExists { email: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Could not determine a location for the database")]
    NoDatabasePath,
}

impl From<anyhow::Error> for SyncError {
    fn from(err: anyhow::Error) -> Self {
        // Keep the concrete variant when the storage layer wrapped one of ours.
        match err.downcast::<SyncError>() {
            Ok(inner) => inner,
            Err(err) => match err.downcast::<rusqlite::Error>() {
                Ok(db) => SyncError::Database(db),
                Err(err) => SyncError::Storage {
                    message: format!("{err:#}"),
                },
            },
        }
    }
}
