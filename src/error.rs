//! Error types for the MLB stats query service

use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

/// Message returned to the caller when something escapes every handler.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON input")]
    InvalidJson,

    /// A request field failed validation. The message is shown to the caller verbatim.
    #[error("{message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unexpected upstream response: {context}")]
    UnexpectedShape { context: String },

    #[error("Player '{name}' not found")]
    PlayerNotFound { name: String },

    #[error("No statistics found for player '{name}'")]
    NoStatistics { name: String },

    #[error("No season statistics found for player '{name}'")]
    NoSeasonStatistics { name: String },

    #[error("No {stat_type} stats found for '{name}' in {season}")]
    NoSeasonStats {
        stat_type: String,
        name: String,
        season: i64,
    },

    #[error("Failed to retrieve stats for '{name}'")]
    RetrievalFailed { name: String },
}

impl StatsError {
    pub fn validation(message: impl Into<String>) -> Self {
        StatsError::Validation {
            message: message.into(),
        }
    }

    /// Request-shape problems detected before any upstream call.
    pub fn is_validation(&self) -> bool {
        matches!(self, StatsError::Validation { .. } | StatsError::InvalidJson)
    }

    /// Lookups that completed but found nothing usable. These are answered
    /// with a descriptive message and a successful exit.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StatsError::PlayerNotFound { .. }
                | StatsError::NoStatistics { .. }
                | StatsError::NoSeasonStatistics { .. }
                | StatsError::NoSeasonStats { .. }
                | StatsError::RetrievalFailed { .. }
        )
    }

    /// The message that may be shown to the caller. Upstream and internal
    /// failures collapse to [`GENERIC_ERROR_MESSAGE`].
    pub fn public_message(&self) -> String {
        if self.is_validation() || self.is_not_found() {
            self.to_string()
        } else {
            GENERIC_ERROR_MESSAGE.to_string()
        }
    }
}
