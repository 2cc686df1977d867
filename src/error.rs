use thiserror::Error;

use crate::analysis::role::Role;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("Invalid Riot ID format. Use format: Name#TAG")]
    InvalidRiotId,

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("No matches found for this player")]
    NoMatches,

    #[error("Request budget exhausted, resets in {0} minutes")]
    BudgetExhausted(i64),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Per-match failures raised by the aggregation engine.
///
/// None of these abort a batch: the fold loop records them and moves on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("player not found in match {match_id}")]
    PlayerNotFound { match_id: String },

    #[error("no lane opponent for role {role} in match {match_id}")]
    NoOpponentFound { match_id: String, role: Role },

    #[error("malformed match {match_id}: {reason}")]
    MalformedMatch { match_id: String, reason: String },

    #[error("normalization attempted on a node with zero games")]
    DivisionGuard,
}

impl StatsError {
    pub fn malformed(match_id: impl Into<String>, reason: impl Into<String>) -> Self {
        StatsError::MalformedMatch {
            match_id: match_id.into(),
            reason: reason.into(),
        }
    }
}
