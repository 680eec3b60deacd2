//! Error taxonomy: caller mistakes (400), missing players (404) and upstream
//! trouble (502) are kept apart so handlers never blur them into one 500.

use thiserror::Error;

/// Rejections of caller-supplied parameters. Always a 400, never a crash.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid resetTime format. Use HHMM format (e.g., 0800 for 8:00 AM).")]
    ResetTimeFormat,
    #[error("Invalid resetTime. Hours must be 00-23, minutes must be 00-59.")]
    ResetTimeRange,
    #[error("Invalid region. Valid regions: na, eu, ap, kr, latam, br")]
    Region,
    #[error("Invalid session start timestamp (must be positive unix seconds).")]
    SessionStart,
    #[error("Invalid leaderboard position.")]
    LeaderboardPosition,
}

/// Failures talking to the upstream stats API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream API returned status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("upstream API response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Everything a route handler can fail with.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Player not found or has no ranked data.")]
    PlayerNotFound,
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}
