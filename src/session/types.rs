//! Request-scoped data model for the session engine.
//!
//! Everything here is immutable once built. Upstream responses arrive in two
//! incompatible schema versions; `upstream::models` tags them into these
//! shapes at the ingestion boundary so the engine never probes optional
//! fields ad hoc.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One competitive match as the engine sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Upstream match identifier; absent on some historical payloads.
    pub id: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub map: Option<String>,
    pub players: Vec<MatchParticipant>,
    pub teams: Vec<TeamRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchParticipant {
    pub puuid: String,
    pub team_id: String,
    pub stats: Option<ParticipantStats>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantStats {
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub agent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team_id: String,
    pub outcome: TeamOutcome,
}

/// Per-team result, tagged by which upstream schema carried it.
/// A match carries exactly one variant across its teams, never a mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamOutcome {
    /// Explicit "has won" flag (schema with boolean results).
    Won(bool),
    /// Rounds won by this team (schema with round counters).
    Rounds(u32),
    /// Neither field was present; the match result cannot be trusted.
    Unknown,
}

/// Normalized rank-point change for one ranked match. Both upstream delta
/// schemas collapse into this shape before the aggregator runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RankDeltaEntry {
    pub at: DateTime<Utc>,
    pub change: i32,
}

/// Half-open session interval: `start` inclusive, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl SessionWindow {
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start && at < self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchResult {
    Win,
    Loss,
    Draw,
}

/// What a session boils down to.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionStats {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Result of the most recent resolvable in-window match, if any.
    pub last_match_result: Option<MatchResult>,
    /// RR change of the most recent in-window rank-delta entry, if any.
    pub last_match_rr: Option<i32>,
    /// Sum of all in-window rank-delta entries.
    pub total_rr_change: i32,
    /// Map of the match that produced `last_match_result`.
    pub last_map: Option<String>,
}

/// Points remaining toward the next rank goal. `rr_needed` is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankGoal {
    pub rr_needed: i32,
    pub goal: String,
}

/// Result of an ELO-based custom goal lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomGoal {
    pub rr_needed: i32,
    pub goal: String,
    pub achieved: bool,
}
