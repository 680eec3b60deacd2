//! Defensive models for upstream responses.
//!
//! The upstream API speaks at least two schema versions at once: match
//! payloads with nested `players.all_players` / `teams.red|blue` maps
//! (`has_won`, `rounds_won`) versus flat lists (`won`, `rounds.won`), and
//! rank-delta entries stamped either `date` + `mmr_change` or `date_raw` +
//! `mmr_change_to_last_game`. Everything is read optionally here and tagged
//! into the engine's types at this boundary, so the session engine never
//! probes loose fields itself.

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::leaderboard::LeaderboardEntry;
use crate::session::types::{
    MatchParticipant, MatchRecord, ParticipantStats, RankDeltaEntry, TeamOutcome, TeamRecord,
};

/// Standard upstream wrapper: `{"status": ..., "data": ...}`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Error body shape the upstream uses on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct RawError {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawAccount {
    pub puuid: Option<Uuid>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawMmr {
    #[serde(default)]
    pub current_data: Option<RawMmrCurrent>,
}

#[derive(Debug, Deserialize)]
pub struct RawMmrCurrent {
    #[serde(default)]
    pub currenttier: Option<u8>,
    #[serde(default)]
    pub ranking_in_tier: Option<i32>,
    #[serde(default)]
    pub elo: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawMatch {
    #[serde(default)]
    pub metadata: Option<RawMetadata>,
    #[serde(default)]
    pub players: Option<RawPlayers>,
    #[serde(default)]
    pub teams: Option<RawTeams>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawMetadata {
    #[serde(default, alias = "matchid", alias = "match_id")]
    pub id: Option<String>,
    #[serde(default, alias = "game_start_iso")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub map: Option<RawMap>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawMap {
    Name(String),
    Object { name: Option<String> },
}

impl RawMap {
    fn into_name(self) -> Option<String> {
        match self {
            RawMap::Name(name) => Some(name),
            RawMap::Object { name } => name,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawPlayers {
    Flat(Vec<RawPlayer>),
    Nested { all_players: Vec<RawPlayer> },
}

#[derive(Debug, Deserialize)]
pub struct RawPlayer {
    pub puuid: Option<String>,
    #[serde(default, alias = "team")]
    pub team_id: Option<String>,
    #[serde(default)]
    pub stats: Option<RawStats>,
    #[serde(default, alias = "character")]
    pub agent: Option<RawMap>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawStats {
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawTeams {
    List(Vec<RawTeam>),
    Sides {
        #[serde(default)]
        red: Option<RawTeamSide>,
        #[serde(default)]
        blue: Option<RawTeamSide>,
    },
}

#[derive(Debug, Deserialize)]
pub struct RawTeam {
    pub team_id: Option<String>,
    #[serde(default, alias = "has_won")]
    pub won: Option<bool>,
    #[serde(default)]
    pub rounds: Option<RawRounds>,
    #[serde(default)]
    pub rounds_won: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct RawRounds {
    #[serde(default)]
    pub won: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct RawTeamSide {
    #[serde(default)]
    pub has_won: Option<bool>,
    #[serde(default)]
    pub rounds_won: Option<u32>,
}

impl RawMatch {
    /// Collapse whichever schema this match arrived in into the engine shape.
    pub fn into_record(self) -> MatchRecord {
        let meta = self.metadata.unwrap_or_default();

        let players = match self.players {
            Some(RawPlayers::Flat(list)) => list,
            Some(RawPlayers::Nested { all_players }) => all_players,
            None => Vec::new(),
        }
        .into_iter()
        .filter_map(RawPlayer::into_participant)
        .collect();

        let teams = match self.teams {
            Some(RawTeams::List(list)) => {
                list.into_iter().filter_map(RawTeam::into_team).collect()
            }
            Some(RawTeams::Sides { red, blue }) => {
                let mut out = Vec::new();
                if let Some(side) = red {
                    out.push(side.into_team("Red"));
                }
                if let Some(side) = blue {
                    out.push(side.into_team("Blue"));
                }
                out
            }
            None => Vec::new(),
        };

        MatchRecord {
            id: meta.id,
            started_at: meta.started_at,
            map: meta.map.and_then(RawMap::into_name),
            players,
            teams,
        }
    }
}

impl RawPlayer {
    /// Participants without an identity or a team cannot be attributed and
    /// are dropped here rather than guessed at later.
    fn into_participant(self) -> Option<MatchParticipant> {
        let puuid = self.puuid?;
        let team_id = self.team_id?;
        let agent = self.agent.and_then(RawMap::into_name);
        Some(MatchParticipant {
            puuid,
            team_id,
            stats: self.stats.map(|s| ParticipantStats {
                kills: s.kills,
                deaths: s.deaths,
                assists: s.assists,
                agent,
            }),
        })
    }
}

impl RawTeam {
    fn into_team(self) -> Option<TeamRecord> {
        let team_id = self.team_id?;
        let outcome = match (self.won, self.rounds.and_then(|r| r.won).or(self.rounds_won)) {
            (Some(flag), _) => TeamOutcome::Won(flag),
            (None, Some(rounds)) => TeamOutcome::Rounds(rounds),
            (None, None) => TeamOutcome::Unknown,
        };
        Some(TeamRecord { team_id, outcome })
    }
}

impl RawTeamSide {
    fn into_team(self, team_id: &str) -> TeamRecord {
        let outcome = match (self.has_won, self.rounds_won) {
            (Some(flag), _) => TeamOutcome::Won(flag),
            (None, Some(rounds)) => TeamOutcome::Rounds(rounds),
            (None, None) => TeamOutcome::Unknown,
        };
        TeamRecord {
            team_id: team_id.to_string(),
            outcome,
        }
    }
}

/// Rank-delta entry in either upstream stamping.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawRankDelta {
    /// Absolute timestamp + points change for that match.
    ThisMatch {
        date: DateTime<Utc>,
        mmr_change: i32,
    },
    /// Epoch seconds + points change relative to the previous game.
    ToLastGame {
        date_raw: i64,
        mmr_change_to_last_game: i32,
    },
}

impl RawRankDelta {
    /// Tag into the single normalized shape the aggregator consumes.
    /// Entries with an unrepresentable epoch are dropped.
    pub fn normalize(self) -> Option<RankDeltaEntry> {
        match self {
            RawRankDelta::ThisMatch { date, mmr_change } => Some(RankDeltaEntry {
                at: date,
                change: mmr_change,
            }),
            RawRankDelta::ToLastGame {
                date_raw,
                mmr_change_to_last_game,
            } => Utc.timestamp_opt(date_raw, 0).single().map(|at| RankDeltaEntry {
                at,
                change: mmr_change_to_last_game,
            }),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RawLeaderboard {
    #[serde(default)]
    pub players: Vec<LeaderboardEntry>,
}
