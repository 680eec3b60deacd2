//! Process-lifetime ranked-leaderboard snapshot.
//!
//! Loaded once at start-up from the file the leaderboard generator writes,
//! optionally replaced by a live refresh later. Read-mostly: request
//! handlers take an owned copy and never mutate it.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::sync::RwLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(rename = "leaderboardRank")]
    pub position: u32,
    #[serde(rename = "rankedRating")]
    pub ranked_rating: i32,
    #[serde(rename = "numberOfWins", default)]
    pub wins: u32,
    /// Absent for players who opted out of public profiles.
    #[serde(rename = "gameName", default)]
    pub game_name: Option<String>,
    #[serde(rename = "tagLine", default)]
    pub tag_line: Option<String>,
    #[serde(default)]
    pub puuid: Option<String>,
}

/// Generated snapshot file shape: `{"data": {"players": [...]}}`.
#[derive(Debug, Deserialize)]
struct SnapshotFile {
    data: SnapshotData,
}

#[derive(Debug, Deserialize)]
struct SnapshotData {
    #[serde(default)]
    players: Vec<LeaderboardEntry>,
}

static SNAPSHOT: Lazy<RwLock<Vec<LeaderboardEntry>>> = Lazy::new(|| RwLock::new(Vec::new()));

/// Load the static snapshot file and replace the in-memory copy.
/// Returns the number of entries loaded.
pub fn load_from_file(path: &str) -> anyhow::Result<usize> {
    let raw = fs::read_to_string(path)?;
    // Accept either the generator's wrapper object or a bare array.
    let mut players = match serde_json::from_str::<SnapshotFile>(&raw) {
        Ok(file) => file.data.players,
        Err(_) => serde_json::from_str::<Vec<LeaderboardEntry>>(&raw)?,
    };
    players.sort_by_key(|e| e.position);
    let count = players.len();
    replace(players);
    Ok(count)
}

/// Swap in a fresh ordered snapshot (start-up load or live refresh).
pub fn replace(mut entries: Vec<LeaderboardEntry>) {
    entries.sort_by_key(|e| e.position);
    if let Ok(mut guard) = SNAPSHOT.write() {
        *guard = entries;
    }
}

/// Owned copy of the full ordered list for one request's computation.
pub fn snapshot() -> Vec<LeaderboardEntry> {
    SNAPSHOT.read().map(|g| g.clone()).unwrap_or_default()
}

/// Entry at a 1-based leaderboard position, if present in the snapshot.
pub fn find_by_position(position: u32) -> Option<LeaderboardEntry> {
    SNAPSHOT
        .read()
        .ok()?
        .iter()
        .find(|e| e.position == position)
        .cloned()
}
