//! Runtime configuration for the Valorank server.

use chrono_tz::Tz;
use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Settings {
    /// Bind address for the HTTP server.
    pub server_addr: String,
    /// Base URL of the upstream stats API.
    pub upstream_base_url: String,
    /// API key sent in the Authorization header upstream.
    pub upstream_api_key: String,
    /// Reference timezone for the daily session reset.
    pub session_tz: Tz,
    /// Upstream response-cache TTL (seconds).
    pub cache_ttl: u64,
    /// Path to the generated static leaderboard snapshot.
    pub leaderboard_path: String,
    /// How many matches to pull when computing session stats.
    pub history_depth: usize,
}

impl Settings {
    fn from_env() -> Self {
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".into());

        let upstream_base_url =
            env::var("UPSTREAM_BASE_URL").unwrap_or_else(|_| "https://api.henrikdev.xyz".into());

        let upstream_api_key = env::var("UPSTREAM_API_KEY").unwrap_or_default();

        let session_tz = env::var("SESSION_TIMEZONE")
            .ok()
            .and_then(|v| v.parse::<Tz>().ok())
            .unwrap_or(chrono_tz::Europe::Warsaw);

        let cache_ttl = env::var("CACHE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(300); // 5 min default

        let leaderboard_path =
            env::var("LEADERBOARD_PATH").unwrap_or_else(|_| "leaderboard.json".into());

        let history_depth = env::var("MATCH_HISTORY_DEPTH")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(25);

        Settings {
            server_addr,
            upstream_base_url,
            upstream_api_key,
            session_tz,
            cache_ttl,
            leaderboard_path,
            history_depth,
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
