//! HTTP client for the upstream stats API.
//!
//! Owns everything the session engine must not: network I/O, bounded
//! retries, pagination and response caching. Match history is fetched as
//! overlapping concurrent pages and run through the normalizer before it
//! reaches any caller.

use futures::future::try_join_all;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio_retry::strategy::{jitter, ExponentialBackoff};
use tokio_retry::Retry;
use url::Url;

use crate::config::Settings;
use crate::error::UpstreamError;
use crate::leaderboard::LeaderboardEntry;
use crate::metrics;
use crate::session::normalize_matches;
use crate::session::types::{MatchRecord, RankDeltaEntry};
use crate::upstream::cache;
use crate::upstream::models::{
    Envelope, RawAccount, RawError, RawLeaderboard, RawMatch, RawMmr, RawMmrCurrent, RawRankDelta,
};

/// Matches per paginated history request (upstream hard limit).
pub const MATCHES_PER_PAGE: usize = 10;

#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base: Url,
    api_key: String,
    cache_ttl: u64,
}

impl UpstreamClient {
    pub fn new(base_url: &str, api_key: &str, cache_ttl: u64) -> anyhow::Result<Self> {
        Ok(Self {
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(15))
                .build()?,
            base: Url::parse(base_url)?,
            api_key: api_key.to_string(),
            cache_ttl,
        })
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        Self::new(
            &settings.upstream_base_url,
            &settings.upstream_api_key,
            settings.cache_ttl,
        )
    }

    /// `GET /valorant/v1/account/{name}/{tag}`
    pub async fn fetch_account(
        &self,
        name: &str,
        tag: &str,
    ) -> Result<Option<RawAccount>, UpstreamError> {
        let url = self.endpoint(&["valorant", "v1", "account", name, tag]);
        let envelope: Envelope<RawAccount> = self.get_json(url, &[]).await?;
        check(envelope)
    }

    /// `GET /valorant/v2/mmr/{region}/{name}/{tag}` — current tier/RR/ELO.
    pub async fn fetch_mmr(
        &self,
        name: &str,
        tag: &str,
        region: &str,
    ) -> Result<Option<RawMmrCurrent>, UpstreamError> {
        let region = region.to_lowercase();
        let url = self.endpoint(&["valorant", "v2", "mmr", &region, name, tag]);
        let envelope: Envelope<RawMmr> = self.get_json(url, &[]).await?;
        Ok(check(envelope)?.and_then(|mmr| mmr.current_data))
    }

    /// `GET /valorant/v1/mmr-history/{region}/{name}/{tag}`, newest first,
    /// already normalized into the single delta shape the engine consumes.
    pub async fn fetch_mmr_history(
        &self,
        name: &str,
        tag: &str,
        region: &str,
    ) -> Result<Vec<RankDeltaEntry>, UpstreamError> {
        let region = region.to_lowercase();
        let url = self.endpoint(&["valorant", "v1", "mmr-history", &region, name, tag]);
        let envelope: Envelope<Vec<RawRankDelta>> = self.get_json(url, &[]).await?;
        Ok(check(envelope)?
            .unwrap_or_default()
            .into_iter()
            .filter_map(RawRankDelta::normalize)
            .collect())
    }

    /// `GET /valorant/v4/matches/{region}/pc/{name}/{tag}` paginated.
    ///
    /// Pages are fetched concurrently and may overlap when the upstream
    /// shifts under us, hence the dedupe + newest-first sort afterwards.
    pub async fn fetch_match_history(
        &self,
        name: &str,
        tag: &str,
        region: &str,
        mode: &str,
        total: usize,
    ) -> Result<Vec<MatchRecord>, UpstreamError> {
        let region = region.to_lowercase();
        let mut requests = Vec::new();
        let mut start = 0;
        while start < total {
            let size = MATCHES_PER_PAGE.min(total - start);
            let url = self.endpoint(&["valorant", "v4", "matches", &region, "pc", name, tag]);
            let query = [
                ("mode", mode.to_string()),
                ("size", size.to_string()),
                ("start", start.to_string()),
            ];
            requests.push(async move {
                self.get_json::<Envelope<Vec<RawMatch>>>(url, &query).await
            });
            start += MATCHES_PER_PAGE;
        }

        let responses = try_join_all(requests).await?;
        let mut all = Vec::new();
        for envelope in responses {
            all.extend(
                check(envelope)?
                    .unwrap_or_default()
                    .into_iter()
                    .map(RawMatch::into_record),
            );
        }

        let mut matches = normalize_matches(all);
        matches.truncate(total);
        log::info!("fetched {} matches for {name}#{tag}", matches.len());
        Ok(matches)
    }

    /// `GET /valorant/v3/leaderboard/{region}/pc` — live ordered leaderboard.
    pub async fn fetch_leaderboard(
        &self,
        region: &str,
    ) -> Result<Vec<LeaderboardEntry>, UpstreamError> {
        let region = region.to_lowercase();
        let url = self.endpoint(&["valorant", "v3", "leaderboard", &region, "pc"]);
        let envelope: Envelope<RawLeaderboard> = self.get_json(url, &[]).await?;
        let mut players = check(envelope)?.map(|lb| lb.players).unwrap_or_default();
        players.sort_by_key(|e| e.position);
        Ok(players)
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.clear().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        mut url: Url,
        query: &[(&str, String)],
    ) -> Result<T, UpstreamError> {
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        let cache_key = url.to_string();
        if let Some(body) = cache::get(&cache_key) {
            metrics::UPSTREAM_CACHE_HITS.inc();
            return Ok(serde_json::from_str(&body)?);
        }

        let strategy = ExponentialBackoff::from_millis(200).map(jitter).take(2);
        let response = Retry::spawn(strategy, || {
            metrics::UPSTREAM_REQUESTS.inc();
            let request = self
                .http
                .get(url.clone())
                .header(AUTHORIZATION, self.api_key.clone());
            async move { request.send().await }
        })
        .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<RawError>(&body)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| body.chars().take(200).collect());
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message,
            });
        }

        cache::put(&cache_key, &body, self.cache_ttl);
        Ok(serde_json::from_str(&body)?)
    }
}

/// Unwrap the upstream envelope, surfacing in-body error statuses.
fn check<T>(envelope: Envelope<T>) -> Result<Option<T>, UpstreamError> {
    match envelope.status {
        Some(code) if code != 200 => Err(UpstreamError::Status {
            status: code,
            message: "upstream rejected the request".into(),
        }),
        _ => Ok(envelope.data),
    }
}
