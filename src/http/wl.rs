//! Session win/loss endpoints.
//!
//! `/wl` answers the bare W/L(/D) line; `/advanced_wl` adds the last-match
//! RR delta from the independently-stamped MMR history stream.

use actix_web::{get, web, Responder};
use chrono::{TimeZone, Utc};
use serde::Deserialize;

use crate::config;
use crate::error::{ServiceError, ValidationError};
use crate::http::{error_response, text_response};
use crate::ranks;
use crate::session::types::{RankDeltaEntry, SessionStats, SessionWindow};
use crate::session::{aggregate_session, resolve_session_window};
use crate::upstream::UpstreamClient;

#[derive(Debug, Deserialize)]
pub struct SessionQuery {
    /// Daily reset boundary, `HHMM` in the reference timezone.
    #[serde(rename = "resetTime")]
    pub reset_time: Option<String>,
    /// Explicit session start, epoch milliseconds.
    pub since: Option<i64>,
    /// Explicit session start, unix seconds (validated, unlike `since`).
    #[serde(rename = "sessionStart")]
    pub session_start: Option<i64>,
}

/// GET /wl/{name}/{tag}/{region}
#[get("/wl/{name}/{tag}/{region}")]
pub async fn wl(
    path: web::Path<(String, String, String)>,
    web::Query(query): web::Query<SessionQuery>,
    client: web::Data<UpstreamClient>,
) -> impl Responder {
    let (name, tag, region) = path.into_inner();
    match session_stats(&client, &name, &tag, &region, &query, false).await {
        Ok((stats, _)) => text_response(format_wl(&stats)),
        Err(err) => error_response(err),
    }
}

/// GET /advanced_wl/{name}/{tag}/{region}
#[get("/advanced_wl/{name}/{tag}/{region}")]
pub async fn advanced_wl(
    path: web::Path<(String, String, String)>,
    web::Query(query): web::Query<SessionQuery>,
    client: web::Data<UpstreamClient>,
) -> impl Responder {
    let (name, tag, region) = path.into_inner();
    match session_stats(&client, &name, &tag, &region, &query, true).await {
        Ok((stats, deltas)) => {
            // No in-window delta yet: fall back to the newest history entry
            // so the line still shows the most recent swing.
            let last_rr = stats
                .last_match_rr
                .or_else(|| deltas.first().map(|d| d.change));

            let mut line = format_wl(&stats);
            if stats.last_match_result.is_some() {
                line.push_str(" (Last:");
                if let Some(rr) = last_rr {
                    line.push_str(&format!(" {rr:+}RR"));
                }
                line.push(')');
            }
            text_response(line)
        }
        Err(err) => error_response(err),
    }
}

async fn session_stats(
    client: &UpstreamClient,
    name: &str,
    tag: &str,
    region: &str,
    query: &SessionQuery,
    with_deltas: bool,
) -> Result<(SessionStats, Vec<RankDeltaEntry>), ServiceError> {
    if !ranks::is_valid_region(region) {
        return Err(ValidationError::Region.into());
    }
    let window = window_from_query(query)?;
    let depth = config::settings().history_depth;

    let (account, matches, deltas) = if with_deltas {
        tokio::try_join!(
            client.fetch_account(name, tag),
            client.fetch_match_history(name, tag, region, "competitive", depth),
            client.fetch_mmr_history(name, tag, region),
        )?
    } else {
        let (account, matches) = tokio::try_join!(
            client.fetch_account(name, tag),
            client.fetch_match_history(name, tag, region, "competitive", depth),
        )?;
        (account, matches, Vec::new())
    };

    let puuid = account
        .and_then(|a| a.puuid)
        .ok_or(ServiceError::PlayerNotFound)?
        .to_string();

    let stats = aggregate_session(&matches, &deltas, &puuid, &window);
    Ok((stats, deltas))
}

fn window_from_query(query: &SessionQuery) -> Result<SessionWindow, ValidationError> {
    if let Some(secs) = query.session_start {
        let start = (secs > 0)
            .then(|| Utc.timestamp_opt(secs, 0).single())
            .flatten()
            .ok_or(ValidationError::SessionStart)?;
        return Ok(SessionWindow {
            start,
            end: Utc::now(),
        });
    }
    resolve_session_window(
        query.since,
        query.reset_time.as_deref(),
        config::settings().session_tz,
    )
}

fn format_wl(stats: &SessionStats) -> String {
    if stats.draws > 0 {
        format!("{}W/{}D/{}L", stats.wins, stats.draws, stats.losses)
    } else {
        format!("{}W/{}L", stats.wins, stats.losses)
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(wl).service(advanced_wl);
}
