//! Resolving a caller's session request into an absolute UTC interval.
//!
//! The daily-reset convention is a wall-clock time in the configured
//! reference timezone, so conversion has to go through the tz database:
//! a reset of 02:30 does not exist on spring-forward day and exists twice
//! on fall-back day.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::ValidationError;
use crate::session::types::SessionWindow;

/// Resolve the session window ending at the current instant.
///
/// Precedence: `reset_time` (validated `HHMM`), then a positive epoch-ms
/// `since`, then local midnight of the current day.
pub fn resolve_session_window(
    since_ms: Option<i64>,
    reset_time: Option<&str>,
    tz: Tz,
) -> Result<SessionWindow, ValidationError> {
    resolve_session_window_at(Utc::now(), since_ms, reset_time, tz)
}

/// Same as [`resolve_session_window`] with an injected "now" for tests.
pub fn resolve_session_window_at(
    now: DateTime<Utc>,
    since_ms: Option<i64>,
    reset_time: Option<&str>,
    tz: Tz,
) -> Result<SessionWindow, ValidationError> {
    if let Some(raw) = reset_time {
        let (hours, minutes) = parse_reset_time(raw)?;
        // Validation guarantees the wall-clock time exists.
        let boundary_time = NaiveTime::from_hms_opt(hours, minutes, 0)
            .ok_or(ValidationError::ResetTimeRange)?;

        let local_now = now.with_timezone(&tz);
        let mut boundary_date = local_now.date_naive();
        // Before today's boundary means the session began at yesterday's.
        if local_now.time() < boundary_time {
            boundary_date = boundary_date.pred_opt().unwrap_or(boundary_date);
        }

        let start = local_to_utc(tz, boundary_date.and_time(boundary_time));
        return Ok(SessionWindow { start, end: now });
    }

    if let Some(ms) = since_ms {
        if ms > 0 {
            if let LocalResult::Single(start) = Utc.timestamp_millis_opt(ms) {
                return Ok(SessionWindow { start, end: now });
            }
        }
        // Non-positive or unrepresentable `since` falls through to the
        // default window rather than erroring.
    }

    let local_now = now.with_timezone(&tz);
    let start = local_to_utc(tz, local_now.date_naive().and_time(NaiveTime::MIN));
    Ok(SessionWindow { start, end: now })
}

fn parse_reset_time(raw: &str) -> Result<(u32, u32), ValidationError> {
    if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::ResetTimeFormat);
    }
    let hours: u32 = raw[..2].parse().map_err(|_| ValidationError::ResetTimeFormat)?;
    let minutes: u32 = raw[2..].parse().map_err(|_| ValidationError::ResetTimeFormat)?;
    if hours > 23 || minutes > 59 {
        return Err(ValidationError::ResetTimeRange);
    }
    Ok((hours, minutes))
}

/// Civil-time → UTC through the tz database. A wall-clock time skipped by a
/// forward DST jump shifts one hour later; an ambiguous (repeated) time
/// resolves to its earlier instant.
fn local_to_utc(tz: Tz, naive: NaiveDateTime) -> DateTime<Utc> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        LocalResult::None => {
            let shifted = naive + Duration::hours(1);
            match tz.from_local_datetime(&shifted) {
                LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
                    dt.with_timezone(&Utc)
                }
                // Unreachable for real tz rules; fall back to naive-as-UTC.
                LocalResult::None => Utc.from_utc_datetime(&naive),
            }
        }
    }
}
