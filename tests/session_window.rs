//! Session-window resolution against fixed instants (no wall clock).

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Europe::Warsaw;
use valorank_server::error::ValidationError;
use valorank_server::session::resolve_session_window_at;

fn utc(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid RFC 3339 instant")
}

#[test]
fn reset_before_boundary_rolls_back_one_day() {
    // 07:00 local (CEST, +2) with an 08:00 reset: session began yesterday.
    let now = utc("2024-06-10T05:00:00Z");
    let window = resolve_session_window_at(now, None, Some("0800"), Warsaw).unwrap();
    assert_eq!(window.start, utc("2024-06-09T06:00:00Z"));
    assert_eq!(window.end, now);
}

#[test]
fn reset_after_boundary_uses_today() {
    // 09:00 local with an 08:00 reset: session began this morning.
    let now = utc("2024-06-10T07:00:00Z");
    let window = resolve_session_window_at(now, None, Some("0800"), Warsaw).unwrap();
    assert_eq!(window.start, utc("2024-06-10T06:00:00Z"));
}

#[test]
fn reset_uses_winter_offset_in_winter() {
    // 07:30 local (CET, +1) with an 08:00 reset: yesterday 08:00 CET.
    let now = utc("2024-01-15T06:30:00Z");
    let window = resolve_session_window_at(now, None, Some("0800"), Warsaw).unwrap();
    assert_eq!(window.start, utc("2024-01-14T07:00:00Z"));
}

#[test]
fn reset_skipped_by_dst_gap_shifts_forward() {
    // Warsaw 2024-03-31: clocks jump 02:00 -> 03:00, so 02:30 never happens.
    // The boundary lands on the first representable instant, 03:30 CEST.
    let now = utc("2024-03-31T08:00:00Z");
    let window = resolve_session_window_at(now, None, Some("0230"), Warsaw).unwrap();
    assert_eq!(window.start, utc("2024-03-31T01:30:00Z"));
}

#[test]
fn ambiguous_reset_resolves_to_earlier_instant() {
    // Warsaw 2024-10-27: clocks fall back 03:00 -> 02:00, 02:30 happens twice.
    let now = utc("2024-10-27T10:00:00Z");
    let window = resolve_session_window_at(now, None, Some("0230"), Warsaw).unwrap();
    assert_eq!(window.start, utc("2024-10-27T00:30:00Z"));
}

#[test]
fn malformed_reset_time_is_a_format_error() {
    let now = utc("2024-06-10T05:00:00Z");
    for raw in ["8am", "080", "08000", "08:0", "aaaa", ""] {
        let err = resolve_session_window_at(now, None, Some(raw), Warsaw).unwrap_err();
        assert_eq!(err, ValidationError::ResetTimeFormat, "input {raw:?}");
    }
}

#[test]
fn out_of_range_reset_time_is_a_range_error() {
    let now = utc("2024-06-10T05:00:00Z");
    for raw in ["2400", "0060", "9900"] {
        let err = resolve_session_window_at(now, None, Some(raw), Warsaw).unwrap_err();
        assert_eq!(err, ValidationError::ResetTimeRange, "input {raw:?}");
    }
}

#[test]
fn reset_time_takes_precedence_over_since() {
    let now = utc("2024-06-10T07:00:00Z");
    let window =
        resolve_session_window_at(now, Some(1_700_000_000_000), Some("0800"), Warsaw).unwrap();
    assert_eq!(window.start, utc("2024-06-10T06:00:00Z"));
}

#[test]
fn explicit_since_is_used_verbatim() {
    let now = utc("2024-06-10T07:00:00Z");
    let since = 1_717_980_000_000; // 2024-06-10T01:20:00Z
    let window = resolve_session_window_at(now, Some(since), None, Warsaw).unwrap();
    assert_eq!(window.start, Utc.timestamp_millis_opt(since).unwrap());
    assert_eq!(window.end, now);
}

#[test]
fn non_positive_since_falls_back_to_local_midnight() {
    // 12:00 CEST; local midnight was 22:00 UTC the previous day.
    let now = utc("2024-06-10T10:00:00Z");
    for since in [Some(0), Some(-5)] {
        let window = resolve_session_window_at(now, since, None, Warsaw).unwrap();
        assert_eq!(window.start, utc("2024-06-09T22:00:00Z"));
    }
}

#[test]
fn default_window_starts_at_local_midnight() {
    let now = utc("2024-06-10T10:00:00Z");
    let window = resolve_session_window_at(now, None, None, Warsaw).unwrap();
    assert_eq!(window.start, utc("2024-06-09T22:00:00Z"));
    assert_eq!(window.end, now);
}
