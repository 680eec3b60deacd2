//! Session aggregation: window filtering, the result fallback chain and the
//! independent rank-delta pass.

use chrono::{DateTime, Utc};
use valorank_server::session::aggregate_session;
use valorank_server::session::types::{
    MatchParticipant, MatchRecord, MatchResult, RankDeltaEntry, SessionWindow, TeamOutcome,
    TeamRecord,
};

const PLAYER: &str = "11111111-2222-3333-4444-555555555555";

fn utc(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid RFC 3339 instant")
}

fn window(start: &str, end: &str) -> SessionWindow {
    SessionWindow {
        start: utc(start),
        end: utc(end),
    }
}

fn players() -> Vec<MatchParticipant> {
    vec![
        MatchParticipant {
            puuid: PLAYER.into(),
            team_id: "Red".into(),
            stats: None,
        },
        MatchParticipant {
            puuid: "someone-else".into(),
            team_id: "Blue".into(),
            stats: None,
        },
    ]
}

fn teams(ours: TeamOutcome, theirs: TeamOutcome) -> Vec<TeamRecord> {
    vec![
        TeamRecord {
            team_id: "Red".into(),
            outcome: ours,
        },
        TeamRecord {
            team_id: "Blue".into(),
            outcome: theirs,
        },
    ]
}

fn game(id: &str, at: &str, map: Option<&str>, ours: TeamOutcome, theirs: TeamOutcome) -> MatchRecord {
    MatchRecord {
        id: Some(id.into()),
        started_at: Some(utc(at)),
        map: map.map(Into::into),
        players: players(),
        teams: teams(ours, theirs),
    }
}

fn delta(at: &str, change: i32) -> RankDeltaEntry {
    RankDeltaEntry {
        at: utc(at),
        change,
    }
}

#[test]
fn counts_in_window_matches_across_both_schemas() {
    let w = window("2024-06-10T00:00:00Z", "2024-06-10T12:00:00Z");
    // Newest-first: a flag win, a rounds draw, and one match before midnight.
    let matches = vec![
        game("won", "2024-06-10T10:00:00Z", Some("Ascent"),
            TeamOutcome::Won(true), TeamOutcome::Won(false)),
        game("tied", "2024-06-10T09:00:00Z", Some("Bind"),
            TeamOutcome::Rounds(13), TeamOutcome::Rounds(13)),
        game("stale", "2024-06-09T23:00:00Z", Some("Haven"),
            TeamOutcome::Won(true), TeamOutcome::Won(false)),
    ];

    let stats = aggregate_session(&matches, &[], PLAYER, &w);
    assert_eq!((stats.wins, stats.draws, stats.losses), (1, 1, 0));
    assert_eq!(stats.last_match_result, Some(MatchResult::Win));
    assert_eq!(stats.last_map.as_deref(), Some("Ascent"));
}

#[test]
fn rounds_schema_decides_by_count() {
    let w = window("2024-06-10T00:00:00Z", "2024-06-10T12:00:00Z");
    let matches = vec![
        game("lost", "2024-06-10T10:00:00Z", None,
            TeamOutcome::Rounds(9), TeamOutcome::Rounds(13)),
        game("won", "2024-06-10T09:00:00Z", None,
            TeamOutcome::Rounds(13), TeamOutcome::Rounds(7)),
    ];
    let stats = aggregate_session(&matches, &[], PLAYER, &w);
    assert_eq!((stats.wins, stats.draws, stats.losses), (1, 0, 1));
    assert_eq!(stats.last_match_result, Some(MatchResult::Loss));
}

#[test]
fn double_loss_flags_are_a_legitimate_draw() {
    let w = window("2024-06-10T00:00:00Z", "2024-06-10T12:00:00Z");
    let matches = vec![game("tie", "2024-06-10T10:00:00Z", None,
        TeamOutcome::Won(false), TeamOutcome::Won(false))];
    let stats = aggregate_session(&matches, &[], PLAYER, &w);
    assert_eq!(stats.draws, 1);
    assert_eq!(stats.last_match_result, Some(MatchResult::Draw));
}

#[test]
fn unresolvable_matches_are_skipped_not_guessed() {
    let w = window("2024-06-10T00:00:00Z", "2024-06-10T12:00:00Z");
    let matches = vec![
        // Both teams flagged as winners: corrupt.
        game("corrupt", "2024-06-10T10:00:00Z", None,
            TeamOutcome::Won(true), TeamOutcome::Won(true)),
        // Schema mixed within one match: not trusted.
        game("mixed", "2024-06-10T09:30:00Z", None,
            TeamOutcome::Won(true), TeamOutcome::Rounds(5)),
        // No result fields at all.
        game("bare", "2024-06-10T09:00:00Z", None,
            TeamOutcome::Unknown, TeamOutcome::Unknown),
        // A resolvable one, so the skips are observable.
        game("won", "2024-06-10T08:00:00Z", Some("Lotus"),
            TeamOutcome::Won(true), TeamOutcome::Won(false)),
    ];
    let stats = aggregate_session(&matches, &[], PLAYER, &w);
    assert_eq!((stats.wins, stats.draws, stats.losses), (1, 0, 0));
    // The skipped matches also never became "last match".
    assert_eq!(stats.last_match_result, Some(MatchResult::Win));
    assert_eq!(stats.last_map.as_deref(), Some("Lotus"));
}

#[test]
fn matches_without_the_player_are_ignored() {
    let w = window("2024-06-10T00:00:00Z", "2024-06-10T12:00:00Z");
    let mut m = game("other", "2024-06-10T10:00:00Z", None,
        TeamOutcome::Won(true), TeamOutcome::Won(false));
    m.players.retain(|p| p.puuid != PLAYER);
    let stats = aggregate_session(&[m], &[], PLAYER, &w);
    assert_eq!((stats.wins, stats.draws, stats.losses), (0, 0, 0));
    assert_eq!(stats.last_match_result, None);
}

#[test]
fn window_is_half_open() {
    let w = window("2024-06-10T00:00:00Z", "2024-06-10T12:00:00Z");
    let matches = vec![
        // Exactly at start: included.
        game("at-start", "2024-06-10T00:00:00Z", None,
            TeamOutcome::Won(true), TeamOutcome::Won(false)),
        // Exactly at end: excluded.
        game("at-end", "2024-06-10T12:00:00Z", None,
            TeamOutcome::Won(true), TeamOutcome::Won(false)),
    ];
    let stats = aggregate_session(&matches, &[], PLAYER, &w);
    assert_eq!(stats.wins, 1);
}

#[test]
fn delta_pass_sums_and_captures_most_recent() {
    let w = window("2024-06-10T00:00:00Z", "2024-06-10T12:00:00Z");
    let deltas = vec![
        delta("2024-06-10T10:30:00Z", 18),
        delta("2024-06-10T09:30:00Z", -12),
        delta("2024-06-09T22:00:00Z", 50), // outside the window
    ];
    let stats = aggregate_session(&[], &deltas, PLAYER, &w);
    assert_eq!(stats.total_rr_change, 6);
    assert_eq!(stats.last_match_rr, Some(18));
    // The delta stream alone never produces match counts.
    assert_eq!((stats.wins, stats.draws, stats.losses), (0, 0, 0));
}

#[test]
fn empty_session_is_all_zero_not_an_error() {
    let w = window("2024-06-10T00:00:00Z", "2024-06-10T12:00:00Z");
    let stats = aggregate_session(&[], &[], PLAYER, &w);
    assert_eq!((stats.wins, stats.draws, stats.losses), (0, 0, 0));
    assert_eq!(stats.last_match_result, None);
    assert_eq!(stats.last_match_rr, None);
    assert_eq!(stats.total_rr_change, 0);
    assert_eq!(stats.last_map, None);
}

#[test]
fn totals_match_resolvable_in_window_count() {
    let w = window("2024-06-10T00:00:00Z", "2024-06-10T12:00:00Z");
    let matches = vec![
        game("w1", "2024-06-10T11:00:00Z", None,
            TeamOutcome::Won(true), TeamOutcome::Won(false)),
        game("l1", "2024-06-10T10:00:00Z", None,
            TeamOutcome::Won(false), TeamOutcome::Won(true)),
        game("skip", "2024-06-10T09:00:00Z", None,
            TeamOutcome::Unknown, TeamOutcome::Unknown),
        game("d1", "2024-06-10T08:00:00Z", None,
            TeamOutcome::Rounds(11), TeamOutcome::Rounds(11)),
        game("stale", "2024-06-09T08:00:00Z", None,
            TeamOutcome::Won(true), TeamOutcome::Won(false)),
    ];
    let stats = aggregate_session(&matches, &[], PLAYER, &w);
    // 3 resolvable in-window matches; the unresolvable and stale ones do not
    // count on any side.
    assert_eq!(stats.wins + stats.losses + stats.draws, 3);
}
