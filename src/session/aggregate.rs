//! Folding matches and rank deltas into per-session statistics.
//!
//! The two input streams cover the same underlying matches but are stamped
//! and shaped independently, so they are folded in two independent passes
//! rather than joined by match id.

use crate::session::types::{
    MatchRecord, MatchResult, RankDeltaEntry, SessionStats, SessionWindow, TeamOutcome,
};

/// Compute session statistics for `puuid` over `window`.
///
/// `matches` must be newest-first (see [`crate::session::normalize_matches`]);
/// `deltas` arrive newest-first from upstream. Matches whose result cannot be
/// determined are skipped, not guessed: under-counting beats mis-counting.
/// Never fails on malformed data.
pub fn aggregate_session(
    matches: &[MatchRecord],
    deltas: &[RankDeltaEntry],
    puuid: &str,
    window: &SessionWindow,
) -> SessionStats {
    let mut stats = SessionStats::default();

    for m in matches {
        let started = match m.started_at {
            Some(t) => t,
            None => {
                log::debug!("skipping undated match {:?}", m.id);
                continue;
            }
        };
        if !window.contains(started) {
            continue;
        }

        let participant = match m.players.iter().find(|p| p.puuid == puuid) {
            Some(p) => p,
            None => {
                log::debug!("player {puuid} not found in match {:?}", m.id);
                continue;
            }
        };

        let result = match resolve_result(m, &participant.team_id) {
            Some(r) => r,
            None => {
                log::debug!("match {:?} has no resolvable outcome, skipped", m.id);
                continue;
            }
        };

        // Newest-first iteration: the first resolvable hit is the last match
        // played this session.
        if stats.last_match_result.is_none() {
            stats.last_match_result = Some(result);
            stats.last_map = m.map.clone();
        }

        match result {
            MatchResult::Win => stats.wins += 1,
            MatchResult::Loss => stats.losses += 1,
            MatchResult::Draw => stats.draws += 1,
        }
    }

    for d in deltas {
        if !window.contains(d.at) {
            continue;
        }
        stats.total_rr_change += d.change;
        if stats.last_match_rr.is_none() {
            stats.last_match_rr = Some(d.change);
        }
    }

    stats
}

/// Fallback chain over whichever result schema the match carries:
/// explicit won-flags for both teams, else round counts for both teams,
/// else unresolvable.
fn resolve_result(m: &MatchRecord, team_id: &str) -> Option<MatchResult> {
    let ours = m.teams.iter().find(|t| t.team_id == team_id)?;
    let theirs = m.teams.iter().find(|t| t.team_id != team_id)?;

    match (ours.outcome, theirs.outcome) {
        (TeamOutcome::Won(us), TeamOutcome::Won(them)) => match (us, them) {
            (true, false) => Some(MatchResult::Win),
            (false, true) => Some(MatchResult::Loss),
            // Both teams flagged as losers is a legitimate enforced tie.
            (false, false) => Some(MatchResult::Draw),
            // Both flagged as winners is corrupt data; neither flag is
            // trustworthy.
            (true, true) => None,
        },
        (TeamOutcome::Rounds(us), TeamOutcome::Rounds(them)) => Some(if us == them {
            MatchResult::Draw
        } else if us > them {
            MatchResult::Win
        } else {
            MatchResult::Loss
        }),
        _ => None,
    }
}
