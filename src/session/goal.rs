//! RR-to-goal arithmetic.
//!
//! Every tier below Immortal 3 is a fixed 0–100 RR band. The Radiant
//! threshold is competitively defined instead: it tracks the RR of
//! leaderboard position 500, so it is derived from an injected leaderboard
//! rather than a constant. That asymmetry is deliberate.

use crate::leaderboard::LeaderboardEntry;
use crate::ranks::{
    self, RADIANT_BASE_THRESHOLD, RADIANT_CUTOFF_POSITION, THRESHOLD_TIER, TOP_TIER,
};
use crate::session::types::{CustomGoal, RankGoal};

/// RR needed to reach the next tier from `current_tier` at `current_rr`.
///
/// The leaderboard parameter only matters at Immortal 3; pass `None` when a
/// snapshot is unavailable and the static base threshold applies.
pub fn rr_to_next_goal(
    current_tier: u8,
    current_rr: i32,
    leaderboard: Option<&[LeaderboardEntry]>,
) -> RankGoal {
    // Unranked players aim for the first real tier.
    if current_tier == 0 {
        return RankGoal {
            rr_needed: 100,
            goal: "Iron 1".into(),
        };
    }

    if current_tier >= TOP_TIER {
        return RankGoal {
            rr_needed: 0,
            goal: "Radiant (Max!)".into(),
        };
    }

    if current_tier == THRESHOLD_TIER {
        let threshold = radiant_threshold(leaderboard);
        return RankGoal {
            rr_needed: (threshold - current_rr).max(0),
            goal: "Radiant".into(),
        };
    }

    let goal = ranks::tier_name(current_tier + 1).unwrap_or("Unknown").to_string();
    RankGoal {
        rr_needed: (100 - current_rr).max(0),
        goal,
    }
}

/// RR threshold to enter Radiant: one point above leaderboard position 500,
/// floored at the static base. Falls back to the base when the snapshot is
/// missing or too short.
pub fn radiant_threshold(leaderboard: Option<&[LeaderboardEntry]>) -> i32 {
    match leaderboard {
        Some(entries) if entries.len() >= RADIANT_CUTOFF_POSITION => {
            let cutoff = entries[RADIANT_CUTOFF_POSITION - 1].ranked_rating + 1;
            RADIANT_BASE_THRESHOLD.max(cutoff)
        }
        _ => RADIANT_BASE_THRESHOLD,
    }
}

/// ELO distance to an arbitrary named rank. Returns `None` for an unknown
/// rank name so the caller can answer with the list of valid ones.
pub fn rr_to_custom_goal(current_elo: i32, goal_rank: &str) -> Option<CustomGoal> {
    let (canonical, threshold) = ranks::elo_threshold(goal_rank)?;
    let remaining = (threshold - current_elo).max(0);
    let achieved = remaining == 0;
    Some(CustomGoal {
        rr_needed: remaining,
        goal: if achieved {
            format!("{canonical} (already achieved)")
        } else {
            canonical.to_string()
        },
        achieved,
    })
}
