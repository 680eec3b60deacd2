//! Match-history normalization.
//!
//! Match history is assembled from several overlapping paginated upstream
//! calls, so the same match can appear more than once.

use std::collections::HashSet;

use crate::session::types::MatchRecord;

/// Dedupe by match id (first occurrence wins, relative order preserved),
/// then sort newest-first. Records without an id cannot be deduplicated
/// safely and are always kept. Idempotent.
pub fn normalize_matches(mut raw: Vec<MatchRecord>) -> Vec<MatchRecord> {
    let mut seen = HashSet::new();
    raw.retain(|m| match &m.id {
        Some(id) => seen.insert(id.clone()),
        None => true,
    });

    // Stable sort: undated records keep their relative order at the end.
    raw.sort_by(|a, b| b.started_at.cmp(&a.started_at));
    raw
}
