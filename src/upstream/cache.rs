//! Read-through TTL cache for upstream response bodies.
//!
//! Keyed by the full request URL; values expire passively on lookup.

use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::time::{Duration, Instant};

static CACHE: Lazy<DashMap<String, (Instant, String)>> = Lazy::new(DashMap::new);

pub fn get(key: &str) -> Option<String> {
    let fresh = {
        let hit = CACHE.get(key)?;
        let (expires_at, body) = hit.value();
        (Instant::now() < *expires_at).then(|| body.clone())
    };
    if fresh.is_none() {
        CACHE.remove(key);
    }
    fresh
}

pub fn put(key: &str, body: &str, ttl_secs: u64) {
    if ttl_secs == 0 {
        return;
    }
    CACHE.insert(
        key.to_string(),
        (Instant::now() + Duration::from_secs(ttl_secs), body.to_string()),
    );
}
