//! Session Aggregation & Rank-Goal Engine.
//!
//! Pure and synchronous: every function here computes over already-fetched,
//! request-scoped inputs. No I/O, no locks, no retries. Upstream fetching,
//! caching and formatting live elsewhere.

pub mod aggregate;
pub mod goal;
pub mod history;
pub mod types;
pub mod window;

pub use aggregate::aggregate_session;
pub use goal::{rr_to_custom_goal, rr_to_next_goal};
pub use history::normalize_matches;
pub use window::{resolve_session_window, resolve_session_window_at};
