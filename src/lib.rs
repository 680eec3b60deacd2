//! Valorank server library crate.
//!
//! The interesting part lives in [`session`]: a pure, synchronous engine that
//! turns already-fetched match/rank data into session statistics and a rank
//! goal. Everything else (upstream client, leaderboard snapshot, HTTP routes)
//! feeds it or formats its output.

pub mod config;
pub mod error;
pub mod http;
pub mod leaderboard;
pub mod metrics;
pub mod ranks;
pub mod session;
pub mod upstream;
